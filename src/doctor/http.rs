//! Blocking HTTP client for registry and server lookups.

use anyhow::{bail, Context};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{LeelaError, Result};

/// Fetches text and JSON over HTTP/HTTPS.
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client with the given request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("leela/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| LeelaError::Other(e.into()))?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return the body as text.
    pub fn get_text(&self, url: &str) -> Result<String> {
        self.fetch_text(url).map_err(|e| http_error(url, e))
    }

    /// GET `url` and deserialize the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url)?;
        serde_json::from_str(&body)
            .context("Response is not the expected JSON")
            .map_err(|e| http_error(url, e))
    }

    fn fetch_text(&self, url: &str) -> anyhow::Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        Ok(response.text()?)
    }
}

fn http_error(url: &str, err: anyhow::Error) -> LeelaError {
    LeelaError::Http {
        url: url.to_string(),
        message: format!("{:#}", err),
    }
}
