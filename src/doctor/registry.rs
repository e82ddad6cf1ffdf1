//! Latest-version lookups against the npm registry.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{LeelaError, Result};

use super::http::HttpClient;

/// Source of "latest published version" answers.
pub trait VersionSource {
    fn latest_version(&self, package: &str) -> Result<String>;
}

/// Registry packument, reduced to what we read.
#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
}

/// Reads the `latest` dist-tag from an npm registry.
pub struct NpmRegistry {
    http: HttpClient,
    base_url: String,
}

impl NpmRegistry {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Registry document URL; the scope separator is escaped.
    pub fn package_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package.replace('/', "%2F"))
    }
}

impl VersionSource for NpmRegistry {
    fn latest_version(&self, package: &str) -> Result<String> {
        let url = self.package_url(package);
        let packument: Packument = self.http.get_json(&url)?;
        packument
            .dist_tags
            .get("latest")
            .cloned()
            .ok_or_else(|| LeelaError::Http {
                url,
                message: format!("{} has no latest dist-tag", package),
            })
    }
}

/// Fixed answers, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct StaticVersions {
    versions: HashMap<String, String>,
}

impl StaticVersions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, package: &str, version: &str) -> Self {
        self.versions
            .insert(package.to_string(), version.to_string());
        self
    }
}

impl VersionSource for StaticVersions {
    fn latest_version(&self, package: &str) -> Result<String> {
        self.versions
            .get(package)
            .cloned()
            .ok_or_else(|| LeelaError::Http {
                url: package.to_string(),
                message: "no such package".to_string(),
            })
    }
}
