//! The localproxy server.

use serde::Deserialize;

use crate::error::Result;
use crate::ui::UserInterface;

use super::Doctor;

const SERVER_NAME: &str = "localproxy server";

#[derive(Debug, Deserialize)]
struct PublishedManifest {
    version: String,
}

impl Doctor<'_> {
    /// Compare the running server's reported version with the published one.
    ///
    /// An unreachable endpoint is reported and the doctor carries on.
    pub fn check_localproxy_server_is_up_to_date(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let config = self.config;
        let theme = ui.theme().clone();

        let versions = self
            .http
            .get_text(&config.server_version_url)
            .map(|body| body.trim().to_string())
            .and_then(|actual| {
                self.http
                    .get_json::<PublishedManifest>(&config.expected_server_version_url)
                    .map(|published| (published.version, actual))
            });

        let (expected, actual) = match versions {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!("server version check failed: {}", e);
                ui.outdated(&format!(
                    "Could not determine the {} version.",
                    theme.bad(SERVER_NAME)
                ));
                ui.message(&format!("   {}", e));
                ui.message("");
                return Ok(());
            }
        };

        if expected == actual {
            ui.ok(&format!(
                "System {} ({}) is up to date!",
                theme.good(SERVER_NAME),
                theme.good(&actual)
            ));
            return Ok(());
        }

        ui.outdated(&format!("System {} is not up to date!", theme.bad(SERVER_NAME)));
        ui.message(&format!(
            "   {} is latest but {} is installed.",
            theme.good(&expected),
            theme.bad(&actual)
        ));
        ui.message(&format!(
            "   Download and install the latest release from\n   {} to fix.",
            theme.command(&config.server_releases_url)
        ));
        ui.message("");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LeelaConfig;
    use crate::doctor::{Doctor, StaticVersions, VersionContext};
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;
    use httpmock::prelude::*;

    fn config(server: &MockServer) -> LeelaConfig {
        LeelaConfig {
            server_version_url: server.url("/__proxy__/api/version"),
            expected_server_version_url: server.url("/localproxy-server/package.json"),
            server_releases_url: "https://example.test/releases".into(),
            ..Default::default()
        }
    }

    fn check(config: &LeelaConfig) -> MockUI {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let doctor = Doctor::with_versions(
            config,
            &runner,
            VersionContext::new(Box::new(StaticVersions::new())),
        )
        .unwrap();
        doctor.check_localproxy_server_is_up_to_date(&mut ui).unwrap();
        ui
    }

    #[test]
    fn matching_versions_are_up_to_date() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/__proxy__/api/version");
            then.status(200).body("2.3.1\n");
        });
        server.mock(|when, then| {
            when.method(GET).path("/localproxy-server/package.json");
            then.status(200).body(r#"{"name":"localproxy-server","version":"2.3.1"}"#);
        });

        let ui = check(&config(&server));

        assert!(ui.has_ok("System localproxy server (2.3.1) is up to date!"));
    }

    #[test]
    fn older_server_points_at_releases() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/__proxy__/api/version");
            then.status(200).body("2.0.0");
        });
        server.mock(|when, then| {
            when.method(GET).path("/localproxy-server/package.json");
            then.status(200).body(r#"{"version":"2.3.1"}"#);
        });

        let ui = check(&config(&server));

        assert!(ui.has_outdated("System localproxy server is not up to date!"));
        assert!(ui.has_message("2.3.1 is latest but 2.0.0 is installed."));
        assert!(ui.has_message("https://example.test/releases to fix."));
    }

    #[test]
    fn unreachable_server_is_a_warning() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/__proxy__/api/version");
            then.status(502);
        });

        let ui = check(&config(&server));

        assert!(ui.has_outdated("Could not determine the localproxy server version."));
        assert!(ui.oks().is_empty());
    }
}
