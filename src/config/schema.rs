//! Configuration schema types.

use serde::{Deserialize, Serialize};

/// Default npm registry base URL.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Endpoint a running localproxy server answers with its version.
pub const DEFAULT_SERVER_VERSION_URL: &str = "http://localhost/__proxy__/api/version";

/// Manifest of the latest published localproxy server.
pub const DEFAULT_EXPECTED_SERVER_VERSION_URL: &str =
    "https://raw.githubusercontent.com/kj800x/localproxy/master/localproxy-server/package.json";

/// Where users download new localproxy server releases.
pub const DEFAULT_SERVER_RELEASES_URL: &str = "https://github.com/kj800x/localproxy/releases";

/// Tool configuration.
///
/// Every field has a default, so an empty (or absent) config file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeelaConfig {
    /// Base URL of the npm registry.
    pub registry_url: String,

    /// Packages the doctor expects to be installed globally.
    pub global_packages: Vec<String>,

    /// Packages the doctor checks in project manifests.
    pub local_packages: Vec<String>,

    /// URL returning the running localproxy server's version as plain text.
    pub server_version_url: String,

    /// URL of a package.json whose `version` is the expected server version.
    pub expected_server_version_url: String,

    /// Shown to the user when the server is out of date.
    pub server_releases_url: String,

    /// Directory levels the manifest finder descends.
    pub search_depth: usize,

    /// How far (ms) `node_modules` may trail the lockfile and still count as fresh.
    pub lock_window_ms: u64,

    /// Timeout for registry and server requests.
    pub http_timeout_secs: u64,
}

impl Default for LeelaConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            global_packages: vec![
                "@kj800x/leela".to_string(),
                "@kj800x/localproxy-cli".to_string(),
            ],
            local_packages: vec![
                "@kj800x/localproxy-react-scripts".to_string(),
                "@kj800x/localproxy-client".to_string(),
                "@kj800x/localproxy-cli".to_string(),
            ],
            server_version_url: DEFAULT_SERVER_VERSION_URL.to_string(),
            expected_server_version_url: DEFAULT_EXPECTED_SERVER_VERSION_URL.to_string(),
            server_releases_url: DEFAULT_SERVER_RELEASES_URL.to_string(),
            search_depth: 4,
            lock_window_ms: 2000,
            http_timeout_secs: 10,
        }
    }
}
