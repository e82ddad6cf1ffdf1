//! Invocation environment: the name the tool was called by, debug flag, CI.

use std::path::Path;

/// Name used when argv[0] is unavailable.
pub const DEFAULT_TOOL_NAME: &str = "leela";

/// The file name the tool was invoked as.
///
/// Aliases created with `leela alias <name>` are symlinks, so this is the
/// alias name when invoked through one.
pub fn invoked_name(argv0: Option<&str>) -> String {
    argv0
        .and_then(|a| Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_TOOL_NAME)
        .to_string()
}

/// Environment variable enabling command logging for a tool name.
///
/// `leela` -> `LEELA_DEBUG`, `my-tool.exe` -> `MY_TOOL_DEBUG`.
pub fn debug_env_var(tool_name: &str) -> String {
    let stem = Path::new(tool_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(tool_name);
    format!("{}_DEBUG", stem.to_uppercase().replace(['-', '.'], "_"))
}

/// Whether the debug flag for this tool name is set to a non-empty value.
pub fn debug_enabled(tool_name: &str) -> bool {
    std::env::var(debug_env_var(tool_name))
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
