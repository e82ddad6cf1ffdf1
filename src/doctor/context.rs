//! Per-run version state.
//!
//! Registry answers are cached for the life of the run: read-through,
//! append-only, never invalidated. The global install directory is resolved
//! once on first use.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{LeelaError, Result};
use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::shell::{Invocation, ProcessRunner};

use super::registry::VersionSource;

/// Reported as the installed version of a global package that isn't there.
pub const NOT_INSTALLED: &str = "[[NOT INSTALLED]]";

/// Latest and installed versions, cached per run.
pub struct VersionContext {
    source: Box<dyn VersionSource>,
    latest: HashMap<String, String>,
    global_dir: Option<PathBuf>,
}

impl VersionContext {
    pub fn new(source: Box<dyn VersionSource>) -> Self {
        Self {
            source,
            latest: HashMap::new(),
            global_dir: None,
        }
    }

    /// Use a known global install directory instead of asking npm.
    pub fn with_global_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_dir = Some(dir.into());
        self
    }

    /// Latest published version of `package`.
    pub fn latest(&mut self, package: &str) -> Result<String> {
        if let Some(version) = self.latest.get(package) {
            return Ok(version.clone());
        }

        let version = self.source.latest_version(package)?;
        tracing::debug!("latest {} is {}", package, version);
        self.latest.insert(package.to_string(), version.clone());
        Ok(version)
    }

    /// Number of distinct packages looked up so far.
    pub fn cached_count(&self) -> usize {
        self.latest.len()
    }

    /// npm's global `node_modules`, from `npm root -g`.
    pub fn global_dir(&mut self, runner: &dyn ProcessRunner) -> Result<&Path> {
        let dir = match self.global_dir.take() {
            Some(dir) => dir,
            None => {
                let inv = Invocation::new("npm", ["root", "-g"]).captured();
                let result = runner.run(&inv)?.check(&inv)?;
                let stdout = result.stdout.trim();
                if stdout.is_empty() {
                    return Err(LeelaError::CommandFailed {
                        command: inv.display(),
                        code: result.exit_code,
                    });
                }
                PathBuf::from(stdout)
            }
        };

        Ok(self.global_dir.insert(dir).as_path())
    }

    /// Version of a globally installed package, or [`NOT_INSTALLED`].
    pub fn installed_global(&mut self, runner: &dyn ProcessRunner, package: &str) -> Result<String> {
        let manifest_path = self.global_dir(runner)?.join(package).join(MANIFEST_FILE);

        match Manifest::load(&manifest_path) {
            Ok(manifest) => Ok(manifest
                .json()
                .get("version")
                .and_then(|v| v.as_str())
                .unwrap_or(NOT_INSTALLED)
                .to_string()),
            Err(LeelaError::ManifestNotFound { .. }) => Ok(NOT_INSTALLED.to_string()),
            Err(e) => Err(e),
        }
    }
}
