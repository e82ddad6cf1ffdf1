//! Deploy settings read from the project manifest.

use serde::Deserialize;
use std::path::Path;

use crate::error::{LeelaError, Result};
use crate::manifest::{Manifest, MANIFEST_FILE};

/// Archive built locally and shipped to the host.
pub const ARCHIVE_NAME: &str = "build.tar.gz";

/// Where a build is shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTarget {
    Ec2,
    Ssh,
}

impl DeployTarget {
    /// The manifest section holding this target's settings.
    pub fn section(&self) -> &'static str {
        match self {
            Self::Ec2 => "ec2-deploy",
            Self::Ssh => "ssh-deploy",
        }
    }

    /// How the host is described in progress lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ec2 => "ec2",
            Self::Ssh => "ssh",
        }
    }
}

/// A manifest's deploy section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    /// ssh destination, e.g. `user@example.com`.
    pub host: String,
    /// Remote directory the build is extracted in.
    pub path: String,
    /// Local paths packed into the archive.
    #[serde(default = "default_include")]
    pub include: Vec<String>,
}

fn default_include() -> Vec<String> {
    vec!["build".to_string()]
}

impl DeployConfig {
    /// Read `target`'s section from `<project_root>/package.json`.
    ///
    /// # Errors
    ///
    /// `ManifestNotFound` without a manifest, `MissingDeploySection` when
    /// the section is absent, `ManifestParse` when it lacks `host` or `path`.
    pub fn load(project_root: &Path, target: DeployTarget) -> Result<Self> {
        let manifest = Manifest::load(&project_root.join(MANIFEST_FILE))?;
        Self::from_manifest(&manifest, target)
    }

    pub fn from_manifest(manifest: &Manifest, target: DeployTarget) -> Result<Self> {
        let mut config: DeployConfig =
            manifest
                .section(target.section())?
                .ok_or_else(|| LeelaError::MissingDeploySection {
                    section: target.section().to_string(),
                })?;
        if config.include.is_empty() {
            config.include = default_include();
        }
        Ok(config)
    }

    /// `host:path/build.tar.gz`
    pub fn remote_archive(&self) -> String {
        format!(
            "{}:{}/{}",
            self.host,
            self.path.trim_end_matches('/'),
            ARCHIVE_NAME
        )
    }
}
