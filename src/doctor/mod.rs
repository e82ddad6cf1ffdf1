//! The doctor: checks that tracked packages and the localproxy server are
//! up to date, and optionally fixes what it finds.
//!
//! Checks run in a fixed order: global installs, then project manifests
//! (only when a root is given), then the server.
//!
//! - [`context`] caches registry answers and the global install directory
//! - [`registry`] looks up latest versions
//! - [`git`] wraps the git steps of a fix
//! - [`global`], [`local`], [`server`] implement the three checks

pub mod context;
pub mod git;
pub mod global;
pub mod http;
pub mod local;
pub mod registry;
pub mod server;

pub use context::{VersionContext, NOT_INSTALLED};
pub use http::HttpClient;
pub use registry::{NpmRegistry, StaticVersions, VersionSource};

use std::path::PathBuf;
use std::time::Duration;

use crate::config::LeelaConfig;
use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

/// Flags for a doctor run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorOptions {
    /// Attempt to fix outdated packages.
    pub fix: bool,
    /// Commit manifest fixes in git repositories.
    pub commit: bool,
    /// Push fix commits.
    pub push: bool,
    /// `git pull` each repository before checking it.
    pub pull: bool,
    /// Directory to search for project manifests.
    pub root: Option<PathBuf>,
}

/// Options for the project-manifest check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOptions {
    pub fix: bool,
    pub commit: bool,
    pub push: bool,
    pub pull: bool,
    pub root: PathBuf,
}

impl DoctorOptions {
    /// Local-check options, if a root was given.
    pub fn local(&self) -> Option<LocalOptions> {
        self.root.as_ref().map(|root| LocalOptions {
            fix: self.fix,
            commit: self.commit,
            push: self.push,
            pull: self.pull,
            root: root.clone(),
        })
    }
}

/// Runs the doctor's checks.
pub struct Doctor<'a> {
    config: &'a LeelaConfig,
    runner: &'a dyn ProcessRunner,
    versions: VersionContext,
    http: HttpClient,
}

impl<'a> Doctor<'a> {
    /// Create a doctor that asks the configured npm registry.
    pub fn new(config: &'a LeelaConfig, runner: &'a dyn ProcessRunner) -> Result<Self> {
        let timeout = Duration::from_secs(config.http_timeout_secs);
        let registry = NpmRegistry::new(HttpClient::with_timeout(timeout)?, &config.registry_url);
        Self::with_versions(config, runner, VersionContext::new(Box::new(registry)))
    }

    /// Create a doctor with an explicit version context.
    pub fn with_versions(
        config: &'a LeelaConfig,
        runner: &'a dyn ProcessRunner,
        versions: VersionContext,
    ) -> Result<Self> {
        let http = HttpClient::with_timeout(Duration::from_secs(config.http_timeout_secs))?;
        Ok(Self {
            config,
            runner,
            versions,
            http,
        })
    }

    /// Run every applicable check and print the completion banner.
    pub fn run(&mut self, options: &DoctorOptions, ui: &mut dyn UserInterface) -> Result<()> {
        tracing::debug!("doctor options: {:?}", options);

        self.check_global_installs_are_up_to_date(options.fix, ui)?;
        if let Some(local) = options.local() {
            self.check_local_installs_are_up_to_date(&local, ui)?;
        }
        self.check_localproxy_server_is_up_to_date(ui)?;

        ui.message("⚕️  The doctor is done! Reports will be found above.");
        Ok(())
    }
}
