//! Mods: named, parameterized repository maintenance jobs.
//!
//! A mod is either global (one target, no iteration) or per-manifest (run
//! once for each package.json found under a root). Without `--fix` a mod
//! only reports what it would change. Fixes are applied in place on top of
//! any local changes; mods never commit, so they never stash either.

pub mod audit;
pub mod pin;
pub mod use_latest;

pub use audit::NpmAudit;
pub use pin::PinDependencies;
pub use use_latest::{NpmUseLatest, NpmUseLatestGlobal};

use std::path::{Path, PathBuf};

use crate::doctor::git;
use crate::error::{LeelaError, Result};
use crate::manifest::find_package_jsons;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

/// Levels below the root a per-manifest mod searches.
pub const MOD_SEARCH_DEPTH: usize = 4;

/// Every mod name [`create_mod`] accepts.
pub const MOD_NAMES: &[&str] = &[
    "npm-use-latest",
    "npm-use-latest-global",
    "npm-audit",
    "pin-dependencies",
];

/// What a mod runs with.
pub struct ModContext<'a> {
    pub runner: &'a dyn ProcessRunner,
    /// Apply changes instead of reporting them.
    pub fix: bool,
}

/// A mod applied once, to a single target.
pub trait GlobalMod {
    fn name(&self) -> &'static str;

    fn apply(&self, ctx: &ModContext<'_>, ui: &mut dyn UserInterface) -> Result<()>;
}

/// A mod applied to each discovered manifest.
pub trait PackageMod {
    fn name(&self) -> &'static str;

    /// Apply to the manifest at `manifest`.
    fn apply(
        &self,
        manifest: &Path,
        ctx: &ModContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<()>;
}

/// A constructed mod, ready to run once.
pub enum ModJob {
    Global(Box<dyn GlobalMod>),
    PerManifest {
        root: PathBuf,
        job: Box<dyn PackageMod>,
    },
}

impl std::fmt::Debug for ModJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global(job) => f.debug_tuple("Global").field(&job.name()).finish(),
            Self::PerManifest { root, job } => f
                .debug_struct("PerManifest")
                .field("root", root)
                .field("job", &job.name())
                .finish(),
        }
    }
}

impl ModJob {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Global(job) => job.name(),
            Self::PerManifest { job, .. } => job.name(),
        }
    }

    /// Run the mod.
    pub fn run(&self, ctx: &ModContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
        match self {
            Self::Global(job) => job.apply(ctx, ui),
            Self::PerManifest { root, job } => {
                let manifests = find_package_jsons(root, MOD_SEARCH_DEPTH)?;
                tracing::debug!(
                    "{}: {} manifests under {}",
                    job.name(),
                    manifests.len(),
                    root.display()
                );

                for manifest in manifests {
                    let dir = manifest.parent().unwrap_or(root.as_path());
                    if ctx.fix && git::is_in_git(ctx.runner, dir) {
                        tracing::debug!("{}: changes are left uncommitted", dir.display());
                    }
                    job.apply(&manifest, ctx, ui)?;
                }
                Ok(())
            }
        }
    }
}

/// Build the mod called `name` from its positional arguments.
///
/// # Errors
///
/// `UnrecognizedMod` for unknown names, `MissingArgument` when a required
/// package name is absent.
pub fn create_mod(name: &str, args: &[String]) -> Result<ModJob> {
    let root_at = |index: usize| -> PathBuf {
        args.get(index)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    match name {
        "npm-use-latest" => Ok(ModJob::PerManifest {
            job: Box::new(NpmUseLatest::new(required_package(
                args,
                "npm-use-latest <package> [root]",
            )?)),
            root: root_at(1),
        }),
        "npm-use-latest-global" => Ok(ModJob::Global(Box::new(NpmUseLatestGlobal::new(
            required_package(args, "npm-use-latest-global <package>")?,
        )))),
        "npm-audit" => Ok(ModJob::PerManifest {
            root: root_at(0),
            job: Box::new(NpmAudit),
        }),
        "pin-dependencies" => Ok(ModJob::PerManifest {
            root: root_at(0),
            job: Box::new(PinDependencies),
        }),
        _ => Err(LeelaError::UnrecognizedMod {
            name: name.to_string(),
        }),
    }
}

fn required_package(args: &[String], usage: &str) -> Result<String> {
    args.first()
        .filter(|a| !a.is_empty())
        .cloned()
        .ok_or_else(|| LeelaError::MissingArgument {
            name: "package".to_string(),
            usage: format!("leela-mod {}", usage),
        })
}
