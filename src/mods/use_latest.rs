//! Move a package to its latest published version.

use std::path::Path;

use crate::error::Result;
use crate::manifest::{DependencyCategory, Manifest};
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::{GlobalMod, ModContext, PackageMod};

/// Pin a dependency at `@latest` in every manifest that declares it.
#[derive(Debug, Clone)]
pub struct NpmUseLatest {
    package: String,
}

impl NpmUseLatest {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }
}

impl PackageMod for NpmUseLatest {
    fn name(&self) -> &'static str {
        "npm-use-latest"
    }

    fn apply(
        &self,
        manifest_path: &Path,
        ctx: &ModContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let manifest = Manifest::load(manifest_path)?;
        let Some(category) = DependencyCategory::ALL
            .into_iter()
            .find(|c| manifest.dependency_version(*c, &self.package).is_some())
        else {
            tracing::debug!("{} not declared in {}", self.package, manifest_path.display());
            return Ok(());
        };

        let latest = format!("{}@latest", self.package);
        let mut args = vec!["install", "-E"];
        if category == DependencyCategory::DevDependencies {
            args.push("--save-dev");
        }
        args.push(&latest);
        let install = Invocation::new("npm", args).in_dir(manifest.dir());

        let theme = ui.theme().clone();
        if ctx.fix {
            ui.progress(&format!(
                "Running {} in {}",
                theme.command(&install.display()),
                theme.location(&manifest.dir().display().to_string())
            ));
            ctx.runner.run(&install)?.check(&install)?;
        } else {
            ui.message(&format!(
                "Would run {} in {}",
                theme.command(&install.display()),
                theme.location(&manifest.dir().display().to_string())
            ));
        }
        Ok(())
    }
}

/// Reinstall a global package at `@latest`.
#[derive(Debug, Clone)]
pub struct NpmUseLatestGlobal {
    package: String,
}

impl NpmUseLatestGlobal {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }
}

impl GlobalMod for NpmUseLatestGlobal {
    fn name(&self) -> &'static str {
        "npm-use-latest-global"
    }

    fn apply(&self, ctx: &ModContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
        let latest = format!("{}@latest", self.package);
        let install = Invocation::new("npm", ["install", "-g", latest.as_str()]);
        let command = ui.theme().command(&install.display());

        if ctx.fix {
            ui.progress(&format!("Running {}", command));
            ctx.runner.run(&install)?.check(&install)?;
        } else {
            ui.message(&format!("Would run {}", command));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandResult, RecordingRunner};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn manifest(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn fix_installs_declared_dependency() {
        let (temp, path) = manifest(r#"{"dependencies":{"left-pad":"1.0.0"}}"#);
        let runner = RecordingRunner::new();
        let ctx = ModContext {
            runner: &runner,
            fix: true,
        };
        let mut ui = MockUI::new();

        NpmUseLatest::new("left-pad").apply(&path, &ctx, &mut ui).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].display(), "npm install -E left-pad@latest");
        assert_eq!(invocations[0].cwd.as_deref(), Some(temp.path()));
    }

    #[test]
    fn dev_dependencies_stay_dev() {
        let (_temp, path) = manifest(r#"{"devDependencies":{"jest":"26.0.0"}}"#);
        let runner = RecordingRunner::new();
        let ctx = ModContext {
            runner: &runner,
            fix: true,
        };

        NpmUseLatest::new("jest")
            .apply(&path, &ctx, &mut MockUI::new())
            .unwrap();

        assert_eq!(runner.commands(), vec!["npm install -E --save-dev jest@latest"]);
    }

    #[test]
    fn report_mode_runs_nothing() {
        let (_temp, path) = manifest(r#"{"dependencies":{"left-pad":"1.0.0"}}"#);
        let runner = RecordingRunner::new();
        let ctx = ModContext {
            runner: &runner,
            fix: false,
        };
        let mut ui = MockUI::new();

        NpmUseLatest::new("left-pad").apply(&path, &ctx, &mut ui).unwrap();

        assert!(runner.commands().is_empty());
        assert!(ui.has_message("Would run npm install -E left-pad@latest"));
    }

    #[test]
    fn undeclared_package_is_skipped() {
        let (_temp, path) = manifest(r#"{"dependencies":{"react":"18.0.0"}}"#);
        let runner = RecordingRunner::new();
        let ctx = ModContext {
            runner: &runner,
            fix: true,
        };
        let mut ui = MockUI::new();

        NpmUseLatest::new("left-pad").apply(&path, &ctx, &mut ui).unwrap();

        assert!(runner.commands().is_empty());
        assert!(ui.lines().is_empty());
    }

    #[test]
    fn global_fix_reinstalls() {
        let runner = RecordingRunner::new();
        let ctx = ModContext {
            runner: &runner,
            fix: true,
        };

        NpmUseLatestGlobal::new("@kj800x/leela")
            .apply(&ctx, &mut MockUI::new())
            .unwrap();

        assert_eq!(runner.commands(), vec!["npm install -g @kj800x/leela@latest"]);
    }

    #[test]
    fn global_install_failure_propagates() {
        let runner = RecordingRunner::new();
        runner.respond("npm install -g", CommandResult::failure(Some(1), "", ""));
        let ctx = ModContext {
            runner: &runner,
            fix: true,
        };

        assert!(NpmUseLatestGlobal::new("x")
            .apply(&ctx, &mut MockUI::new())
            .is_err());
    }
}
