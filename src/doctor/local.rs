//! Tracked packages declared in project manifests.

use std::path::Path;

use crate::error::Result;
use crate::manifest::{find_package_jsons, DependencyCategory, Manifest};
use crate::npm::LOCKFILE;
use crate::shell::Invocation;
use crate::ui::{LeelaTheme, UserInterface};

use super::{git, Doctor, LocalOptions};

impl Doctor<'_> {
    /// Check every manifest under `options.root` for outdated tracked packages.
    ///
    /// Manifests are visited in finder order; within a manifest,
    /// `dependencies` before `devDependencies`, and packages in configured
    /// order. A failed fix aborts the run.
    pub fn check_local_installs_are_up_to_date(
        &mut self,
        options: &LocalOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let manifests = find_package_jsons(&options.root, self.config.search_depth)?;
        tracing::debug!(
            "found {} manifests under {}",
            manifests.len(),
            options.root.display()
        );

        for path in manifests {
            let dir = path.parent().unwrap_or(&options.root);
            if options.pull && git::is_in_git(self.runner, dir) {
                if let Err(e) = git::run_git(self.runner, dir, ["pull"]) {
                    tracing::warn!("git pull failed in {}: {}", dir.display(), e);
                    ui.error(&format!("Could not pull {}: {}", dir.display(), e));
                }
            }

            let manifest = Manifest::load(&path)?;
            for category in DependencyCategory::ALL {
                self.check_manifest_category(&manifest, category, options, ui)?;
            }
        }

        Ok(())
    }

    fn check_manifest_category(
        &mut self,
        manifest: &Manifest,
        category: DependencyCategory,
        options: &LocalOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let config = self.config;
        let theme = ui.theme().clone();
        let location = location(&theme, category, manifest.path());

        for package in &config.local_packages {
            let Some(actual) = manifest.dependency_version(category, package) else {
                continue;
            };
            let expected = self.versions.latest(package)?;

            if expected == actual {
                ui.ok(&format!(
                    "Local package {} ({}) is up to date! {}",
                    theme.good(package),
                    theme.good(actual),
                    location
                ));
                continue;
            }

            ui.outdated(&format!(
                "Local package {} is not up to date! {}",
                theme.bad(package),
                location
            ));
            ui.message(&format!(
                "   {} is latest but {} is installed.",
                theme.good(&expected),
                theme.bad(actual)
            ));

            if options.fix {
                ui.message("   Attempting to autofix.");
                ui.message("");
                self.upgrade_local(manifest, package, &expected, options)?;
            } else {
                let command = theme.command(&format!("npm install -E {}@latest", package));
                ui.message(&format!("   Run {} in the project to fix.", command));
                ui.message("");
            }
        }

        Ok(())
    }

    /// Pin `package` at its latest version in the manifest's project,
    /// committing the manifest and lockfile when asked to and in git.
    fn upgrade_local(
        &self,
        manifest: &Manifest,
        package: &str,
        expected: &str,
        options: &LocalOptions,
    ) -> Result<()> {
        let runner = self.runner;
        let dir = manifest.dir();
        let commit = options.commit && git::is_in_git(runner, dir);

        git::with_stash(runner, dir, commit, || {
            let latest = format!("{}@latest", package);
            let install = Invocation::new("npm", ["install", "-E", latest.as_str()]).in_dir(dir);
            runner.run(&install)?.check(&install)?;

            if commit {
                let lockfile = dir.join(LOCKFILE);
                git::commit_files(
                    runner,
                    dir,
                    &[manifest.path(), lockfile.as_path()],
                    &format!("Upgrade {} to {}", package, expected),
                    options.push,
                )?;
            }
            Ok(())
        })
    }
}

fn location(theme: &LeelaTheme, category: DependencyCategory, path: &Path) -> String {
    format!(
        "[in {} of {}]",
        theme.location(category.key()),
        theme.location(&path.display().to_string())
    )
}

#[cfg(test)]
mod tests {
    use crate::config::LeelaConfig;
    use crate::doctor::{Doctor, LocalOptions, StaticVersions, VersionContext};
    use crate::error::LeelaError;
    use crate::shell::{CommandResult, RecordingRunner};
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_manifest(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config() -> LeelaConfig {
        LeelaConfig {
            local_packages: vec!["@scope/client".into(), "@scope/scripts".into()],
            ..Default::default()
        }
    }

    fn versions() -> VersionContext {
        VersionContext::new(Box::new(
            StaticVersions::new()
                .with("@scope/client", "2.0.0")
                .with("@scope/scripts", "5.1.0"),
        ))
    }

    fn options(root: &Path) -> LocalOptions {
        LocalOptions {
            fix: false,
            commit: false,
            push: false,
            pull: false,
            root: root.to_path_buf(),
        }
    }

    #[test]
    fn reports_each_category_in_order() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "app/package.json",
            r#"{
                "devDependencies": {"@scope/scripts": "5.1.0"},
                "dependencies": {"@scope/client": "1.0.0", "react": "18.0.0"}
            }"#,
        );
        let config = config();
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let mut doctor = Doctor::with_versions(&config, &runner, versions()).unwrap();
        doctor
            .check_local_installs_are_up_to_date(&options(temp.path()), &mut ui)
            .unwrap();

        assert_eq!(ui.outdated_lines().len(), 1);
        assert!(ui.outdated_lines()[0]
            .starts_with("Local package @scope/client is not up to date! [in dependencies of"));
        assert!(ui.has_message("2.0.0 is latest but 1.0.0 is installed."));
        assert!(ui.has_message("Run npm install -E @scope/client@latest in the project to fix."));
        assert!(ui.has_ok("Local package @scope/scripts (5.1.0) is up to date! [in devDependencies of"));
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn untracked_packages_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "package.json",
            r#"{"dependencies": {"left-pad": "1.0.0"}}"#,
        );
        let config = config();
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let mut doctor = Doctor::with_versions(&config, &runner, versions()).unwrap();
        doctor
            .check_local_installs_are_up_to_date(&options(temp.path()), &mut ui)
            .unwrap();

        assert!(ui.lines().is_empty());
    }

    #[test]
    fn fix_installs_pinned_latest_in_manifest_dir() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "app/package.json",
            r#"{"dependencies": {"@scope/client": "1.0.0"}}"#,
        );
        let config = config();
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let mut doctor = Doctor::with_versions(&config, &runner, versions()).unwrap();
        let opts = LocalOptions {
            fix: true,
            ..options(temp.path())
        };
        doctor
            .check_local_installs_are_up_to_date(&opts, &mut ui)
            .unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].display(), "npm install -E @scope/client@latest");
        assert_eq!(
            invocations[0].cwd.as_deref(),
            Some(temp.path().join("app").as_path())
        );
        assert!(ui.has_message("Attempting to autofix."));
    }

    #[test]
    fn fix_with_commit_stashes_commits_and_restores() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "package.json",
            r#"{"dependencies": {"@scope/client": "1.0.0"}}"#,
        );
        let config = config();
        let runner = RecordingRunner::new();
        runner.respond("git rev-parse", CommandResult::success("true\n", ""));
        runner.respond("git stash", CommandResult::success("Saved working directory\n", ""));
        let mut ui = MockUI::new();

        let mut doctor = Doctor::with_versions(&config, &runner, versions()).unwrap();
        let opts = LocalOptions {
            fix: true,
            commit: true,
            push: true,
            ..options(temp.path())
        };
        doctor
            .check_local_installs_are_up_to_date(&opts, &mut ui)
            .unwrap();

        let manifest = temp.path().join("package.json");
        let lockfile = temp.path().join("package-lock.json");
        assert_eq!(
            runner.commands(),
            vec![
                "git rev-parse --is-inside-work-tree".to_string(),
                "git stash".to_string(),
                "npm install -E @scope/client@latest".to_string(),
                format!("git add {} {}", manifest.display(), lockfile.display()),
                "git commit -m Upgrade @scope/client to 2.0.0".to_string(),
                "git push".to_string(),
                "git stash pop".to_string(),
            ]
        );
    }

    #[test]
    fn failed_install_skips_commit_and_restores_stash() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "package.json",
            r#"{"dependencies": {"@scope/client": "1.0.0"}}"#,
        );
        let config = config();
        let runner = RecordingRunner::new();
        runner.respond("git rev-parse", CommandResult::success("true\n", ""));
        runner.respond("git stash", CommandResult::success("Saved working directory\n", ""));
        runner.respond("npm install", CommandResult::failure(Some(1), "", "ERESOLVE"));
        let mut ui = MockUI::new();

        let mut doctor = Doctor::with_versions(&config, &runner, versions()).unwrap();
        let opts = LocalOptions {
            fix: true,
            commit: true,
            ..options(temp.path())
        };
        let err = doctor
            .check_local_installs_are_up_to_date(&opts, &mut ui)
            .unwrap_err();

        assert!(matches!(err, LeelaError::CommandFailed { .. }));
        assert!(!runner.ran("git commit"));
        assert!(runner.ran("git stash pop"));
    }

    #[test]
    fn pull_runs_before_checking_git_projects() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "package.json", r#"{"name": "app"}"#);
        let config = config();
        let runner = RecordingRunner::new();
        runner.respond("git rev-parse", CommandResult::success("true\n", ""));
        runner.respond("git pull", CommandResult::failure(Some(1), "", "no upstream"));
        let mut ui = MockUI::new();

        let mut doctor = Doctor::with_versions(&config, &runner, versions()).unwrap();
        let opts = LocalOptions {
            pull: true,
            ..options(temp.path())
        };
        doctor
            .check_local_installs_are_up_to_date(&opts, &mut ui)
            .unwrap();

        assert!(runner.ran("git pull"));
        assert!(ui.has_error("Could not pull"));
    }
}
