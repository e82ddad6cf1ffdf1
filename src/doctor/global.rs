//! Globally installed packages.

use crate::error::Result;
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::Doctor;

impl Doctor<'_> {
    /// Compare each tracked global package with its latest version.
    ///
    /// With `fix`, outdated packages are reinstalled at `@latest`; otherwise
    /// the remediation command is printed.
    pub fn check_global_installs_are_up_to_date(
        &mut self,
        fix: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let config = self.config;
        let theme = ui.theme().clone();

        for package in &config.global_packages {
            let expected = self.versions.latest(package)?;
            let actual = self.versions.installed_global(self.runner, package)?;

            if expected == actual {
                ui.ok(&format!(
                    "Global package {} ({}) is up to date!",
                    theme.good(package),
                    theme.good(&actual)
                ));
                continue;
            }

            ui.outdated(&format!(
                "Global package {} is not up to date!",
                theme.bad(package)
            ));
            ui.message(&format!(
                "   {} is latest but {} is installed.",
                theme.good(&expected),
                theme.bad(&actual)
            ));

            let latest = format!("{}@latest", package);
            if fix {
                ui.message("   Attempting to autofix.");
                let install = Invocation::new("npm", ["install", "-g", latest.as_str()]);
                self.runner.run(&install)?.check(&install)?;
            } else {
                let command = theme.command(&format!("npm install -g {}", latest));
                ui.message(&format!("   Run {} to fix.", command));
                ui.message("");
            }
        }

        Ok(())
    }
}
