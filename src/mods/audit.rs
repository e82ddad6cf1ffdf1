//! `npm audit` across projects.

use std::path::Path;

use crate::error::Result;
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::{ModContext, PackageMod};

/// Run `npm audit` (or `npm audit fix` when fixing) beside each manifest.
///
/// A non-zero audit exit means vulnerabilities were found; it is reported,
/// not treated as an error, so the remaining projects are still audited.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmAudit;

impl PackageMod for NpmAudit {
    fn name(&self) -> &'static str {
        "npm-audit"
    }

    fn apply(
        &self,
        manifest: &Path,
        ctx: &ModContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let dir = manifest.parent().unwrap_or(Path::new("."));
        let args: &[&str] = if ctx.fix {
            &["audit", "fix"]
        } else {
            &["audit"]
        };
        let audit = Invocation::new("npm", args.iter().copied()).in_dir(dir);

        let location = ui.theme().location(&dir.display().to_string());
        ui.progress(&format!("Running {} in {}", audit.display(), location));

        let result = ctx.runner.run(&audit)?;
        if !result.success {
            ui.outdated(&format!("npm audit reported problems in {}", location));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandResult, RecordingRunner};
    use crate::ui::MockUI;

    #[test]
    fn audits_in_manifest_dir() {
        let runner = RecordingRunner::new();
        let ctx = ModContext {
            runner: &runner,
            fix: false,
        };
        let mut ui = MockUI::new();

        NpmAudit
            .apply(Path::new("/code/app/package.json"), &ctx, &mut ui)
            .unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations[0].display(), "npm audit");
        assert_eq!(invocations[0].cwd.as_deref(), Some(Path::new("/code/app")));
        assert!(ui.outdated_lines().is_empty());
    }

    #[test]
    fn fix_mode_runs_audit_fix() {
        let runner = RecordingRunner::new();
        let ctx = ModContext {
            runner: &runner,
            fix: true,
        };

        NpmAudit
            .apply(Path::new("/code/package.json"), &ctx, &mut MockUI::new())
            .unwrap();

        assert_eq!(runner.commands(), vec!["npm audit fix"]);
    }

    #[test]
    fn findings_are_reported_not_fatal() {
        let runner = RecordingRunner::new();
        runner.respond("npm audit", CommandResult::failure(Some(1), "", ""));
        let ctx = ModContext {
            runner: &runner,
            fix: false,
        };
        let mut ui = MockUI::new();

        NpmAudit
            .apply(Path::new("/code/package.json"), &ctx, &mut ui)
            .unwrap();

        assert!(ui.has_outdated("npm audit reported problems in /code"));
    }
}
