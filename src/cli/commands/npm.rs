//! npm delegation.
//!
//! `leela <args>` and `leela yarn <args>` translate their arguments into an
//! npm invocation, guard commands that need fresh dependencies, and offer a
//! nested project when asked to start a directory that can't be started.

use std::path::PathBuf;

use crate::error::Result;
use crate::npm::{build_npm_args, choose_start_location, guard, is_guarded, is_start};
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandEnv, CommandResult};

/// Runs npm on the user's behalf.
pub struct NpmCommand<'e, 'a> {
    env: &'e CommandEnv<'a>,
    args: Vec<String>,
}

impl<'e, 'a> NpmCommand<'e, 'a> {
    pub fn new(env: &'e CommandEnv<'a>, args: Vec<String>) -> Self {
        Self { env, args }
    }

    /// Re-run the tool as `start` in `dir`.
    fn start_in(&self, dir: PathBuf) -> Result<CommandResult> {
        let program = self.env.executable.to_string_lossy();
        let inv = Invocation::new(&program, ["start"]).in_dir(dir);
        self.env.runner.run(&inv)?;
        Ok(CommandResult::success())
    }
}

impl Command for NpmCommand<'_, '_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.env;

        if is_guarded(self.args.first().map(String::as_str))
            && !guard::enforce(&env.project_root, env.lock_window(), &env.tool_name, ui)?
        {
            return Ok(CommandResult::failure(1));
        }

        let npm_args = build_npm_args(&self.args);
        if is_start(&npm_args) {
            if let Some(dir) = choose_start_location(&env.project_root, ui)? {
                return self.start_in(dir);
            }
        }

        let inv = Invocation::new("npm", npm_args).in_dir(&env.project_root);
        let result = env.runner.run(&inv)?;
        Ok(CommandResult::from_exit(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::tests::env;
    use crate::shell::{CommandResult as ProcessResult, RecordingRunner};
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn fresh_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("package-lock.json"), "{}").unwrap();
        fs::create_dir(temp.path().join("node_modules")).unwrap();
        temp
    }

    #[test]
    fn npm_commands_pass_through() {
        let temp = fresh_project();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);

        let result = NpmCommand::new(&env, args(&["test", "--watch"]))
            .execute(&mut MockUI::new())
            .unwrap();

        assert!(result.success);
        assert_eq!(runner.commands(), vec!["npm test --watch"]);
        assert_eq!(
            runner.invocations()[0].cwd.as_deref(),
            Some(temp.path())
        );
    }

    #[test]
    fn scripts_are_run() {
        let temp = fresh_project();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);

        NpmCommand::new(&env, args(&["build"]))
            .execute(&mut MockUI::new())
            .unwrap();

        assert_eq!(runner.commands(), vec!["npm run build"]);
    }

    #[test]
    fn exit_code_mirrors_npm() {
        let temp = fresh_project();
        let runner = RecordingRunner::new();
        runner.respond("npm test", ProcessResult::failure(Some(7), "", ""));
        let env = env(temp.path(), &runner);

        let result = NpmCommand::new(&env, args(&["test"]))
            .execute(&mut MockUI::new())
            .unwrap();

        assert_eq!(result, CommandResult::failure(7));
    }

    #[test]
    fn stale_dependencies_block_guarded_commands() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);
        let mut ui = MockUI::new();

        let result = NpmCommand::new(&env, args(&["start"]))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(runner.commands().is_empty());
        assert!(ui.has_error("Missing node_modules"));
        assert!(ui.has_error("To fix, run leela yarn"));
    }

    #[test]
    fn unguarded_commands_ignore_stale_dependencies() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);

        let result = NpmCommand::new(&env, args(&["install"]))
            .execute(&mut MockUI::new())
            .unwrap();

        assert!(result.success);
        assert_eq!(runner.commands(), vec!["npm install"]);
    }

    #[test]
    fn start_offers_nested_project() {
        let temp = fresh_project();
        let web = temp.path().join("web");
        fs::create_dir(&web).unwrap();
        fs::write(
            web.join("package.json"),
            r#"{"scripts":{"start":"vite"}}"#,
        )
        .unwrap();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.queue_selection(Some(0));

        let result = NpmCommand::new(&env, args(&["start"]))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].display(), "/usr/local/bin/leela start");
        assert_eq!(invocations[0].cwd.as_deref(), Some(web.as_path()));
    }

    #[test]
    fn cancelled_start_runs_npm_start_here() {
        let temp = fresh_project();
        let api = temp.path().join("api");
        fs::create_dir(&api).unwrap();
        fs::write(api.join("package.json"), r#"{"scripts":{"start":"node ."}}"#).unwrap();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.queue_selection(None);

        NpmCommand::new(&env, args(&["start"]))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(runner.commands(), vec!["npm start"]);
        assert!(ui.has_message("--Cancelled--"));
        assert_eq!(runner.invocations()[0].cwd.as_deref(), Some(Path::new(temp.path())));
    }
}
