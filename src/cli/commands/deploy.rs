//! Deploy command implementation.

use crate::deploy::{execute_deploy, DeployTarget};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandEnv, CommandResult};

/// The deploy command implementation.
pub struct DeployCommand<'e, 'a> {
    env: &'e CommandEnv<'a>,
    target: DeployTarget,
}

impl<'e, 'a> DeployCommand<'e, 'a> {
    pub fn new(env: &'e CommandEnv<'a>, target: DeployTarget) -> Self {
        Self { env, target }
    }
}

impl Command for DeployCommand<'_, '_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        execute_deploy(self.env.runner, &self.env.project_root, self.target, ui)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::tests::env;
    use crate::error::LeelaError;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn missing_manifest_is_reported() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);

        let err = DeployCommand::new(&env, DeployTarget::Ec2)
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, LeelaError::ManifestNotFound { .. }));
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn deploys_from_project_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"ec2-deploy":{"host":"ec2","path":"/srv"}}"#,
        )
        .unwrap();
        let runner = RecordingRunner::new();
        let env = env(temp.path(), &runner);

        let result = DeployCommand::new(&env, DeployTarget::Ec2)
            .execute(&mut MockUI::new())
            .unwrap();

        assert!(result.success);
        assert_eq!(runner.commands().len(), 5);
    }
}
