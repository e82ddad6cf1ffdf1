//! `version` and `init`.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandEnv, CommandResult};

/// Prints the tool's own version.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(env!("CARGO_PKG_VERSION"));
        Ok(CommandResult::success())
    }
}

/// Placeholder for project scaffolding.
pub struct InitCommand {
    tool_name: String,
}

impl InitCommand {
    pub fn new(env: &CommandEnv<'_>) -> Self {
        Self {
            tool_name: env.tool_name.clone(),
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.error(&format!("{} init not yet implemented", self.tool_name));
        Ok(CommandResult::success())
    }
}
