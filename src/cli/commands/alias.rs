//! Alias command implementation.
//!
//! `leela alias <name>` symlinks the running executable next to itself
//! under `<name>`, so the tool can be invoked by another name.

use crate::error::Result;
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandEnv, CommandResult};

/// Creates a symlink alias.
pub struct AliasCommand<'e, 'a> {
    env: &'e CommandEnv<'a>,
    name: Option<String>,
}

impl<'e, 'a> AliasCommand<'e, 'a> {
    pub fn new(env: &'e CommandEnv<'a>, name: Option<String>) -> Self {
        Self { env, name }
    }
}

impl Command for AliasCommand<'_, '_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) else {
            ui.error("Name argument missing");
            ui.error(&format!("Usage: {} alias [name]", self.env.tool_name));
            return Ok(CommandResult::failure(1));
        };

        let exe = &self.env.executable;
        let link = exe
            .parent()
            .map(|dir| dir.join(name))
            .unwrap_or_else(|| name.into());
        let inv = Invocation::new(
            "ln",
            [
                "-s".to_string(),
                exe.to_string_lossy().to_string(),
                link.to_string_lossy().to_string(),
            ],
        );
        self.env.runner.run(&inv)?.check(&inv)?;

        let theme = ui.theme().clone();
        ui.message(&format!(
            "{} {}",
            theme.location(name),
            theme.good("alias created")
        ));
        Ok(CommandResult::success())
    }
}
