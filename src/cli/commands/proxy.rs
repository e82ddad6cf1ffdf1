//! Proxy command implementation.
//!
//! `leela proxy <args>` runs the `localproxy` CLI once dependencies are
//! known to be fresh.

use crate::error::Result;
use crate::npm::guard;
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandEnv, CommandResult};

/// Executable the proxy command delegates to.
pub const LOCALPROXY_BIN: &str = "localproxy";

/// Runs the localproxy CLI.
pub struct ProxyCommand<'e, 'a> {
    env: &'e CommandEnv<'a>,
    args: Vec<String>,
}

impl<'e, 'a> ProxyCommand<'e, 'a> {
    pub fn new(env: &'e CommandEnv<'a>, args: Vec<String>) -> Self {
        Self { env, args }
    }
}

impl Command for ProxyCommand<'_, '_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.env;
        if !guard::enforce(&env.project_root, env.lock_window(), &env.tool_name, ui)? {
            return Ok(CommandResult::failure(1));
        }

        let inv = Invocation::new(LOCALPROXY_BIN, self.args.iter().cloned())
            .in_dir(&env.project_root);
        let result = env.runner.run(&inv)?;
        Ok(CommandResult::from_exit(&result))
    }
}
