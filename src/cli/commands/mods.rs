//! Mod command implementation.
//!
//! `leela-mod <name> [--fix] [args...]` builds the named mod and runs it
//! once.

use crate::cli::args::ModArgs;
use crate::error::Result;
use crate::mods::{create_mod, ModContext};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandEnv, CommandResult};

/// The mod command implementation.
pub struct ModCommand<'e, 'a> {
    env: &'e CommandEnv<'a>,
    args: ModArgs,
}

impl<'e, 'a> ModCommand<'e, 'a> {
    pub fn new(env: &'e CommandEnv<'a>, args: ModArgs) -> Self {
        Self { env, args }
    }
}

impl Command for ModCommand<'_, '_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let job = create_mod(&self.args.name, &self.args.args)?;
        tracing::debug!("running mod {:?} (fix: {})", job, self.args.fix);

        let ctx = ModContext {
            runner: self.env.runner,
            fix: self.args.fix,
        };
        job.run(&ctx, ui)?;
        Ok(CommandResult::success())
    }
}
