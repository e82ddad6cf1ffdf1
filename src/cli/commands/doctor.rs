//! Doctor command implementation.

use crate::doctor::{Doctor, DoctorOptions};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandEnv, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand<'e, 'a> {
    env: &'e CommandEnv<'a>,
    options: DoctorOptions,
}

impl<'e, 'a> DoctorCommand<'e, 'a> {
    pub fn new(env: &'e CommandEnv<'a>, options: DoctorOptions) -> Self {
        Self { env, options }
    }

    /// Get the doctor options.
    pub fn options(&self) -> &DoctorOptions {
        &self.options
    }
}

impl Command for DoctorCommand<'_, '_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut doctor = Doctor::new(&self.env.config, self.env.runner)?;
        doctor.run(&self.options, ui)?;
        Ok(CommandResult::success())
    }
}
