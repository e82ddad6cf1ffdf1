//! Process startup shared by the leela binaries.
//!
//! Each binary parses its own arguments, then hands a closure to [`run`]
//! which receives a fully configured [`CommandDispatcher`].

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;
use crate::error::Result;
use crate::shell::{debug_enabled, invoked_name, is_ci, SystemRunner};
use crate::ui::{TerminalUI, UserInterface};

use super::commands::{CommandDispatcher, CommandResult};

/// Initialize logging and return the name the tool was invoked as.
///
/// Log level is controlled by:
/// 1. `<NAME>_DEBUG` (e.g. `LEELA_DEBUG`) sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
pub fn init() -> String {
    let argv0 = std::env::args().next();
    let tool_name = invoked_name(argv0.as_deref());

    let filter = if debug_enabled(&tool_name) {
        EnvFilter::new("leela=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leela=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();

    tool_name
}

/// Build the dispatcher for the current directory and run `command` with it.
///
/// Errors are printed as `Error: <e>` and exit 1; otherwise the command's
/// exit code is used.
pub fn run<F>(tool_name: String, command: F) -> ExitCode
where
    F: FnOnce(&CommandDispatcher<'_>, &mut dyn UserInterface) -> Result<CommandResult>,
{
    let interactive = console::user_attended() && !is_ci();
    let mut ui = TerminalUI::new(interactive);

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let executable = std::env::current_exe().unwrap_or_else(|_| {
        PathBuf::from(std::env::args().next().unwrap_or_else(|| tool_name.clone()))
    });

    let runner = SystemRunner::new();
    let dispatcher = CommandDispatcher::new(project_root, &runner)
        .with_tool_name(tool_name)
        .with_executable(executable)
        .with_config(config);

    match command(&dispatcher, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
