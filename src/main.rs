//! Leela CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use leela::cli::{runtime, Cli};

fn main() -> ExitCode {
    let tool_name = runtime::init();

    let cli = Cli::parse();
    tracing::debug!("{} starting with args: {:?}", tool_name, cli);

    runtime::run(tool_name, |dispatcher, ui| dispatcher.dispatch(&cli, ui))
}
