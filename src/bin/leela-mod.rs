//! `leela-mod <name> [--fix] [args...]`: run a repository maintenance mod.

use std::process::ExitCode;

use clap::Parser;
use leela::cli::{runtime, ModArgs};

fn main() -> ExitCode {
    let tool_name = runtime::init();

    let args = ModArgs::parse();
    tracing::debug!("{} starting with args: {:?}", tool_name, args);

    runtime::run(tool_name, |dispatcher, ui| dispatcher.dispatch_mod(&args, ui))
}
