//! `leela-deploy ec2|ssh`: build the project and ship it to a remote host.

use std::process::ExitCode;

use clap::Parser;
use leela::cli::{runtime, DeployArgs};

fn main() -> ExitCode {
    let tool_name = runtime::init();

    let args = DeployArgs::parse();
    tracing::debug!("{} starting with args: {:?}", tool_name, args);

    runtime::run(tool_name, |dispatcher, ui| dispatcher.dispatch_deploy(&args, ui))
}
