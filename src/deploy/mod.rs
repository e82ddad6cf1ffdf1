//! Build, archive, and ship a project to a remote host.
//!
//! Both targets build with `npm run build`, pack the configured paths into
//! `build.tar.gz`, upload it with `scp`, and unpack it over `ssh`. The SSH
//! target also prepares the remote directory before uploading.

pub mod config;

pub use config::{DeployConfig, DeployTarget, ARCHIVE_NAME};

use std::path::Path;

use crate::error::Result;
use crate::shell::{Invocation, ProcessRunner};
use crate::ui::UserInterface;

/// One step of a deploy: an optional progress line, then a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployStep {
    pub announce: Option<String>,
    pub invocation: Invocation,
}

impl DeployStep {
    fn new(invocation: Invocation) -> Self {
        Self {
            announce: None,
            invocation,
        }
    }

    fn announced(announce: String, invocation: Invocation) -> Self {
        Self {
            announce: Some(announce),
            invocation,
        }
    }
}

/// The steps a deploy to `target` runs, in order.
///
/// `host` is how the host appears in progress lines (it may be styled).
pub fn plan(target: DeployTarget, config: &DeployConfig, host: &str) -> Vec<DeployStep> {
    let label = target.label();
    let mut steps = vec![
        DeployStep::announced(
            "Creating a fresh build folder...".to_string(),
            Invocation::new("npm", ["run", "build"]),
        ),
        DeployStep::announced(
            format!("\nCreating {} archive", ARCHIVE_NAME),
            Invocation::new("rm", ["-rf", ARCHIVE_NAME]),
        ),
        DeployStep::new(Invocation::new(
            "tar",
            ["-czvf", ARCHIVE_NAME]
                .into_iter()
                .map(String::from)
                .chain(config.include.iter().cloned()),
        )),
    ];

    let upload = Invocation::new("scp", [ARCHIVE_NAME.to_string(), config.remote_archive()]);
    let upload_note = format!("\nUploading {} archive to {} host {}", ARCHIVE_NAME, label, host);
    match target {
        DeployTarget::Ec2 => steps.push(DeployStep::announced(upload_note, upload)),
        DeployTarget::Ssh => {
            let path = format!("{};", config.path);
            let prepare = Invocation::new(
                "ssh",
                [
                    config.host.as_str(),
                    "mkdir",
                    "-p",
                    path.as_str(),
                    "cd",
                    path.as_str(),
                    "rm",
                    "-rf",
                ]
                .into_iter()
                .map(String::from)
                .chain(config.include.iter().cloned()),
            );
            steps.push(DeployStep::announced(upload_note, prepare));
            steps.push(DeployStep::new(upload));
        }
    }

    steps.push(DeployStep::announced(
        format!("\nExtracting {} on {} host {}", ARCHIVE_NAME, label, host),
        Invocation::new(
            "ssh",
            [
                config.host.clone(),
                "cd".to_string(),
                format!("{};", config.path),
                "rm".to_string(),
                "-rf".to_string(),
                "build/;".to_string(),
                "tar".to_string(),
                "-xzvf".to_string(),
                format!("{};", ARCHIVE_NAME),
            ],
        ),
    ));

    steps
}

/// Deploy the project in `project_root` to `target`.
///
/// Every command shares the terminal. The first command that fails stops
/// the deploy with `CommandFailed`.
pub fn execute_deploy(
    runner: &dyn ProcessRunner,
    project_root: &Path,
    target: DeployTarget,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let config = DeployConfig::load(project_root, target)?;
    tracing::debug!("{} deploy config: {:?}", target.label(), config);

    let host = ui.theme().highlight(&config.host);
    for step in plan(target, &config, &host) {
        if let Some(announce) = &step.announce {
            ui.progress(announce);
        }
        let invocation = step.invocation.in_dir(project_root);
        runner.run(&invocation)?.check(&invocation)?;
    }
    Ok(())
}
