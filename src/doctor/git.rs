//! Git operations used while fixing repositories.

use std::path::Path;

use crate::error::Result;
use crate::shell::{CommandResult, Invocation, ProcessRunner};

/// What `git stash` prints when there is nothing to stash.
const NOTHING_TO_STASH: &str = "No local changes to save";

/// Whether `dir` is inside a git work tree.
///
/// Any failure (git missing, not a repository) counts as "no".
pub fn is_in_git(runner: &dyn ProcessRunner, dir: &Path) -> bool {
    let inv = Invocation::new("git", ["rev-parse", "--is-inside-work-tree"])
        .in_dir(dir)
        .captured();
    match runner.run(&inv) {
        Ok(result) => result.success && result.stdout.trim() == "true",
        Err(e) => {
            tracing::debug!("git detection failed in {}: {}", dir.display(), e);
            false
        }
    }
}

/// Run `git <args>` in `dir` on the terminal, failing on a non-zero exit.
pub fn run_git<I, S>(runner: &dyn ProcessRunner, dir: &Path, args: I) -> Result<CommandResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let inv = Invocation::new("git", args).in_dir(dir);
    runner.run(&inv)?.check(&inv)
}

/// Stash local changes. Returns whether a stash entry was created.
pub fn stash(runner: &dyn ProcessRunner, dir: &Path) -> Result<bool> {
    let inv = Invocation::new("git", ["stash"]).in_dir(dir).captured();
    let result = runner.run(&inv)?.check(&inv)?;
    Ok(!result.combined_output().contains(NOTHING_TO_STASH))
}

/// Put stashed changes back.
pub fn unstash(runner: &dyn ProcessRunner, dir: &Path) -> Result<()> {
    run_git(runner, dir, ["stash", "pop"]).map(|_| ())
}

/// Run `work` against a clean working tree.
///
/// When `enabled`, local changes are stashed first and restored afterwards,
/// whether `work` succeeds or fails. An error from `work` takes precedence
/// over an error restoring the stash.
pub fn with_stash<T>(
    runner: &dyn ProcessRunner,
    dir: &Path,
    enabled: bool,
    work: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let stashed = enabled && stash(runner, dir)?;
    let outcome = work();

    if stashed {
        if let Err(restore_err) = unstash(runner, dir) {
            return match outcome {
                Ok(_) => Err(restore_err),
                Err(work_err) => {
                    tracing::warn!(
                        "Failed to restore stash in {}: {}",
                        dir.display(),
                        restore_err
                    );
                    Err(work_err)
                }
            };
        }
    }

    outcome
}

/// Stage `files`, commit with `message`, and optionally push.
pub fn commit_files(
    runner: &dyn ProcessRunner,
    dir: &Path,
    files: &[&Path],
    message: &str,
    push: bool,
) -> Result<()> {
    let add_args = std::iter::once("add".to_string())
        .chain(files.iter().map(|f| f.to_string_lossy().to_string()));
    run_git(runner, dir, add_args)?;
    run_git(runner, dir, ["commit", "-m", message])?;
    if push {
        run_git(runner, dir, ["push"])?;
    }
    Ok(())
}
