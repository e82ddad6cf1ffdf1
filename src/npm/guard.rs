//! Stale-dependency guard.
//!
//! The lockfile is sometimes written a moment after `node_modules` during an
//! install, so `node_modules` may trail the lockfile by a small window and
//! still count as up to date.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::error::{LeelaError, Result};
use crate::manifest::MANIFEST_FILE;
use crate::ui::UserInterface;

pub const NODE_MODULES: &str = "node_modules";
pub const LOCKFILE: &str = "package-lock.json";

/// Whether `node_modules` trails the lockfile by more than `window`.
pub fn is_stale(node_modules: SystemTime, lockfile: SystemTime, window: Duration) -> bool {
    lockfile
        .checked_sub(window)
        .is_some_and(|threshold| node_modules < threshold)
}

/// Check that installed dependencies match the lockfile.
///
/// Projects without a package.json always pass.
///
/// # Errors
///
/// Returns `StaleDependencies` naming the problem.
pub fn check(project_root: &Path, window: Duration) -> Result<()> {
    if !project_root.join(MANIFEST_FILE).exists() {
        return Ok(());
    }

    let nm_path = project_root.join(NODE_MODULES);
    let lock_path = project_root.join(LOCKFILE);

    let reason = if !nm_path.exists() {
        "Missing node_modules"
    } else if !lock_path.exists() {
        "Missing package-lock.json"
    } else {
        let nm_modified = fs::metadata(&nm_path)?.modified()?;
        let lock_modified = fs::metadata(&lock_path)?.modified()?;
        tracing::debug!(
            "node_modules modified {:?}, lockfile modified {:?}",
            nm_modified,
            lock_modified
        );
        if !is_stale(nm_modified, lock_modified, window) {
            return Ok(());
        }
        "node_modules are out of date"
    };

    Err(LeelaError::StaleDependencies {
        reason: reason.to_string(),
    })
}

/// Run the guard, reporting a failure with remediation instructions.
///
/// Returns `false` when the caller must stop.
pub fn enforce(
    project_root: &Path,
    window: Duration,
    tool_name: &str,
    ui: &mut dyn UserInterface,
) -> Result<bool> {
    match check(project_root, window) {
        Ok(()) => Ok(true),
        Err(LeelaError::StaleDependencies { reason }) => {
            ui.error(&reason);
            let fix = ui.theme().location(&format!("{} yarn", tool_name));
            ui.error(&format!("To fix, run {}", fix));
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    const WINDOW: Duration = Duration::from_millis(2000);

    fn project(with_nm: bool, with_lock: bool) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE), "{}").unwrap();
        if with_nm {
            fs::create_dir(temp.path().join(NODE_MODULES)).unwrap();
        }
        if with_lock {
            fs::write(temp.path().join(LOCKFILE), "{}").unwrap();
        }
        temp
    }

    fn set_lock_mtime(root: &Path, time: SystemTime) {
        let file = fs::File::options()
            .write(true)
            .open(root.join(LOCKFILE))
            .unwrap();
        file.set_modified(time).unwrap();
    }

    #[test]
    fn is_stale_respects_window() {
        let lock = SystemTime::now();
        assert!(!is_stale(lock, lock, WINDOW));
        assert!(!is_stale(lock - Duration::from_millis(1500), lock, WINDOW));
        assert!(is_stale(lock - Duration::from_millis(2500), lock, WINDOW));
        assert!(!is_stale(lock + Duration::from_secs(60), lock, WINDOW));
    }

    #[test]
    fn no_manifest_passes() {
        let temp = TempDir::new().unwrap();
        assert!(check(temp.path(), WINDOW).is_ok());
    }

    #[test]
    fn missing_node_modules_fails() {
        let temp = project(false, true);
        let err = check(temp.path(), WINDOW).unwrap_err();
        assert!(err.to_string().contains("Missing node_modules"));
    }

    #[test]
    fn missing_lockfile_fails() {
        let temp = project(true, false);
        let err = check(temp.path(), WINDOW).unwrap_err();
        assert!(err.to_string().contains("Missing package-lock.json"));
    }

    #[test]
    fn fresh_install_passes() {
        let temp = project(true, true);
        assert!(check(temp.path(), WINDOW).is_ok());
    }

    #[test]
    fn lockfile_newer_than_window_fails() {
        let temp = project(true, true);
        set_lock_mtime(temp.path(), SystemTime::now() + Duration::from_secs(3600));
        let err = check(temp.path(), WINDOW).unwrap_err();
        assert!(err.to_string().contains("node_modules are out of date"));
    }

    #[test]
    fn enforce_reports_remediation() {
        let temp = project(false, true);
        let mut ui = MockUI::new();
        let ok = enforce(temp.path(), WINDOW, "leela", &mut ui).unwrap();
        assert!(!ok);
        assert!(ui.has_error("Missing node_modules"));
        assert!(ui.has_error("To fix, run leela yarn"));
    }
}
