//! Bounded-depth search for package.json files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Directories never descended into.
pub const EXCLUDED_DIRS: [&str; 4] = ["node_modules", "PackageCache", ".git", ".github"];

/// Find package.json files under `dir`, descending at most `depth` levels.
///
/// `dir` itself counts as the first level, so `depth == 0` finds nothing and
/// `depth == 1` only looks at `dir`. Within a directory the manifest comes
/// first, then subdirectories in name order.
///
/// # Errors
///
/// Fails if `dir` cannot be listed. Unreadable subdirectories are skipped.
pub fn find_package_jsons(dir: &Path, depth: usize) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if depth == 0 {
        return Ok(found);
    }

    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let manifest = dir.join(MANIFEST_FILE);
    if entries.iter().any(|e| e.file_name() == MANIFEST_FILE) && manifest.is_file() {
        found.push(manifest);
    }

    for entry in entries {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if EXCLUDED_DIRS.iter().any(|excluded| name == *excluded) {
            continue;
        }

        match find_package_jsons(&path, depth - 1) {
            Ok(nested) => found.extend(nested),
            Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    fn relative(root: &Path, found: Vec<PathBuf>) -> Vec<String> {
        found
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn skips_node_modules() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/package.json");
        touch(temp.path(), "a/node_modules/b/package.json");

        let found = find_package_jsons(temp.path(), 4).unwrap();
        assert_eq!(relative(temp.path(), found), vec!["a/package.json"]);
    }

    #[test]
    fn skips_cache_and_vcs_dirs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "PackageCache/x/package.json");
        touch(temp.path(), ".git/package.json");
        touch(temp.path(), ".github/package.json");
        touch(temp.path(), "app/package.json");

        let found = find_package_jsons(temp.path(), 4).unwrap();
        assert_eq!(relative(temp.path(), found), vec!["app/package.json"]);
    }

    #[test]
    fn depth_zero_is_empty() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "package.json");
        assert!(find_package_jsons(temp.path(), 0).unwrap().is_empty());
    }

    #[test]
    fn depth_limits_descent() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "package.json");
        touch(temp.path(), "a/package.json");
        touch(temp.path(), "a/b/package.json");

        let found = find_package_jsons(temp.path(), 2).unwrap();
        assert_eq!(
            relative(temp.path(), found),
            vec!["package.json", "a/package.json"]
        );
    }

    #[test]
    fn root_manifest_comes_before_subdirectories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b/package.json");
        touch(temp.path(), "a/package.json");
        touch(temp.path(), "package.json");

        let found = find_package_jsons(temp.path(), 4).unwrap();
        assert_eq!(
            relative(temp.path(), found),
            vec!["package.json", "a/package.json", "b/package.json"]
        );
    }

    #[test]
    fn missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(find_package_jsons(&temp.path().join("nope"), 4).is_err());
    }
}
