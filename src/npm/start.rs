//! Picking which project to start.
//!
//! Running `start` from a directory whose manifest has no start script (a
//! monorepo root, say) offers the nested projects that do have one.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::{find_package_jsons, Manifest, MANIFEST_FILE};
use crate::ui::UserInterface;

/// How deep nested projects are searched for.
pub const START_SEARCH_DEPTH: usize = 8;

fn has_start_script(path: &Path) -> bool {
    Manifest::load(path)
        .map(|m| m.has_start_script())
        .unwrap_or(false)
}

/// Nested manifests declaring a start script, relative to `root`.
pub fn start_candidates(root: &Path) -> Result<Vec<PathBuf>> {
    let candidates = find_package_jsons(root, START_SEARCH_DEPTH)?
        .into_iter()
        .filter(|p| has_start_script(p))
        .filter_map(|p| p.strip_prefix(root).ok().map(Path::to_path_buf))
        .collect();
    Ok(candidates)
}

/// Decide where `start` should run.
///
/// Returns the directory of the project the user picked, or `None` when
/// `root` itself is startable, nothing is startable, the terminal isn't
/// interactive, or the user cancelled.
pub fn choose_start_location(root: &Path, ui: &mut dyn UserInterface) -> Result<Option<PathBuf>> {
    if has_start_script(&root.join(MANIFEST_FILE)) || !ui.is_interactive() {
        return Ok(None);
    }

    let candidates = start_candidates(root)?;
    if candidates.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = candidates
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();

    ui.message("What would you like to start?");
    match ui.select("What would you like to start?", &labels)? {
        Some(index) => {
            let picked = ui.theme().note(&labels[index]);
            ui.message(&format!("   {}", picked));
            let dir = root
                .join(&candidates[index])
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            Ok(Some(dir))
        }
        None => {
            let cancelled = ui.theme().note("--Cancelled--");
            ui.message(&format!("   {}", cancelled));
            Ok(None)
        }
    }
}
