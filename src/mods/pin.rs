//! Pin dependency ranges to exact versions.

use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::manifest::{DependencyCategory, Manifest};
use crate::ui::UserInterface;

use super::{ModContext, PackageMod};

/// Strip `^` and `~` range prefixes from both dependency maps.
///
/// The manifest is only rewritten when fixing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinDependencies;

/// The exact version a caret or tilde range starts from.
pub fn pinned(version: &str) -> Option<&str> {
    version
        .strip_prefix('^')
        .or_else(|| version.strip_prefix('~'))
        .filter(|rest| !rest.is_empty())
}

impl PackageMod for PinDependencies {
    fn name(&self) -> &'static str {
        "pin-dependencies"
    }

    fn apply(
        &self,
        manifest_path: &Path,
        ctx: &ModContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let mut manifest = Manifest::load(manifest_path)?;
        let theme = ui.theme().clone();
        let location = theme.location(&manifest_path.display().to_string());
        let mut changed = 0;

        for category in DependencyCategory::ALL {
            let Some(deps) = manifest.dependencies_mut(category) else {
                continue;
            };
            for (name, value) in deps.iter_mut() {
                let Some(exact) = value.as_str().and_then(pinned).map(str::to_string) else {
                    continue;
                };
                ui.message(&format!(
                    "{} {} -> {} [in {} of {}]",
                    theme.highlight(name),
                    theme.bad(value.as_str().unwrap_or_default()),
                    theme.good(&exact),
                    theme.location(category.key()),
                    location
                ));
                *value = Value::String(exact);
                changed += 1;
            }
        }

        if changed > 0 && ctx.fix {
            manifest.save()?;
            ui.progress(&format!("Pinned {} dependencies in {}", changed, location));
        }
        Ok(())
    }
}
