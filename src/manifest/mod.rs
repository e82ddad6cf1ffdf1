//! package.json manifests.
//!
//! - [`Manifest`] pairs a manifest path with its parsed JSON
//! - [`finder`] walks a directory tree for manifests

pub mod finder;

pub use finder::{find_package_jsons, EXCLUDED_DIRS, MANIFEST_FILE};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LeelaError, Result};

/// The two dependency maps a manifest declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyCategory {
    Dependencies,
    DevDependencies,
}

impl DependencyCategory {
    /// Categories in the order they are checked.
    pub const ALL: [DependencyCategory; 2] = [Self::Dependencies, Self::DevDependencies];

    /// The manifest key for this category.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
        }
    }
}

impl std::fmt::Display for DependencyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A package.json on disk and its parsed contents.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    json: Value,
}

impl Manifest {
    /// Read and parse a manifest.
    ///
    /// # Errors
    ///
    /// Returns `ManifestNotFound` if the file doesn't exist and
    /// `ManifestParse` if it isn't valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LeelaError::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LeelaError::Io(e)
            }
        })?;
        Self::parse(path, &content)
    }

    /// Parse manifest content read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let json = serde_json::from_str(content).map_err(|e| LeelaError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            json,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    /// The dependency map for a category, if present and an object.
    pub fn dependencies(&self, category: DependencyCategory) -> Option<&Map<String, Value>> {
        self.json.get(category.key()).and_then(Value::as_object)
    }

    /// The declared version constraint of `name` in a category.
    pub fn dependency_version(&self, category: DependencyCategory, name: &str) -> Option<&str> {
        self.dependencies(category)?
            .get(name)
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Mutable access to a category's dependency map, if present.
    pub fn dependencies_mut(
        &mut self,
        category: DependencyCategory,
    ) -> Option<&mut Map<String, Value>> {
        self.json
            .get_mut(category.key())
            .and_then(Value::as_object_mut)
    }

    /// Whether `scripts.start` is declared.
    pub fn has_start_script(&self) -> bool {
        self.json
            .get("scripts")
            .and_then(|s| s.get("start"))
            .map(|v| match v {
                Value::String(s) => !s.is_empty(),
                Value::Null | Value::Bool(false) => false,
                _ => true,
            })
            .unwrap_or(false)
    }

    /// Deserialize a top-level section, `None` if it is absent or null.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.json.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| LeelaError::ManifestParse {
                    path: self.path.clone(),
                    message: format!("{}: {}", key, e),
                }),
        }
    }

    /// Write the manifest back, pretty-printed with a trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.json)
            .map_err(|e| LeelaError::Other(e.into()))?;
        content.push('\n');
        fs::write(&self.path, content)?;
        Ok(())
    }
}
