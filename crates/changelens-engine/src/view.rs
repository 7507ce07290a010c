//! File-backed view override state
//!
//! Stands in for a viewer's per-element override table when ChangeLens
//! runs outside a host application. The state is a JSON map from element
//! id to color; loading a missing file yields an empty state, so a fresh
//! view starts clean.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use changelens_core::errors::{ChangeLensError, Result};
use changelens_core_types::ElementId;

use crate::config::Color;
use crate::sinks::OverrideSink;

/// Per-element override state for one view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOverrides {
    path: PathBuf,
    overrides: BTreeMap<ElementId, Color>,
}

impl ViewOverrides {
    /// Load the override state stored at `path`
    ///
    /// A missing file is an empty state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the file exists but cannot be decoded.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let overrides = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(ChangeLensError::Internal {
                    message: format!("cannot read override state {}: {}", path.display(), e),
                })
            }
        };
        Ok(Self { path, overrides })
    }

    /// Persist the current state back to its file
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the file or its parent directory cannot be
    /// written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ChangeLensError::Internal {
                    message: format!("cannot create {}: {}", parent.display(), e),
                })?;
            }
        }
        let text = serde_json::to_string_pretty(&self.overrides)?;
        fs::write(&self.path, text).map_err(|e| ChangeLensError::Internal {
            message: format!("cannot write override state {}: {}", self.path.display(), e),
        })
    }

    /// The file this state persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Element ids that currently carry an override
    pub fn applied_ids(&self) -> Vec<ElementId> {
        self.overrides.keys().copied().collect()
    }

    /// Current override color of an element, if any
    pub fn color_of(&self, element: ElementId) -> Option<Color> {
        self.overrides.get(&element).copied()
    }

    /// Number of overridden elements
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Check whether no element carries an override
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl OverrideSink for ViewOverrides {
    fn apply(&mut self, element: ElementId, color: Option<Color>) {
        match color {
            Some(color) => {
                self.overrides.insert(element, color);
            }
            None => {
                self.overrides.remove(&element);
            }
        }
    }
}
