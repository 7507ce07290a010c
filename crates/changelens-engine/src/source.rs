//! Snapshot sources
//!
//! A [`SnapshotSource`] turns a model path into a queryable [`Snapshot`]
//! without touching the caller's active session state. The JSON source is
//! the concrete implementation used by the CLI; host integrations provide
//! their own.

use std::fs;
use std::path::Path;

use changelens_core::errors::{ChangeLensError, Result};
use changelens_core::model::Snapshot;

/// Abstraction over "open a model file and give me its element set"
pub trait SnapshotSource {
    /// Load the snapshot stored at `path`
    ///
    /// # Errors
    ///
    /// Returns `SnapshotUnavailable` if the file cannot be read or its
    /// contents cannot be decoded.
    fn load_snapshot(&self, path: &Path) -> Result<Snapshot>;
}

/// Snapshot source reading serde_json model files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotSource;

impl JsonSnapshotSource {
    /// Create a JSON snapshot source
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn load_snapshot(&self, path: &Path) -> Result<Snapshot> {
        let text = fs::read_to_string(path).map_err(|e| ChangeLensError::SnapshotUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ChangeLensError::SnapshotUnavailable {
            path: path.display().to_string(),
            reason: format!("not a valid snapshot file: {}", e),
        })
    }
}
