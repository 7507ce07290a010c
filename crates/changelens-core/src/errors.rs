use thiserror::Error;

/// Result type alias using ChangeLensError
pub type Result<T> = std::result::Result<T, ChangeLensError>;

/// Error taxonomy for ChangeLens operations
///
/// Comparison functions are total and never produce errors; only snapshot
/// load and export I/O can fail. Each variant maps to a stable error code
/// via [`ChangeLensError::code`] for programmatic handling at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangeLensError {
    /// The old or new snapshot cannot be loaded or queried.
    ///
    /// Fatal for the run: surfaced before any side effects are performed.
    #[error("Snapshot unavailable: {path}: {reason}")]
    SnapshotUnavailable { path: String, reason: String },

    /// The report destination cannot be written.
    ///
    /// Surfaced after classification and overrides have already been
    /// applied; overrides are not rolled back.
    #[error("Export failed: {path}: {reason}")]
    ExportFailure { path: String, reason: String },

    /// A run configuration value is unusable (e.g. non-positive tolerance)
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ChangeLensError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ChangeLensError::SnapshotUnavailable { .. } => "ERR_SNAPSHOT_UNAVAILABLE",
            ChangeLensError::ExportFailure { .. } => "ERR_EXPORT_FAILURE",
            ChangeLensError::InvalidConfig { .. } => "ERR_INVALID_CONFIG",
            ChangeLensError::Serialization { .. } => "ERR_SERIALIZATION",
            ChangeLensError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}

/// Conversion from serde_json::Error to ChangeLensError
impl From<serde_json::Error> for ChangeLensError {
    fn from(err: serde_json::Error) -> Self {
        ChangeLensError::Serialization {
            message: err.to_string(),
        }
    }
}
