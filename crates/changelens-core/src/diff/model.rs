//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Record order is insertion order and is preserved end to end into the
//! export; there is no deduplication or re-sorting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::compare::{ParamCompareMode, RealEqualityPolicy, DEFAULT_LOCATION_TOLERANCE};
use changelens_core_types::ElementId;

/// Change status of one classified element
///
/// Unchanged elements never materialize a record, so there is no
/// `Unchanged` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffStatus {
    /// No old element shares this element's type
    Added,
    /// The type exists in the old snapshot, but not at this position
    Modified,
    /// Matched by type and position, but a compared parameter differs
    ParamModified,
    /// An old element with no type+position counterpart in the new snapshot
    Deleted,
}

impl DiffStatus {
    /// Display label used in the tabular export
    pub fn label(&self) -> &'static str {
        match self {
            DiffStatus::Added => "Added",
            DiffStatus::Modified => "Modified",
            DiffStatus::ParamModified => "ParamModified",
            DiffStatus::Deleted => "Deleted",
        }
    }
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One classified change entry in the report
///
/// References exactly one element: a new-snapshot element for
/// Added/Modified/ParamModified, an old-snapshot element for Deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffRecord {
    /// Id of the referenced element, in that element's own snapshot id space
    pub element_id: ElementId,
    /// Category label of the referenced element
    pub category: String,
    /// Display name of the referenced element
    pub name: String,
    /// Classified change status
    pub status: DiffStatus,
}

/// Ordered sequence of diff records for one run
///
/// Construction order: new-snapshot processing order for
/// Added/Modified/ParamModified, followed by old-snapshot scan order for
/// Deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// When this report was produced
    pub generated_at: DateTime<Utc>,
    /// Records in insertion order
    pub records: Vec<DiffRecord>,
}

impl DiffReport {
    /// Create a report over the given records, stamped now
    pub fn new(records: Vec<DiffRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            records,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the report holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records with the given status
    pub fn count(&self, status: DiffStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

/// Run-start configuration for the classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Position tolerance in model units
    pub location_tolerance: f64,
    /// Parameter scan mode
    pub param_mode: ParamCompareMode,
    /// Real-number equality policy
    pub real_policy: RealEqualityPolicy,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            location_tolerance: DEFAULT_LOCATION_TOLERANCE,
            param_mode: ParamCompareMode::default(),
            real_policy: RealEqualityPolicy::default(),
        }
    }
}
