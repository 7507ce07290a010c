//! Identifier newtypes for model elements
//!
//! Element ids are snapshot-local: the old and new snapshots have
//! independent id spaces, so an `ElementId` is only meaningful together
//! with the snapshot it came from. Type ids identify an element's
//! family/type definition and are the primary grouping key for matching.

use serde::{Deserialize, Serialize};

/// Snapshot-local unique identifier of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(i64);

impl ElementId {
    /// Wrap a raw host id
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ElementId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Identifier of an element's family/type definition
///
/// Two elements with equal `TypeId` are "the same kind of thing" for
/// matching purposes, even across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(i64);

impl TypeId {
    /// Wrap a raw host type id
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TypeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
