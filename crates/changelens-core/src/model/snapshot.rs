use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::element::Element;

/// The complete set of queryable elements from one model state
///
/// Old and new snapshots have independent element-id spaces; an id is
/// only meaningful within its own snapshot. The snapshot is read-only for
/// the duration of a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Elements in host iteration order
    pub elements: Vec<Element>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create a snapshot from a collected element list
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Number of elements in the snapshot
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the snapshot holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Collect the elements belonging to the given category set,
    /// preserving snapshot order
    pub fn elements_in_categories(&self, categories: &BTreeSet<String>) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| categories.contains(&e.category))
            .collect()
    }
}
