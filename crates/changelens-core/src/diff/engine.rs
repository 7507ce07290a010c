//! Diff classification engine.
//!
//! The classifier walks the new snapshot once, matching each element
//! against old elements of the same type, then scans the old snapshot for
//! elements that vanished. Matching candidates are restricted by
//! [`TypeGroupIndex`], which turns the O(n*m) candidate search into
//! O(n*k) for average group size k.

use std::collections::HashMap;

use crate::compare::{params_changed, same_location};
use crate::diff::model::{DiffOptions, DiffRecord, DiffReport, DiffStatus};
use crate::model::Element;
use changelens_core_types::TypeId;

/// Old-snapshot elements bucketed by type identity
///
/// Built once per run in O(n); read-only afterward. Group order is the
/// snapshot's stored order, which makes the first-match tie-break
/// deterministic.
pub struct TypeGroupIndex<'a> {
    groups: HashMap<TypeId, Vec<&'a Element>>,
}

impl<'a> TypeGroupIndex<'a> {
    /// Bucket the given elements by `type_id`, preserving slice order
    /// within each group
    pub fn build(elements: &[&'a Element]) -> Self {
        let mut groups: HashMap<TypeId, Vec<&'a Element>> = HashMap::new();
        for element in elements {
            groups.entry(element.type_id).or_default().push(element);
        }
        Self { groups }
    }

    /// Elements sharing the given type, in stored order (empty if none)
    pub fn group(&self, type_id: TypeId) -> &[&'a Element] {
        self.groups.get(&type_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct types in the index
    pub fn type_count(&self) -> usize {
        self.groups.len()
    }
}

/// Classify the new snapshot against the old one
///
/// See [`compute_diff_with_progress`]; this variant discards progress.
pub fn compute_diff(old: &[&Element], new: &[&Element], options: &DiffOptions) -> DiffReport {
    compute_diff_with_progress(old, new, options, &mut |_| {})
}

/// Classify the new snapshot against the old one, reporting progress
///
/// For each new element, in snapshot order:
/// - no old element shares its type -> `Added`
/// - the type exists, but no location match within the group -> `Modified`
/// - first location match in stored group order -> compare parameters;
///   a difference -> `ParamModified`, otherwise unchanged (no record).
///
/// After the forward pass, every old element with no new-snapshot
/// type+location counterpart yields one `Deleted` record. Parameter
/// content is never consulted for deletion.
///
/// `progress` is invoked after each processed new element with
/// `round(processed * 100 / total)`, capped at 99 until the last element
/// so 100 means complete; it is never invoked when the new selection is
/// empty.
pub fn compute_diff_with_progress(
    old: &[&Element],
    new: &[&Element],
    options: &DiffOptions,
    progress: &mut dyn FnMut(u8),
) -> DiffReport {
    let old_index = TypeGroupIndex::build(old);
    let total = new.len();
    let mut records: Vec<DiffRecord> = Vec::new();

    for (processed, element) in new.iter().enumerate() {
        let group = old_index.group(element.type_id);

        let status = if group.is_empty() {
            Some(DiffStatus::Added)
        } else {
            // First match in stored order wins; no "best match" search.
            let matched = group.iter().find(|old_el| {
                same_location(
                    &element.location,
                    &old_el.location,
                    options.location_tolerance,
                )
            });
            match matched {
                None => Some(DiffStatus::Modified),
                Some(old_el) => {
                    if params_changed(element, old_el, options.param_mode, options.real_policy) {
                        Some(DiffStatus::ParamModified)
                    } else {
                        None
                    }
                }
            }
        };

        if let Some(status) = status {
            records.push(DiffRecord {
                element_id: element.id,
                category: element.category.clone(),
                name: element.name.clone(),
                status,
            });
        }

        let done = processed + 1;
        let percent = (done as f64 * 100.0 / total as f64).round() as u8;
        // Rounding can hit 100 early on large selections; hold it back
        // until the final element.
        let percent = if done == total { 100 } else { percent.min(99) };
        progress(percent);
    }

    // Deletion pass: type+location presence only, independent of the
    // forward pass and of parameter content.
    let new_index = TypeGroupIndex::build(new);
    for old_el in old {
        let survives = new_index.group(old_el.type_id).iter().any(|new_el| {
            same_location(
                &old_el.location,
                &new_el.location,
                options.location_tolerance,
            )
        });
        if !survives {
            records.push(DiffRecord {
                element_id: old_el.id,
                category: old_el.category.clone(),
                name: old_el.name.clone(),
                status: DiffStatus::Deleted,
            });
        }
    }

    let report = DiffReport::new(records);
    tracing::debug!(
        old_count = old.len(),
        new_count = new.len(),
        types = old_index.type_count(),
        records = report.len(),
        "diff classification complete"
    );
    report
}
