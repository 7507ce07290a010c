//! Run orchestration
//!
//! Sequences one diff run: load the old snapshot, collect target
//! elements on both sides, classify, dispatch the record sequence to the
//! override sink, export. The old snapshot load happens before any side
//! effect, so an unavailable snapshot fails the run atomically. Runs are
//! serialized by construction: the override sink is taken by exclusive
//! borrow for the duration of the call.

use std::path::Path;

use changelens_core::diff::{compute_diff_with_progress, DiffRecord, DiffReport, DiffStatus};
use changelens_core::errors::Result;
use changelens_core::model::Snapshot;
use changelens_core_types::{ElementId, RunId};

use crate::config::RunConfig;
use crate::export::export_report;
use crate::sinks::{OverrideSink, ProgressSink};
use crate::source::SnapshotSource;

/// Run a full diff: collect, classify, apply overrides, export
///
/// `new_snapshot` is the caller's current model state; the old snapshot
/// is loaded from `old_model_path` through `source` and dropped when the
/// run ends. If the new snapshot contains zero target elements the run
/// completes as a no-op with an empty (header-only) export, no overrides,
/// and no progress reports.
///
/// # Errors
///
/// - `InvalidConfig` — the configuration fails validation; nothing happens
/// - `SnapshotUnavailable` — the old snapshot cannot be loaded; no side
///   effects are performed
/// - `ExportFailure` — the destination cannot be written; already-applied
///   overrides are not rolled back
pub fn run_diff(
    source: &dyn SnapshotSource,
    old_model_path: &Path,
    new_snapshot: &Snapshot,
    config: &RunConfig,
    overrides: &mut dyn OverrideSink,
    progress: &mut dyn ProgressSink,
    export_path: &Path,
) -> Result<DiffReport> {
    config.validate()?;

    let run_id = RunId::new();
    let span = tracing::info_span!("diff_run", run_id = %run_id);
    let _guard = span.enter();

    // Fails atomically: nothing below runs if the old model is unreadable.
    let old_snapshot = source.load_snapshot(old_model_path)?;

    let old_elements = old_snapshot.elements_in_categories(&config.target_categories);
    let new_elements = new_snapshot.elements_in_categories(&config.target_categories);
    tracing::info!(
        old_count = old_elements.len(),
        new_count = new_elements.len(),
        "elements collected"
    );

    if new_elements.is_empty() {
        let report = DiffReport::new(Vec::new());
        export_report(&report, export_path)?;
        tracing::info!("no target elements in new snapshot; empty report exported");
        return Ok(report);
    }

    let report = compute_diff_with_progress(
        &old_elements,
        &new_elements,
        &config.diff_options(),
        &mut |percent| progress.report(percent),
    );

    // Overrides and export are independent consumers of the one record
    // sequence, dispatched sequentially.
    for record in &report.records {
        apply_record_override(record, config, overrides);
    }
    export_report(&report, export_path)?;

    tracing::info!(
        added = report.count(DiffStatus::Added),
        modified = report.count(DiffStatus::Modified),
        param_modified = report.count(DiffStatus::ParamModified),
        deleted = report.count(DiffStatus::Deleted),
        "diff run complete"
    );
    Ok(report)
}

/// Clear the override of every element in the current view
///
/// Independent of snapshot comparison; idempotent (a second reset is a
/// no-op on an already-clean view). Returns the number of elements the
/// clear was applied to.
pub fn reset_colors(view_elements: &[ElementId], overrides: &mut dyn OverrideSink) -> usize {
    for element in view_elements {
        overrides.apply(*element, None);
    }
    tracing::info!(cleared = view_elements.len(), "view overrides reset");
    view_elements.len()
}

/// Apply the status color for one record; Deleted elements exist only in
/// the old snapshot and get no override in the current view.
fn apply_record_override(
    record: &DiffRecord,
    config: &RunConfig,
    overrides: &mut dyn OverrideSink,
) {
    let color = match record.status {
        DiffStatus::Added => Some(config.added_color),
        DiffStatus::Modified => Some(config.modified_color),
        DiffStatus::ParamModified => Some(config.param_modified_color),
        DiffStatus::Deleted => None,
    };
    if let Some(color) = color {
        overrides.apply(record.element_id, Some(color));
    }
}
