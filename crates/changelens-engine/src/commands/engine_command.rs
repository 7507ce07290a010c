//! Engine-level requests and their dispatch.

#![allow(clippy::result_large_err)]

use std::path::PathBuf;

use changelens_core::diff::DiffReport;
use changelens_core::errors::Result;
use changelens_core::model::Snapshot;
use changelens_core_types::ElementId;

use crate::config::RunConfig;
use crate::run::{reset_colors, run_diff};
use crate::sinks::{OverrideSink, ProgressSink};
use crate::source::SnapshotSource;

/// Arguments for one diff run
#[derive(Debug, Clone)]
pub struct DiffRunArgs {
    /// Path of the old model snapshot to compare against
    pub old_model_path: PathBuf,
    /// Destination of the tabular export
    pub export_path: PathBuf,
    /// Run configuration (categories, tolerances, colors)
    pub config: RunConfig,
}

/// One request against the engine
///
/// A request can ask for a reset, a diff, or both at once. When both are
/// set, the reset takes priority and the diff does not run.
#[derive(Debug, Clone, Default)]
pub struct EngineRequest {
    /// Clear all view overrides instead of diffing
    pub reset_colors: bool,
    /// Diff run to perform, if any
    pub diff: Option<DiffRunArgs>,
}

/// Result of applying an engine request.
#[derive(Debug, Clone)]
pub enum EngineOutcome {
    /// Overrides were cleared for this many elements.
    Reset { cleared: usize },
    /// A diff run completed and produced this report.
    Diff(DiffReport),
    /// The request carried no operation.
    Noop,
}

/// Apply an engine request with the given source and sinks.
///
/// `view_elements` is the set of elements whose overrides a reset would
/// clear; it is ignored for diff requests.
///
/// # Errors
///
/// Propagates any error from the selected operation; a `Noop` request
/// never fails.
pub fn apply_engine_request(
    request: EngineRequest,
    source: &dyn SnapshotSource,
    new_snapshot: &Snapshot,
    view_elements: &[ElementId],
    overrides: &mut dyn OverrideSink,
    progress: &mut dyn ProgressSink,
) -> Result<EngineOutcome> {
    if request.reset_colors {
        if request.diff.is_some() {
            tracing::warn!("reset requested alongside a diff; diff skipped");
        }
        let cleared = reset_colors(view_elements, overrides);
        return Ok(EngineOutcome::Reset { cleared });
    }

    match request.diff {
        Some(args) => {
            let report = run_diff(
                source,
                &args.old_model_path,
                new_snapshot,
                &args.config,
                overrides,
                progress,
                &args.export_path,
            )?;
            Ok(EngineOutcome::Diff(report))
        }
        None => Ok(EngineOutcome::Noop),
    }
}
