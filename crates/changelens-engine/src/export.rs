//! Tabular report export

use std::fs;
use std::path::Path;

use changelens_core::diff::DiffReport;
use changelens_core::errors::{ChangeLensError, Result};
use changelens_core::render::render_report_csv;

/// Write the report to `destination` as CSV
///
/// Columns `Id, Category, Name, Status`, one header row, one row per
/// record in report order. Classification and export are not
/// transactionally linked: a failure here leaves already-applied
/// overrides in place.
///
/// # Errors
///
/// Returns `ExportFailure` if the destination cannot be written.
pub fn export_report(report: &DiffReport, destination: &Path) -> Result<()> {
    let csv = render_report_csv(report);
    fs::write(destination, csv).map_err(|e| ChangeLensError::ExportFailure {
        path: destination.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::info!(
        destination = %destination.display(),
        records = report.len(),
        "report exported"
    );
    Ok(())
}
