//! Human-readable summary renderer for diff reports.

use crate::diff::model::{DiffReport, DiffStatus};

/// Render a human-readable Markdown/text summary of a [`DiffReport`].
///
/// The summary is intended for review displays and run logs. It is
/// informational only and does not affect the structured report or the
/// tabular export.
pub fn render_human_summary(report: &DiffReport) -> String {
    let mut out = String::new();

    out.push_str("## Model Diff\n\n");
    out.push_str(&format!(
        "**Generated**: {}  \n**Records**: {}\n\n",
        report.generated_at.to_rfc3339(),
        report.len()
    ));

    if report.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str("| Status | Count |\n|---|---|\n");
    for status in [
        DiffStatus::Added,
        DiffStatus::Modified,
        DiffStatus::ParamModified,
        DiffStatus::Deleted,
    ] {
        out.push_str(&format!("| {} | {} |\n", status.label(), report.count(status)));
    }
    out.push('\n');

    out.push_str("### Records\n\n");
    for record in &report.records {
        out.push_str(&format!(
            "- **{}**: {} `{}` ({})\n",
            record.status.label(),
            record.element_id,
            record.name,
            record.category
        ));
    }

    out
}
