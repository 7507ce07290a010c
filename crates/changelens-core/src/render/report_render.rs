use crate::diff::DiffReport;

/// Render a diff report as CSV
///
/// One header row (`Id,Category,Name,Status`), then one row per record in
/// report order. Id is a bare number; the other fields are text and are
/// quoted when they contain a delimiter, quote, or newline.
pub fn render_report_csv(report: &DiffReport) -> String {
    let mut out = String::from("Id,Category,Name,Status\n");
    for record in &report.records {
        out.push_str(&format!(
            "{},{},{},{}\n",
            record.element_id,
            csv_field(&record.category),
            csv_field(&record.name),
            record.status.label()
        ));
    }
    out
}

/// Quote a text field if it needs escaping
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
