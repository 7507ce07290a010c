//! Report renderers
//!
//! Turn a [`crate::diff::DiffReport`] into serialized output forms. The
//! tabular CSV form is the export contract; the human summary lives in
//! [`crate::diff::human_summary`].

pub mod report_render;

pub use report_render::render_report_csv;
