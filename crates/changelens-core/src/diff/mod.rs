//! Snapshot diff classification
//!
//! The core entry point is [`compute_diff`] (and its progress-reporting
//! variant), which classifies every element of the new snapshot against
//! the old one and produces an ordered [`DiffReport`].

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, compute_diff_with_progress, TypeGroupIndex};
pub use human_summary::render_human_summary;
pub use model::{DiffOptions, DiffRecord, DiffReport, DiffStatus};
