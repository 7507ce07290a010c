//! ChangeLens Core - snapshot diff kernel for building-model elements
//!
//! This crate provides the pure comparison kernel for ChangeLens,
//! including:
//! - Immutable element/snapshot models (point or curve locations, typed
//!   named parameters)
//! - Geometry comparator with configurable position tolerance
//! - Parameter comparator with type-aware equality and two scan modes
//! - Type grouping index and the diff classifier
//! - Ordered report model and tabular/human renderers
//!
//! No I/O happens here; snapshot loading, visual overrides, and export
//! live in `changelens-engine`.

pub mod compare;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use compare::{same_location, values_equal, ParamCompareMode, RealEqualityPolicy};
pub use diff::{compute_diff, compute_diff_with_progress, DiffOptions, DiffRecord, DiffReport, DiffStatus};
pub use errors::{ChangeLensError, Result};
pub use model::{Element, Location, ParamValue, Point3, Snapshot};
