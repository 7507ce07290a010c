//! Override and progress sinks
//!
//! The orchestrator feeds two independent consumers from the one record
//! sequence: the override sink (visual side effect) and the export writer.
//! Progress is a third, best-effort channel. All sinks are infallible;
//! a sink that can fail internally must swallow or log its own errors.

use changelens_core_types::ElementId;

use crate::config::Color;

/// Visual override side-effect sink
///
/// Applying an override is idempotent and last-write-wins: re-applying a
/// color (or `None`) for the same element id is always safe.
pub trait OverrideSink {
    /// Apply a color override to the element, or clear it with `None`
    fn apply(&mut self, element: ElementId, color: Option<Color>);
}

/// Best-effort progress observer
pub trait ProgressSink {
    /// Report completion as a percentage in 0..=100
    fn report(&mut self, percent: u8);
}

/// Progress sink that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn report(&mut self, _percent: u8) {}
}
