//! ChangeLens Engine - run orchestration around the diff kernel
//!
//! The engine owns everything with side effects:
//! - Snapshot sources (loading model files into [`changelens_core::Snapshot`])
//! - Override and progress sinks, plus a file-backed view override state
//! - The diff run orchestrator (collect, classify, dispatch, export)
//! - The color-reset operation and request-level dispatch between the two
//!
//! The kernel in `changelens-core` stays pure; every fallible operation
//! routes through here.

pub mod commands;
pub mod config;
pub mod export;
pub mod run;
pub mod sinks;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use commands::{apply_engine_request, DiffRunArgs, EngineOutcome, EngineRequest};
pub use config::{Color, RunConfig};
pub use run::{reset_colors, run_diff};
pub use sinks::{NoopProgressSink, OverrideSink, ProgressSink};
pub use source::{JsonSnapshotSource, SnapshotSource};
pub use view::ViewOverrides;
