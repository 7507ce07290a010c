//! Command orchestration layer.
//!
//! Request-level dispatch between the two engine operations: the diff
//! run and the color reset.

pub mod engine_command;

pub use engine_command::{apply_engine_request, DiffRunArgs, EngineOutcome, EngineRequest};
