//! ChangeLens shared types
//!
//! Identifier newtypes used across the diff kernel and engine, plus
//! correlation ids for log tracking. This crate has no behavior of its
//! own; it exists so the kernel and the engine agree on identity without
//! depending on each other.

pub mod correlation;
pub mod ids;

pub use correlation::RunId;
pub use ids::{ElementId, TypeId};
