//! Immutable data model for one diff run
//!
//! Elements are value snapshots of host objects: the kernel never holds a
//! live handle back into the host, so a snapshot can be built from a JSON
//! file just as well as from a running application.

pub mod element;
pub mod snapshot;

pub use element::{Element, Location, ParamValue, Point3};
pub use snapshot::Snapshot;
