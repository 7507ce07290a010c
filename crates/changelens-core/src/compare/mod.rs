//! Comparators used by the diff classifier
//!
//! Every function here is total over its input domain: comparisons never
//! fail, they only answer yes or no. Incomparable inputs (mismatched
//! location kinds, mismatched value kinds) answer "different".

pub mod geometry;
pub mod params;

pub use geometry::{same_location, DEFAULT_LOCATION_TOLERANCE};
pub use params::{
    params_changed, values_equal, ParamCompareMode, RealEqualityPolicy, MM_EPSILON, MM_PER_FOOT,
    RAW_UNIT_EPSILON, TRACKED_PARAM_NAMES,
};
