use serde::{Deserialize, Serialize};

use crate::model::{Element, ParamValue};

/// Tolerance for real-number equality in raw model units (feet)
pub const RAW_UNIT_EPSILON: f64 = 1e-4;

/// Millimeters per foot, the model's native length unit
pub const MM_PER_FOOT: f64 = 304.8;

/// Tolerance for real-number equality after conversion to millimeters
pub const MM_EPSILON: f64 = 1.0;

/// Parameter names considered semantically significant in tracked mode
///
/// Names are locale-dependent, so each tracked dimension appears in both
/// its English and Japanese display form.
pub const TRACKED_PARAM_NAMES: &[&str] = &[
    "Diameter",
    "直径",
    "Height",
    "高さ",
    "Width",
    "幅",
    "System Type",
    "システムタイプ",
];

/// Equality policy for real-number parameter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RealEqualityPolicy {
    /// `|a - b| < 1e-4` in the model's native unit
    RawUnits,
    /// Convert both sides to millimeters (x 304.8), then `|a - b| < 1.0`
    ///
    /// Used when the tracked parameter is a physical dimension, to avoid
    /// false positives from unit-scale rounding.
    Millimeters,
}

impl Default for RealEqualityPolicy {
    fn default() -> Self {
        RealEqualityPolicy::Millimeters
    }
}

/// Scan mode for comparing an element's parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamCompareMode {
    /// Compare every parameter name present on both elements
    Full,
    /// Compare only the [`TRACKED_PARAM_NAMES`] allow-list
    Tracked,
}

impl Default for ParamCompareMode {
    fn default() -> Self {
        ParamCompareMode::Tracked
    }
}

/// Test equality of two parameter values under the given real policy
///
/// Symmetric and reflexive. Values of different kinds are never equal.
/// Total: never fails.
pub fn values_equal(a: &ParamValue, b: &ParamValue, policy: RealEqualityPolicy) -> bool {
    match (a, b) {
        (ParamValue::Text(s1), ParamValue::Text(s2)) => s1 == s2,
        (ParamValue::Integer(i1), ParamValue::Integer(i2)) => i1 == i2,
        (ParamValue::Real(v1), ParamValue::Real(v2)) => match policy {
            RealEqualityPolicy::RawUnits => (v1 - v2).abs() < RAW_UNIT_EPSILON,
            RealEqualityPolicy::Millimeters => {
                (v1 * MM_PER_FOOT - v2 * MM_PER_FOOT).abs() < MM_EPSILON
            }
        },
        (ParamValue::Reference(r1), ParamValue::Reference(r2)) => r1 == r2,
        _ => false,
    }
}

/// Test whether any compared parameter differs between two elements
///
/// In `Full` mode every parameter name present on the new element that
/// also resolves by name on the old element is compared. In `Tracked`
/// mode the scan is restricted to [`TRACKED_PARAM_NAMES`]; an element
/// carrying none of those names reports unchanged.
///
/// Names present on only one side never count as a difference; the
/// Added/Deleted classification covers structural change.
pub fn params_changed(
    new_el: &Element,
    old_el: &Element,
    mode: ParamCompareMode,
    policy: RealEqualityPolicy,
) -> bool {
    for (name, new_val) in &new_el.parameters {
        if mode == ParamCompareMode::Tracked && !TRACKED_PARAM_NAMES.contains(&name.as_str()) {
            continue;
        }
        if let Some(old_val) = old_el.parameter(name) {
            if !values_equal(new_val, old_val, policy) {
                return true;
            }
        }
    }
    false
}
