use crate::model::Location;

/// Default position tolerance in model units (feet), ~10 mm
pub const DEFAULT_LOCATION_TOLERANCE: f64 = 0.0328;

/// Test whether two locations describe the same physical position
///
/// - Point/Point: Euclidean distance strictly below `tolerance`
/// - Curve/Curve: start-to-start AND end-to-end each strictly below
///   `tolerance`, endpoints compared in stored order. A curve drawn in the
///   reverse direction does not match.
/// - Any other pairing (point vs curve, either side without a placement):
///   not comparable, returns false.
///
/// Symmetric for every comparable pairing. Total: never fails.
pub fn same_location(a: &Location, b: &Location, tolerance: f64) -> bool {
    match (a, b) {
        (Location::Point(p1), Location::Point(p2)) => p1.distance_to(p2) < tolerance,
        (
            Location::Curve {
                start: s1,
                end: e1,
            },
            Location::Curve {
                start: s2,
                end: e2,
            },
        ) => s1.distance_to(s2) < tolerance && e1.distance_to(e2) < tolerance,
        _ => false,
    }
}
