use std::collections::BTreeMap;

use changelens_core_types::{ElementId, TypeId};
use serde::{Deserialize, Serialize};

/// A point in model space, in the model's native length unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a point from coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Physical placement of an element
///
/// Equipment instances carry a single insertion point; pipe/duct/tray
/// segments carry a two-endpoint curve. Elements without a usable
/// placement carry `None` and never match any other location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Location {
    /// Single insertion point
    Point(Point3),
    /// Two-endpoint curve, endpoints in stored (drawing) order
    Curve { start: Point3, end: Point3 },
    /// No usable placement
    None,
}

impl Location {
    /// Check whether this location carries no placement
    pub fn is_none(&self) -> bool {
        matches!(self, Location::None)
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::None
    }
}

/// A typed parameter value
///
/// Mirrors the host's storage kinds. Value kinds the host exposes beyond
/// these four are dropped at snapshot build time, so the comparator never
/// sees them (the conservative "unknown kinds never differ" rule).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Text value; absent host strings are normalized to ""
    Text(String),
    /// Integer value
    Integer(i64),
    /// Real-number value in the model's native length unit
    Real(f64),
    /// Reference to another element by raw id
    Reference(i64),
}

/// One discrete engineering object in a snapshot
///
/// Immutable for the duration of a diff run. Parameter names are unique
/// per element (BTreeMap keeps lookup deterministic) but not across the
/// model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Snapshot-local unique identifier
    pub id: ElementId,

    /// Family/type identifier; the primary matching key
    pub type_id: TypeId,

    /// Display classification label (e.g. "Pipes", "Ducts")
    pub category: String,

    /// Display name (not guaranteed unique)
    pub name: String,

    /// Physical placement
    #[serde(default)]
    pub location: Location,

    /// Named parameter values
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
}

impl Element {
    /// Create an element with no location and no parameters
    pub fn new(
        id: ElementId,
        type_id: TypeId,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            type_id,
            category: category.into(),
            name: name.into(),
            location: Location::None,
            parameters: BTreeMap::new(),
        }
    }

    /// Set the location (builder style)
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Add a named parameter (builder style)
    pub fn with_parameter(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(name)
    }
}
