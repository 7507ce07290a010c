//! Shared fixtures for engine integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use changelens_core::model::{Element, Location, Point3, Snapshot};
use changelens_core_types::{ElementId, TypeId};
use changelens_engine::{Color, OverrideSink, ProgressSink};

/// Override sink that records every apply call in order.
#[derive(Debug, Default)]
pub struct RecordingOverrideSink {
    pub events: Vec<(ElementId, Option<Color>)>,
}

impl OverrideSink for RecordingOverrideSink {
    fn apply(&mut self, element: ElementId, color: Option<Color>) {
        self.events.push((element, color));
    }
}

/// Progress sink that records every reported percentage.
#[derive(Debug, Default)]
pub struct RecordingProgressSink {
    pub reports: Vec<u8>,
}

impl ProgressSink for RecordingProgressSink {
    fn report(&mut self, percent: u8) {
        self.reports.push(percent);
    }
}

pub fn pipe(id: i64, type_id: i64, x: f64) -> Element {
    Element::new(ElementId::new(id), TypeId::new(type_id), "Pipes", "pipe").with_location(
        Location::Curve {
            start: Point3::new(x, 0.0, 0.0),
            end: Point3::new(x + 10.0, 0.0, 0.0),
        },
    )
}

/// Write a snapshot as JSON under `dir` and return its path.
pub fn write_snapshot(dir: &Path, name: &str, snapshot: &Snapshot) -> PathBuf {
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(snapshot).unwrap();
    fs::write(&path, text).unwrap();
    path
}
