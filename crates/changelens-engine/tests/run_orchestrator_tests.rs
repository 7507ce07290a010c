//! Integration tests for the diff run orchestrator and request dispatch.

mod common;

use std::fs;

use changelens_core::diff::DiffStatus;
use changelens_core::model::{ParamValue, Snapshot};
use changelens_core_types::ElementId;
use changelens_engine::OverrideSink;
use changelens_engine::{
    apply_engine_request, reset_colors, run_diff, Color, DiffRunArgs, EngineOutcome,
    EngineRequest, JsonSnapshotSource, RunConfig, ViewOverrides,
};
use common::{pipe, write_snapshot, RecordingOverrideSink, RecordingProgressSink};

#[test]
fn test_full_run_exports_applies_and_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig::default();

    // Old: two pipes of type 500. New: one unchanged, one moved, and a
    // pipe of a brand-new type. The second old pipe has no counterpart.
    let old = Snapshot::from_elements(vec![pipe(1, 500, 0.0), pipe(2, 500, 100.0)]);
    let new = Snapshot::from_elements(vec![
        pipe(10, 500, 0.0),
        pipe(11, 500, 50.0),
        pipe(12, 777, 0.0),
    ]);
    let old_path = write_snapshot(dir.path(), "old.json", &old);
    let export_path = dir.path().join("report.csv");

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let report = run_diff(
        &JsonSnapshotSource::new(),
        &old_path,
        &new,
        &config,
        &mut overrides,
        &mut progress,
        &export_path,
    )
    .unwrap();

    // id 10 is unchanged; 11 moved; 12 is a new type; 2 vanished.
    let statuses: Vec<(i64, DiffStatus)> = report
        .records
        .iter()
        .map(|r| (r.element_id.as_i64(), r.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            (11, DiffStatus::Modified),
            (12, DiffStatus::Added),
            (2, DiffStatus::Deleted),
        ]
    );

    // Overrides: blue for the moved pipe, red for the added one, nothing
    // for the deleted one (it is not in the current view).
    assert_eq!(
        overrides.events,
        vec![
            (ElementId::new(11), Some(Color::new(0, 0, 255))),
            (ElementId::new(12), Some(Color::new(255, 0, 0))),
        ]
    );

    // Progress over three elements, monotone, 100 only at the end.
    assert_eq!(progress.reports, vec![33, 67, 100]);

    let csv = fs::read_to_string(&export_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Id,Category,Name,Status");
    assert_eq!(lines[1], "11,Pipes,pipe,Modified");
    assert_eq!(lines[2], "12,Pipes,pipe,Added");
    assert_eq!(lines[3], "2,Pipes,pipe,Deleted");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_param_change_gets_param_modified_color() {
    let dir = tempfile::tempdir().unwrap();
    let old = Snapshot::from_elements(vec![
        pipe(1, 500, 0.0).with_parameter("Diameter", ParamValue::Real(0.5))
    ]);
    let new = Snapshot::from_elements(vec![
        pipe(10, 500, 0.0).with_parameter("Diameter", ParamValue::Real(0.6))
    ]);
    let old_path = write_snapshot(dir.path(), "old.json", &old);

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let report = run_diff(
        &JsonSnapshotSource::new(),
        &old_path,
        &new,
        &RunConfig::default(),
        &mut overrides,
        &mut progress,
        &dir.path().join("report.csv"),
    )
    .unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.records[0].status, DiffStatus::ParamModified);
    assert_eq!(
        overrides.events,
        vec![(ElementId::new(10), Some(Color::new(255, 165, 0)))]
    );
}

#[test]
fn test_unavailable_old_snapshot_fails_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let new = Snapshot::from_elements(vec![pipe(10, 500, 0.0)]);
    let export_path = dir.path().join("report.csv");

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let err = run_diff(
        &JsonSnapshotSource::new(),
        &dir.path().join("missing.json"),
        &new,
        &RunConfig::default(),
        &mut overrides,
        &mut progress,
        &export_path,
    )
    .unwrap_err();

    assert_eq!(err.code(), "ERR_SNAPSHOT_UNAVAILABLE");
    assert!(overrides.events.is_empty());
    assert!(progress.reports.is_empty());
    assert!(!export_path.exists());
}

#[test]
fn test_corrupt_old_snapshot_fails_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let old_path = dir.path().join("old.json");
    fs::write(&old_path, "not json at all").unwrap();
    let new = Snapshot::from_elements(vec![pipe(10, 500, 0.0)]);

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let err = run_diff(
        &JsonSnapshotSource::new(),
        &old_path,
        &new,
        &RunConfig::default(),
        &mut overrides,
        &mut progress,
        &dir.path().join("report.csv"),
    )
    .unwrap_err();

    assert_eq!(err.code(), "ERR_SNAPSHOT_UNAVAILABLE");
    assert!(overrides.events.is_empty());
}

#[test]
fn test_empty_new_selection_is_a_no_op_run() {
    let dir = tempfile::tempdir().unwrap();
    // The new snapshot has elements, but none in a target category.
    let old = Snapshot::from_elements(vec![pipe(1, 500, 0.0)]);
    let mut wall = pipe(20, 900, 0.0);
    wall.category = "Walls".to_string();
    let new = Snapshot::from_elements(vec![wall]);
    let old_path = write_snapshot(dir.path(), "old.json", &old);
    let export_path = dir.path().join("report.csv");

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let report = run_diff(
        &JsonSnapshotSource::new(),
        &old_path,
        &new,
        &RunConfig::default(),
        &mut overrides,
        &mut progress,
        &export_path,
    )
    .unwrap();

    // Empty result, header-only export, and no side-channel traffic even
    // though the old snapshot still has elements.
    assert!(report.is_empty());
    assert!(overrides.events.is_empty());
    assert!(progress.reports.is_empty());
    assert_eq!(
        fs::read_to_string(&export_path).unwrap(),
        "Id,Category,Name,Status\n"
    );
}

#[test]
fn test_invalid_config_is_rejected_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    let new = Snapshot::from_elements(vec![pipe(10, 500, 0.0)]);
    let config = RunConfig {
        location_tolerance: -1.0,
        ..RunConfig::default()
    };

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let err = run_diff(
        &JsonSnapshotSource::new(),
        &dir.path().join("missing.json"),
        &new,
        &config,
        &mut overrides,
        &mut progress,
        &dir.path().join("report.csv"),
    )
    .unwrap_err();

    // Validation fires before the snapshot load, so the missing file is
    // never the reported failure.
    assert_eq!(err.code(), "ERR_INVALID_CONFIG");
}

#[test]
fn test_reset_clears_persisted_overrides_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let state_path = dir.path().join("overrides.json");

    let mut view = ViewOverrides::load(&state_path).unwrap();
    view.apply(ElementId::new(1), Some(Color::new(255, 0, 0)));
    view.apply(ElementId::new(2), Some(Color::new(0, 0, 255)));
    view.save().unwrap();

    let mut view = ViewOverrides::load(&state_path).unwrap();
    assert_eq!(view.len(), 2);

    let ids = view.applied_ids();
    let cleared = reset_colors(&ids, &mut view);
    assert_eq!(cleared, 2);
    assert!(view.is_empty());
    view.save().unwrap();

    // A second reset over the reloaded, already-clean state is a no-op.
    let mut view = ViewOverrides::load(&state_path).unwrap();
    let ids = view.applied_ids();
    assert_eq!(reset_colors(&ids, &mut view), 0);
    assert!(view.is_empty());
}

#[test]
fn test_reset_request_takes_priority_over_diff() {
    let dir = tempfile::tempdir().unwrap();
    let new = Snapshot::from_elements(vec![pipe(10, 500, 0.0)]);
    let export_path = dir.path().join("report.csv");
    let request = EngineRequest {
        reset_colors: true,
        diff: Some(DiffRunArgs {
            old_model_path: dir.path().join("missing.json"),
            export_path: export_path.clone(),
            config: RunConfig::default(),
        }),
    };

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let outcome = apply_engine_request(
        request,
        &JsonSnapshotSource::new(),
        &new,
        &[ElementId::new(1), ElementId::new(2)],
        &mut overrides,
        &mut progress,
    )
    .unwrap();

    // The diff never runs: no export is written and only clear events hit
    // the override sink.
    match outcome {
        EngineOutcome::Reset { cleared } => assert_eq!(cleared, 2),
        other => panic!("expected reset outcome, got {:?}", other),
    }
    assert!(!export_path.exists());
    assert_eq!(
        overrides.events,
        vec![(ElementId::new(1), None), (ElementId::new(2), None)]
    );
}

#[test]
fn test_empty_request_is_noop() {
    let new = Snapshot::new();
    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let outcome = apply_engine_request(
        EngineRequest::default(),
        &JsonSnapshotSource::new(),
        &new,
        &[],
        &mut overrides,
        &mut progress,
    )
    .unwrap();
    assert!(matches!(outcome, EngineOutcome::Noop));
    assert!(overrides.events.is_empty());
}

#[test]
fn test_diff_request_dispatches_to_run() {
    let dir = tempfile::tempdir().unwrap();
    let old = Snapshot::from_elements(vec![pipe(1, 500, 0.0)]);
    let new = Snapshot::from_elements(vec![pipe(10, 500, 0.0), pipe(11, 777, 0.0)]);
    let old_path = write_snapshot(dir.path(), "old.json", &old);
    let export_path = dir.path().join("report.csv");

    let mut overrides = RecordingOverrideSink::default();
    let mut progress = RecordingProgressSink::default();
    let outcome = apply_engine_request(
        EngineRequest {
            reset_colors: false,
            diff: Some(DiffRunArgs {
                old_model_path: old_path,
                export_path: export_path.clone(),
                config: RunConfig::default(),
            }),
        },
        &JsonSnapshotSource::new(),
        &new,
        &[],
        &mut overrides,
        &mut progress,
    )
    .unwrap();

    match outcome {
        EngineOutcome::Diff(report) => {
            assert_eq!(report.len(), 1);
            assert_eq!(report.records[0].status, DiffStatus::Added);
        }
        other => panic!("expected diff outcome, got {:?}", other),
    }
    assert!(export_path.exists());
}
