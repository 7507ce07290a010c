//! Diff run command

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use changelens_core::compare::{ParamCompareMode, RealEqualityPolicy};
use changelens_core::diff::render_human_summary;
use changelens_engine::{
    apply_engine_request, DiffRunArgs, EngineOutcome, EngineRequest, JsonSnapshotSource,
    ProgressSink, RunConfig, SnapshotSource, ViewOverrides,
};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path of the old (baseline) model snapshot
    #[arg(long)]
    pub old: PathBuf,

    /// Path of the new (current) model snapshot
    #[arg(long)]
    pub new: PathBuf,

    /// CSV export destination
    #[arg(long, default_value = "DiffReport.csv")]
    pub export: PathBuf,

    /// Override state file standing in for the host view
    #[arg(long, default_value = ".changelens/overrides.json")]
    pub overrides: PathBuf,

    /// Position tolerance in model units
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Parameter scan mode
    #[arg(long, value_enum, default_value = "tracked")]
    pub param_mode: ParamModeArg,

    /// Real-number equality policy
    #[arg(long, value_enum, default_value = "mm")]
    pub real_policy: RealPolicyArg,

    /// Target category (repeatable; defaults to the MEP curve categories)
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ParamModeArg {
    /// Compare every parameter carried by the new element
    Full,
    /// Compare only the tracked engineering parameters
    Tracked,
}

impl From<ParamModeArg> for ParamCompareMode {
    fn from(value: ParamModeArg) -> Self {
        match value {
            ParamModeArg::Full => ParamCompareMode::Full,
            ParamModeArg::Tracked => ParamCompareMode::Tracked,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RealPolicyArg {
    /// Compare reals directly in model units
    Raw,
    /// Convert to millimeters and compare at 1mm resolution
    Mm,
}

impl From<RealPolicyArg> for RealEqualityPolicy {
    fn from(value: RealPolicyArg) -> Self {
        match value {
            RealPolicyArg::Raw => RealEqualityPolicy::RawUnits,
            RealPolicyArg::Mm => RealEqualityPolicy::Millimeters,
        }
    }
}

/// Progress sink printing percentage changes to stderr.
struct StderrProgressSink {
    last: Option<u8>,
}

impl StderrProgressSink {
    fn new() -> Self {
        Self { last: None }
    }
}

impl ProgressSink for StderrProgressSink {
    fn report(&mut self, percent: u8) {
        if self.last != Some(percent) {
            eprintln!("progress: {}%", percent);
            self.last = Some(percent);
        }
    }
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = RunConfig::default();
    if !args.categories.is_empty() {
        config.target_categories = args.categories.iter().cloned().collect::<BTreeSet<_>>();
    }
    if let Some(tolerance) = args.tolerance {
        config.location_tolerance = tolerance;
    }
    config.param_mode = args.param_mode.into();
    config.real_policy = args.real_policy.into();

    let source = JsonSnapshotSource::new();
    let new_snapshot = source.load_snapshot(&args.new)?;
    let mut view = ViewOverrides::load(&args.overrides)?;
    let mut progress = StderrProgressSink::new();

    let request = EngineRequest {
        reset_colors: false,
        diff: Some(DiffRunArgs {
            old_model_path: args.old,
            export_path: args.export.clone(),
            config,
        }),
    };

    let outcome = apply_engine_request(
        request,
        &source,
        &new_snapshot,
        &[],
        &mut view,
        &mut progress,
    )?;
    view.save()?;

    if let EngineOutcome::Diff(report) = outcome {
        println!("{}", render_human_summary(&report));
        println!("Exported {} records to {}", report.len(), args.export.display());
    }
    Ok(())
}
