//! Color reset command

use std::path::PathBuf;

use clap::Args;

use changelens_engine::{reset_colors, ViewOverrides};

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Override state file standing in for the host view
    #[arg(long, default_value = ".changelens/overrides.json")]
    pub overrides: PathBuf,
}

pub fn execute(args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = ViewOverrides::load(&args.overrides)?;
    let ids = view.applied_ids();
    let cleared = reset_colors(&ids, &mut view);
    view.save()?;
    println!("Cleared overrides for {} element(s)", cleared);
    Ok(())
}
