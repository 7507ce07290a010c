//! ChangeLens CLI
//!
//! Command-line interface for ChangeLens

use clap::{Parser, Subcommand, ValueEnum};

use changelens_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "changelens")]
#[command(about = "ChangeLens - Building-model snapshot diffing", long_about = None)]
struct Cli {
    /// Logging profile
    #[arg(long, global = true, value_enum, default_value = "dev")]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable logs at debug level
    Dev,
    /// JSON logs at info level
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(value: LogProfile) -> Self {
        match value {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two model snapshots, apply status colors, export CSV
    Diff(commands::diff::DiffArgs),
    /// Clear every applied status color
    Reset(commands::reset::ResetArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Reset(args) => commands::reset::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
