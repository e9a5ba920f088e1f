//! scopedim - brightness and white-point control for gamescope sessions
//!
//! Generates the binary LUT overrides gamescope consumes and publishes
//! their paths as root-window properties on the displays of running steam
//! processes.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "scopedim")]
#[command(author, version, about = "Gamescope brightness and white-point control")]
#[command(long_about = "
Adjusts on-screen brightness and color temperature for gamescope sessions
by generating LUT override files and publishing their paths as X root
window properties.

Examples:
  scopedim apply -b 0.6                 # Dim to 60%
  scopedim apply -b 0.8 -t 3400         # Dim and warm the white point
  scopedim reset                        # Remove all overrides
  scopedim displays                     # List detected steam displays
  scopedim generate-lut1d out.lut1d -b 0.5 -t 4500
  scopedim generate-lut3d out.lut3d -b 1.0
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply brightness/temperature overrides to steam displays
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Remove the overrides from steam displays
    #[command(visible_alias = "r")]
    Reset(ResetArgs),

    /// List detected steam displays
    Displays,

    /// Write a 1-D shaper table to a file
    GenerateLut1d(GenerateLut1dArgs),

    /// Write a 3-D cube table to a file
    GenerateLut3d(GenerateLut3dArgs),
}

#[derive(Args)]
struct ApplyArgs {
    /// Brightness in 0.0..=1.0 (defaults file, then 1.0)
    #[arg(short, long)]
    brightness: Option<f64>,

    /// White-point temperature in Kelvin, 1000..=15000 (defaults file, then 6500)
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Directory for the LUT files (default: $SCOPEDIM_RUNTIME_DIR or
    /// $XDG_RUNTIME_DIR/scopedim)
    #[arg(long)]
    runtime_dir: Option<PathBuf>,

    /// Publish to this display instead of auto-detecting (repeatable)
    #[arg(short, long = "display")]
    display: Vec<String>,
}

#[derive(Args)]
struct ResetArgs {
    /// Reset this display instead of auto-detecting (repeatable)
    #[arg(short, long = "display")]
    display: Vec<String>,
}

#[derive(Args)]
struct GenerateLut1dArgs {
    /// Output file
    output: PathBuf,

    /// Brightness in 0.0..=1.0
    #[arg(short, long, default_value_t = 1.0)]
    brightness: f64,

    /// White-point temperature in Kelvin, 1000..=15000
    #[arg(short, long, default_value_t = scopedim_lut::temperature::NEUTRAL_KELVIN)]
    temperature: f64,
}

#[derive(Args)]
struct GenerateLut3dArgs {
    /// Output file
    output: PathBuf,

    /// Brightness in 0.0..=1.0
    #[arg(short, long, default_value_t = 1.0)]
    brightness: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Reset(args) => commands::reset::run(args),
        Commands::Displays => commands::displays::run(),
        Commands::GenerateLut1d(args) => commands::generate::run_lut1d(args),
        Commands::GenerateLut3d(args) => commands::generate::run_lut3d(args),
    }
}
