//! interp - interpolate sampled data from the command line
//!
//! # Commands
//!
//! - `interp interpolate --x <axis> --y <values> --at <axis>` - Evaluate at query points
//! - `interp reliability --x <axis> --at <axis> --distance <d>` - Flag trustworthy query points
//! - `interp check` - Print the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use interp_cli::commands::{self, interpolate::InterpolateArgs, reliability::ReliabilityArgs};
use interp_cli::config::{build_config, CliArgs};
use interp_cli::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extrapolating interpolation and reliability estimation
#[derive(Parser)]
#[command(name = "interp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Do not warn when values are extrapolated
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate sample values at query points
    Interpolate(InterpolateArgs),

    /// Classify query points by distance to the nearest sample
    Reliability(ReliabilityArgs),

    /// Print the effective configuration
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            quiet_extrapolation: cli.quiet,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        version = interp_cli::VERSION,
        log_level = %config.log_level,
        kind = %config.kind,
        output = %config.output,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Interpolate(args) => commands::interpolate::run(args, &config, &mut out),
        Commands::Reliability(args) => commands::reliability::run(args, &config, &mut out),
        Commands::Check => commands::check::run(&config, &mut out),
    }
}
