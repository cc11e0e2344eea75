//! numlab CLI - Command Line Front End for Numerical Methods
//!
//! Drives the numlab_core samplers, integrators and searches from the shell.
//!
//! # Commands
//!
//! - `numlab generate <kind>` - Draw a sample from a variate generator
//! - `numlab integrate <function> --x-min <a> --x-max <b>` - Monte Carlo integral
//! - `numlab solve root|extremum <function> --x-min <a> --x-max <b>` - Scalar search
//! - `numlab stats <file>` - Descriptive statistics of a numeric text file
//! - `numlab check` - Print version and effective configuration
//!
//! # Configuration
//!
//! Settings are read from `numlab.toml` (see `--config`), then overridden by
//! `NUMLAB_LOG_LEVEL` / `NUMLAB_SEED`, then by command-line flags. `RUST_LOG`
//! takes precedence over the configured log level.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod functions;
mod output;

pub use error::{CliError, Result};

use commands::generate::GenerateArgs;
use commands::integrate::IntegrateArgs;
use commands::solve::SolveCommand;
use config::{build_config, CliArgs};
use output::OutputFormat;

/// numlab numerical methods CLI
#[derive(Parser)]
#[command(name = "numlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "numlab.toml")]
    config: PathBuf,

    /// Output format (overrides the configured format)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (overrides the configured level)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a sample from a variate generator
    Generate(GenerateArgs),

    /// Estimate an integral by Monte Carlo
    Integrate(IntegrateArgs),

    /// Find a root or an extremum of a function
    #[command(subcommand)]
    Solve(SolveCommand),

    /// Print statistics of a whitespace-delimited numeric file
    Stats {
        /// Path to the sample file
        file: String,
    },

    /// Check version and effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: Some(cli.config.clone()),
        log_level: cli.log_level.clone(),
        format: cli.format,
        verbose: cli.verbose,
    })?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?config, "effective configuration");

    match &cli.command {
        Commands::Generate(args) => commands::generate::run(args, &config),
        Commands::Integrate(args) => commands::integrate::run(args, &config),
        Commands::Solve(command) => commands::solve::run(command, &config),
        Commands::Stats { file } => commands::stats::run(file, &config),
        Commands::Check => commands::check::run(&config),
    }
}
