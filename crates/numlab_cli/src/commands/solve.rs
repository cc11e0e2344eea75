//! Solve command implementation
//!
//! Locates a root by bisection or an extremum by golden-section search on a
//! catalogue function.

use clap::{Args, Subcommand};
use numlab_core::math::solvers::{BisectionSolver, GoldenSectionSolver, SearchConfig};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::functions::FunctionKind;
use crate::output::{print_json, OutputFormat, Rows};
use crate::{CliError, Result};

/// Interval and function shared by both searches
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Function to search
    #[arg(value_enum)]
    pub function: FunctionKind,

    /// Left end of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Right end of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Interval width at which the search stops (overrides the configured precision)
    #[arg(short, long)]
    pub precision: Option<f64>,
}

/// Search to run
#[derive(Debug, Clone, Subcommand)]
pub enum SolveCommand {
    /// Find a root by bisection; the interval must bracket a sign change
    Root(SearchArgs),

    /// Find a minimum (or maximum) by golden-section search
    Extremum {
        #[command(flatten)]
        search: SearchArgs,

        /// Search for a maximum instead of a minimum
        #[arg(long)]
        maximum: bool,
    },
}

/// Located point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub search: &'static str,
    pub function: FunctionKind,
    pub x: f64,
    pub f_x: f64,
    pub precision: f64,
}

/// Run the solve command
pub fn run(command: &SolveCommand, config: &CliConfig) -> Result<()> {
    let solution = solve(command, config)?;
    info!(search = solution.search, x = solution.x, "search finished");

    match config.format {
        OutputFormat::Json => print_json(&solution),
        format => {
            let mut rows = Rows::new(&["search", "function", "x", "f(x)", "precision"]);
            rows.push(vec![
                solution.search.to_string(),
                solution.function.to_string(),
                format!("{:.10}", solution.x),
                format!("{:.6e}", solution.f_x),
                format!("{:e}", solution.precision),
            ]);
            rows.print(format)
        }
    }
}

/// Runs the requested search.
pub fn solve(command: &SolveCommand, config: &CliConfig) -> Result<Solution> {
    let (search, args) = match command {
        SolveCommand::Root(args) => ("root", args),
        SolveCommand::Extremum { search, maximum } => {
            (if *maximum { "maximum" } else { "minimum" }, search)
        }
    };

    if !(args.x_max > args.x_min) {
        return Err(CliError::InvalidArgument(format!(
            "x_max ({}) must be greater than x_min ({})",
            args.x_max, args.x_min
        )));
    }
    let precision = args.precision.unwrap_or(config.precision);
    let search_config = SearchConfig::try_new(precision, SearchConfig::<f64>::default().max_iterations)?;

    let f = |x: f64| args.function.eval(x);
    let x = match command {
        SolveCommand::Root(_) => {
            BisectionSolver::new(search_config).find_root_bracketed(f, args.x_min, args.x_max)?
        }
        SolveCommand::Extremum { maximum, .. } => GoldenSectionSolver::new(search_config)
            .find_extremum(f, args.x_min, args.x_max, !*maximum)?,
    };

    Ok(Solution {
        search,
        function: args.function,
        x,
        f_x: f(x),
        precision,
    })
}
