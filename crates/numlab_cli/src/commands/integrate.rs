//! Integrate command implementation
//!
//! Estimates the integral of a catalogue function with the hit-or-miss and
//! crude Monte Carlo integrators.

use clap::{Args, ValueEnum};
use numlab_core::integration::{
    CrudeMonteCarloIntegrator, HitOrMissIntegrator, IntegralResult, IntegrationConfig,
};
use numlab_core::rng::UniformSource;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::functions::FunctionKind;
use crate::output::{print_json, OutputFormat, Rows};
use crate::{CliError, Result};

/// Integration method selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Method {
    HitOrMiss,
    Crude,
    #[default]
    Both,
}

/// Arguments of `numlab integrate`
#[derive(Debug, Clone, Args)]
pub struct IntegrateArgs {
    /// Integrand
    #[arg(value_enum)]
    pub function: FunctionKind,

    /// Lower integration limit
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Upper integration limit
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Box height for hit-or-miss (defaults to the maximum of f on the interval)
    #[arg(long)]
    pub y_max: Option<f64>,

    /// Estimator to run
    #[arg(short, long, value_enum, default_value = "both")]
    pub method: Method,

    /// Number of events (overrides the configured n_evt)
    #[arg(long)]
    pub n_evt: Option<usize>,

    /// Seed (overrides the configured seed)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// One estimate as reported
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub method: &'static str,
    #[serde(flatten)]
    pub result: IntegralResult,
}

/// Run the integrate command
pub fn run(args: &IntegrateArgs, config: &CliConfig) -> Result<()> {
    info!(
        function = %args.function,
        x_min = args.x_min,
        x_max = args.x_max,
        method = ?args.method,
        "integrating"
    );

    let mut source = UniformSource::from_entropy();
    let estimates = estimate(&mut source, args, config)?;

    match config.format {
        OutputFormat::Json => print_json(&estimates),
        format => {
            let mut rows = Rows::new(&["method", "estimate", "uncertainty", "relative"]);
            for e in &estimates {
                rows.push(vec![
                    e.method.to_string(),
                    format!("{:.6}", e.result.estimate),
                    format!("{:.6}", e.result.uncertainty),
                    format!("{:.3e}", e.result.relative_uncertainty()),
                ]);
            }
            rows.print(format)
        }
    }
}

/// Runs the selected estimators with a shared configuration.
pub fn estimate(
    source: &mut UniformSource,
    args: &IntegrateArgs,
    config: &CliConfig,
) -> Result<Vec<Estimate>> {
    if !(args.x_max > args.x_min) {
        return Err(CliError::InvalidArgument(format!(
            "x_max ({}) must be greater than x_min ({})",
            args.x_max, args.x_min
        )));
    }

    let integration = IntegrationConfig::builder()
        .n_evt(args.n_evt.unwrap_or(config.n_evt))
        .maybe_seed(args.seed.or(config.seed))
        .build()?;
    let f = |x: f64| args.function.eval(x);
    let mut estimates = Vec::with_capacity(2);

    if matches!(args.method, Method::HitOrMiss | Method::Both) {
        let y_max = args
            .y_max
            .unwrap_or_else(|| args.function.upper_bound(args.x_min, args.x_max));
        if !(y_max > 0.0) {
            return Err(CliError::InvalidArgument(format!(
                "hit-or-miss needs a positive box height, got y_max = {}",
                y_max
            )));
        }
        estimates.push(Estimate {
            method: "hit-or-miss",
            result: HitOrMissIntegrator::new(integration).integrate(
                source,
                f,
                args.x_min,
                args.x_max,
                y_max,
            ),
        });
    }

    if matches!(args.method, Method::Crude | Method::Both) {
        estimates.push(Estimate {
            method: "crude",
            result: CrudeMonteCarloIntegrator::new(integration).integrate(
                source,
                f,
                args.x_min,
                args.x_max,
            ),
        });
    }

    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: IntegrateArgs,
    }

    fn run_estimate(argv: &[&str]) -> Result<Vec<Estimate>> {
        let mut full = vec!["integrate"];
        full.extend_from_slice(argv);
        let args = TestCli::parse_from(full).args;
        let mut source = UniformSource::from_seed(0);
        estimate(&mut source, &args, &CliConfig::default())
    }

    #[test]
    fn test_both_methods_estimate_linear_integral() {
        let estimates = run_estimate(&[
            "linear", "--x-min", "0", "--x-max", "10", "--n-evt", "200000", "--seed", "3",
        ])
        .unwrap();

        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates[0].method, "hit-or-miss");
        assert_eq!(estimates[1].method, "crude");
        for e in &estimates {
            assert_abs_diff_eq!(e.result.estimate, 50.0, epsilon = 0.6);
        }
        assert!(estimates[1].result.uncertainty < estimates[0].result.uncertainty);
    }

    #[test]
    fn test_single_method() {
        let estimates = run_estimate(&[
            "gaussian", "--x-min", "-1", "--x-max", "1", "-m", "crude", "--n-evt", "1000",
        ])
        .unwrap();
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].method, "crude");
    }

    #[test]
    fn test_seeded_estimates_are_reproducible() {
        let argv = ["sine", "--x-min", "0", "--x-max", "3", "--n-evt", "5000", "-s", "9"];
        assert_eq!(run_estimate(&argv).unwrap(), run_estimate(&argv).unwrap());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(run_estimate(&["linear", "--x-min", "1", "--x-max", "0"]).is_err());
        assert!(matches!(
            run_estimate(&["linear", "--x-min", "0", "--x-max", "1", "--n-evt", "0"]),
            Err(CliError::Parameter(_))
        ));
        // cubic is negative on [0, 1]
        assert!(run_estimate(&["cubic", "--x-min", "0", "--x-max", "1", "-m", "hit-or-miss"]).is_err());
    }

    #[test]
    fn test_estimate_serialises_flat() {
        let e = Estimate {
            method: "crude",
            result: IntegralResult::new(1.5, 0.25),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["method"], "crude");
        assert_eq!(json["estimate"], 1.5);
        assert_eq!(json["uncertainty"], 0.25);
    }
}
