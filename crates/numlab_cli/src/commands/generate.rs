//! Generate command implementation
//!
//! Draws a sample from one of the variate generators and prints it, or its
//! summary statistics and histogram.

use clap::{Args, ValueEnum};
use numlab_core::rng::UniformSource;
use numlab_core::variates::{
    clt_mean_sigma_sequence, clt_min_max_sequence, exponential_inverse, poisson_inverse,
    try_rejection_box, SamplingBox,
};
use tracing::info;

use crate::config::CliConfig;
use crate::functions::FunctionKind;
use crate::output::{print_json, print_sample_report, OutputFormat, Rows};
use crate::{CliError, Result};

/// Candidate points tried per accepted rejection sample before giving up
const MAX_REJECTION_ATTEMPTS: usize = 1_000_000;

/// Variate generator selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariateKind {
    /// Uniform on [0, 1)
    Uniform,
    /// Uniform on [lo, hi)
    Range,
    /// Approximate normal with given mean and sigma
    CltMeanSigma,
    /// Approximate normal centred on [lo, hi)
    CltMinMax,
    /// Exponential decay times with mean t0
    Exponential,
    /// Poisson counts with expectation lambda
    Poisson,
    /// Acceptance-rejection from a catalogue density on [lo, hi]
    Rejection,
}

/// Arguments of `numlab generate`
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Generator to sample from
    #[arg(value_enum)]
    pub kind: VariateKind,

    /// Number of values to draw
    #[arg(short, long, default_value = "1000")]
    pub n: usize,

    /// Seed (overrides the configured seed)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Lower bound for range, clt-min-max and rejection
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub lo: f64,

    /// Upper bound for range, clt-min-max and rejection
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub hi: f64,

    /// Mean for clt-mean-sigma
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub mean: f64,

    /// Standard deviation for clt-mean-sigma
    #[arg(long, default_value = "1.0")]
    pub sigma: f64,

    /// Uniforms averaged per CLT value (overrides the configured n_sum)
    #[arg(long)]
    pub n_sum: Option<usize>,

    /// Mean lifetime for exponential
    #[arg(long, default_value = "1.0")]
    pub t0: f64,

    /// Expectation for poisson
    #[arg(long, default_value = "1.0")]
    pub lambda: f64,

    /// Density for rejection
    #[arg(short, long, value_enum, default_value = "sine")]
    pub function: FunctionKind,

    /// Box height for rejection (defaults to the density maximum on [lo, hi])
    #[arg(long)]
    pub y_max: Option<f64>,

    /// Print statistics and a histogram instead of the values
    #[arg(long)]
    pub summary: bool,
}

/// Run the generate command
pub fn run(args: &GenerateArgs, config: &CliConfig) -> Result<()> {
    let seed = args.seed.or(config.seed);
    info!(kind = ?args.kind, n = args.n, ?seed, "generating sample");

    let mut source = UniformSource::from_entropy();
    let sample = sample(&mut source, args, config)?;

    if args.summary {
        return print_sample_report(&sample, config.format);
    }

    match config.format {
        OutputFormat::Json => print_json(&sample),
        format => {
            let mut rows = Rows::new(&["i", "value"]);
            for (i, x) in sample.iter().enumerate() {
                rows.push(vec![i.to_string(), x.to_string()]);
            }
            rows.print(format)
        }
    }
}

/// Draws the sample described by `args`; Poisson counts are widened to `f64`.
pub fn sample(source: &mut UniformSource, args: &GenerateArgs, config: &CliConfig) -> Result<Vec<f64>> {
    let seed = args.seed.or(config.seed);
    let n_sum = args.n_sum.unwrap_or(config.n_sum);
    if n_sum == 0 {
        return Err(CliError::InvalidArgument("n_sum must be at least 1".to_string()));
    }

    let needs_interval = matches!(
        args.kind,
        VariateKind::Range | VariateKind::CltMinMax | VariateKind::Rejection
    );
    if needs_interval && !(args.hi > args.lo) {
        return Err(CliError::InvalidArgument(format!(
            "hi ({}) must be greater than lo ({})",
            args.hi, args.lo
        )));
    }

    let values = match args.kind {
        VariateKind::Uniform => source.uniform01(args.n, seed),
        VariateKind::Range => source.uniform_range_sequence(args.lo, args.hi, args.n, seed),
        VariateKind::CltMeanSigma => {
            clt_mean_sigma_sequence(source, args.mean, args.sigma, args.n, n_sum, seed)
        }
        VariateKind::CltMinMax => {
            clt_min_max_sequence(source, args.lo, args.hi, args.n, n_sum, seed)
        }
        VariateKind::Exponential => {
            positive("t0", args.t0)?;
            exponential_inverse(source, args.t0, args.n, seed)
        }
        VariateKind::Poisson => {
            positive("lambda", args.lambda)?;
            poisson_inverse(source, args.lambda, args.n, seed)
                .into_iter()
                .map(|k| k as f64)
                .collect()
        }
        VariateKind::Rejection => {
            let function = args.function;
            let y_max = args
                .y_max
                .unwrap_or_else(|| function.upper_bound(args.lo, args.hi));
            positive("y_max", y_max)?;

            let bounds = SamplingBox::with_zero_floor(args.lo, args.hi, y_max);
            source.apply_seed(seed);
            (0..args.n)
                .map(|_| {
                    try_rejection_box(source, |x| function.eval(x), bounds, MAX_REJECTION_ATTEMPTS, None)
                })
                .collect::<std::result::Result<Vec<f64>, _>>()?
        }
    };

    Ok(values)
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CliError::InvalidArgument(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["generate"];
        full.extend_from_slice(argv);
        TestCli::parse_from(full).args
    }

    fn draw(argv: &[&str]) -> Result<Vec<f64>> {
        let mut source = UniformSource::from_seed(0);
        sample(&mut source, &parse(argv), &CliConfig::default())
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["uniform"]);
        assert_eq!(args.kind, VariateKind::Uniform);
        assert_eq!(args.n, 1000);
        assert_eq!(args.seed, None);
        assert_eq!(args.function, FunctionKind::Sine);
        assert!(!args.summary);
    }

    #[test]
    fn test_seeded_sample_is_reproducible() {
        for kind in [
            "uniform",
            "range",
            "clt-mean-sigma",
            "clt-min-max",
            "exponential",
            "poisson",
            "rejection",
        ] {
            let a = draw(&[kind, "-n", "20", "--seed", "5", "--hi", "3.0"]).unwrap();
            let b = draw(&[kind, "-n", "20", "--seed", "5", "--hi", "3.0"]).unwrap();
            assert_eq!(a.len(), 20);
            assert_eq!(a, b, "{}", kind);
        }
    }

    #[test]
    fn test_configured_seed_used_when_flag_absent() {
        let config = CliConfig {
            seed: Some(11),
            ..Default::default()
        };
        let args = parse(&["range", "-n", "5"]);
        let mut a = UniformSource::from_seed(1);
        let mut b = UniformSource::from_seed(2);
        assert_eq!(
            sample(&mut a, &args, &config).unwrap(),
            sample(&mut b, &args, &config).unwrap()
        );
    }

    #[test]
    fn test_range_respects_bounds() {
        let values = draw(&["range", "-n", "200", "--lo", "-2.0", "--hi", "-1.0"]).unwrap();
        assert!(values.iter().all(|&x| (-2.0..-1.0).contains(&x)));
    }

    #[test]
    fn test_rejection_stays_in_interval() {
        let values = draw(&["rejection", "-n", "200", "--hi", "3.0", "-f", "gaussian"]).unwrap();
        assert!(values.iter().all(|&x| (0.0..=3.0).contains(&x)));
    }

    #[test]
    fn test_poisson_values_are_counts() {
        let values = draw(&["poisson", "-n", "100", "--lambda", "3.0"]).unwrap();
        assert!(values.iter().all(|&k| k >= 0.0 && k.fract() == 0.0));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(draw(&["range", "--lo", "2.0", "--hi", "1.0"]).is_err());
        assert!(draw(&["exponential", "--t0", "0.0"]).is_err());
        assert!(draw(&["poisson", "--lambda", "-1.0"]).is_err());
        assert!(draw(&["clt-mean-sigma", "--n-sum", "0"]).is_err());
        // cubic is negative on [0, 1]
        assert!(draw(&["rejection", "-f", "cubic"]).is_err());
    }
}
