//! Stats command implementation
//!
//! Reads a whitespace-delimited numeric text file and prints its descriptive
//! statistics and histogram.

use std::path::Path;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::print_sample_report;
use crate::{CliError, Result};

/// Run the stats command
pub fn run(file: &str, config: &CliConfig) -> Result<()> {
    info!("Reading sample from {}", file);

    let path = Path::new(file);
    if !path.exists() {
        return Err(CliError::FileNotFound(file.to_string()));
    }

    let sample = parse_sample(&std::fs::read_to_string(path)?)?;
    debug!(count = sample.len(), "sample parsed");
    print_sample_report(&sample, config.format)
}

/// Parses numbers separated by whitespace or newlines.
///
/// Lines starting with `#` are comments.
pub fn parse_sample(text: &str) -> Result<Vec<f64>> {
    let mut sample = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| CliError::Parse {
                line: index + 1,
                token: token.to_string(),
            })?;
            sample.push(value);
        }
    }
    Ok(sample)
}
