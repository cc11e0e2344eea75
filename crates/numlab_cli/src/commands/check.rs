//! Check command implementation
//!
//! Prints the version and the effective configuration after file,
//! environment and flag overrides.

use serde::Serialize;

use crate::config::CliConfig;
use crate::output::{print_json, OutputFormat, Rows};
use crate::Result;

#[derive(Serialize)]
struct CheckReport<'a> {
    version: &'static str,
    config: &'a CliConfig,
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if config.format == OutputFormat::Json {
        return print_json(&CheckReport { version, config });
    }

    let mut rows = Rows::new(&["setting", "value"]);
    rows.push(vec!["version".into(), version.to_string()]);
    rows.push(vec!["log_level".into(), config.log_level.to_string()]);
    rows.push(vec![
        "seed".into(),
        config.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
    ]);
    rows.push(vec!["n_evt".into(), config.n_evt.to_string()]);
    rows.push(vec!["n_sum".into(), config.n_sum.to_string()]);
    rows.push(vec!["precision".into(), format!("{:e}", config.precision)]);
    rows.push(vec!["format".into(), config.format.to_string()]);
    rows.print(config.format)
}
