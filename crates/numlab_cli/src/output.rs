//! Output rendering for table, CSV and JSON formats.

use clap::ValueEnum;
use numlab_core::stats::{Histogram, Summary};
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Rows of string cells under a header.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Rows {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.header.len());
        self.rows.push(row);
    }

    /// Box-drawn table with columns padded to their widest cell.
    pub fn to_table(&self) -> String {
        let widths: Vec<usize> = (0..self.header.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(self.header[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!(" {:<width$} ", cell, width = w))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(&self.header));
        out.push_str(&rule("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CliError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| CliError::InvalidArgument(e.to_string()))
    }

    /// Prints as table or CSV; JSON callers serialise their own records.
    pub fn print(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Csv => print!("{}", self.to_csv()?),
            OutputFormat::Table | OutputFormat::Json => print!("{}", self.to_table()),
        }
        Ok(())
    }
}

/// Pretty-prints any serialisable record as JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Formats a float with `precision` decimals, or `n/a` when absent.
pub fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.*}", precision, v))
}

#[derive(Serialize)]
struct SampleReport<'a> {
    summary: &'a Summary,
    histogram: &'a Histogram,
}

/// Prints descriptive statistics and a Sturges histogram of `sample`.
pub fn print_sample_report(sample: &[f64], format: OutputFormat) -> Result<()> {
    let summary = Summary::of(sample).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "need at least two values for statistics, got {}",
            sample.len()
        ))
    })?;
    let histogram = Histogram::sturges(sample).ok_or_else(|| {
        CliError::InvalidArgument("sample has no finite values to bin".to_string())
    })?;

    if format == OutputFormat::Json {
        return print_json(&SampleReport {
            summary: &summary,
            histogram: &histogram,
        });
    }

    summary_rows(&summary).print(format)?;
    if format == OutputFormat::Table {
        println!();
    }
    histogram_rows(&histogram, format == OutputFormat::Table).print(format)
}

fn summary_rows(summary: &Summary) -> Rows {
    let mut rows = Rows::new(&["statistic", "value"]);
    rows.push(vec!["count".into(), summary.count.to_string()]);
    rows.push(vec!["mean".into(), format!("{:.6}", summary.mean)]);
    rows.push(vec!["std_dev".into(), format!("{:.6}", summary.std_dev)]);
    rows.push(vec!["std_error".into(), format!("{:.6}", summary.std_error)]);
    rows.push(vec!["skewness".into(), fmt_opt(summary.skewness, 6)]);
    rows.push(vec!["kurtosis".into(), fmt_opt(summary.kurtosis, 6)]);
    rows
}

const BAR_WIDTH: u64 = 40;

fn histogram_rows(histogram: &Histogram, with_bars: bool) -> Rows {
    let header: &[&str] = if with_bars {
        &["lo", "hi", "count", ""]
    } else {
        &["lo", "hi", "count"]
    };
    let mut rows = Rows::new(header);
    let peak = histogram.counts().iter().copied().max().unwrap_or(0).max(1);

    for (edge, &count) in histogram.edges().windows(2).zip(histogram.counts()) {
        let mut row = vec![
            format!("{:.4}", edge[0]),
            format!("{:.4}", edge[1]),
            count.to_string(),
        ];
        if with_bars {
            row.push("#".repeat((count * BAR_WIDTH / peak) as usize));
        }
        rows.push(row);
    }
    rows
}
