//! FILENAME: cli/src/main.rs
//! Console adapter for the salary statistics engine.
//!
//! Pipeline: load -> validate -> filter -> assemble -> print/export. The
//! binary owns argument parsing and logging setup; all computation lives in
//! the library crates.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, warn};

use model::{validate_all, RawRow, ValidationSummary};
use persistence::{load_csv, load_json, write_dataset_csv, write_report_csv};
use stats_engine::{assemble_filtered, console_lines, RecordFilter, Report, ReportOptions};

/// Salary statistics for a multi-subsidiary company.
#[derive(Parser)]
#[command(name = "salaria")]
#[command(about = "Compute salary statistics per subsidiary and company-wide", long_about = None)]
struct Cli {
    /// Employee dataset (JSON or CSV)
    input: PathBuf,

    /// Input format (inferred from the file extension when omitted)
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Include the per-(subsidiary, role) breakdown
    #[arg(long)]
    roles: bool,

    /// Fail instead of printing an all-empty report
    #[arg(long)]
    require_non_empty: bool,

    /// Canonical subsidiary order; listed subsidiaries appear even with no data
    #[arg(long = "subsidiary-order", value_delimiter = ',')]
    subsidiary_order: Option<Vec<String>>,

    /// Restrict to these subsidiaries (repeatable)
    #[arg(long = "subsidiary")]
    subsidiaries: Vec<String>,

    /// Restrict to these roles (repeatable)
    #[arg(long = "role")]
    role_filter: Vec<String>,

    /// Keep only salaries >= this value
    #[arg(long)]
    min_salary: Option<f64>,

    /// Keep only salaries <= this value
    #[arg(long)]
    max_salary: Option<f64>,

    /// Write the statistics report as CSV
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write the validated records as a flat dataset CSV
    #[arg(long)]
    dataset_out: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    let rows = load_rows(&cli)?;
    debug!("loaded {} raw rows", rows.len());

    let (records, summary) = validate_all(&rows);
    if summary.excluded() > 0 {
        warn!(
            "{} of {} rows excluded ({} invalid salary, {} missing subsidiary)",
            summary.excluded(),
            summary.total(),
            summary.invalid_salary,
            summary.missing_subsidiary
        );
    }

    let filter = RecordFilter {
        subsidiaries: non_empty(cli.subsidiaries.clone()),
        roles: non_empty(cli.role_filter.clone()),
        min_salary: cli.min_salary,
        max_salary: cli.max_salary,
    };

    let options = ReportOptions {
        include_roles: cli.roles,
        require_non_empty: cli.require_non_empty,
        subsidiary_order: cli.subsidiary_order.clone(),
    };

    let report = assemble_filtered(&records, |r| filter.matches(r), &options)
        .context("aggregation failed")?;

    print_report(&report, &summary);

    if let Some(path) = &cli.export {
        write_report_csv(path, &report)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    if let Some(path) = &cli.dataset_out {
        write_dataset_csv(path, &records)
            .with_context(|| format!("failed to write dataset to {}", path.display()))?;
        println!("Dataset written to {}", path.display());
    }

    Ok(())
}

/// Loads raw rows, inferring the format from the extension unless forced.
fn load_rows(cli: &Cli) -> Result<Vec<RawRow>> {
    let format = match cli.format {
        Some(format) => format,
        None => infer_format(&cli.input)?,
    };

    let rows = match format {
        InputFormat::Json => load_json(&cli.input),
        InputFormat::Csv => load_csv(&cli.input),
    }
    .with_context(|| format!("failed to load {}", cli.input.display()))?;

    Ok(rows)
}

fn infer_format(path: &Path) -> Result<InputFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(InputFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(InputFormat::Csv),
        _ => bail!(
            "cannot infer format of {} - pass --format json|csv",
            path.display()
        ),
    }
}

fn print_report(report: &Report, summary: &ValidationSummary) {
    for line in console_lines(report) {
        println!("{}", line);
    }

    if summary.excluded() > 0 {
        println!();
        println!(
            "Data quality: {} row(s) excluded ({} invalid salary, {} missing subsidiary)",
            summary.excluded(),
            summary.invalid_salary,
            summary.missing_subsidiary
        );
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
