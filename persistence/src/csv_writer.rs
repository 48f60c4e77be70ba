//! FILENAME: persistence/src/csv_writer.rs
//! CSV exports: the statistics report and the flat dataset.
//!
//! `write_report_csv` writes the tabular form of a `Report` (one row per
//! group plus the global row); empty groups get blank statistics cells, not
//! zeros. `write_dataset_csv` writes the flat `Company,Employee,Job,Salary`
//! file a dashboard loads back as its input.

use std::path::Path;

use log::debug;

use model::EmployeeRecord;
use stats_engine::{tabular_rows, Report};

use crate::PersistenceError;

/// Writes the report statistics as CSV: one row per (subsidiary[, role])
/// group followed by one row for the global aggregate.
pub fn write_report_csv(path: &Path, report: &Report) -> Result<(), PersistenceError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "Group",
        "Role",
        "Count",
        "Average Salary",
        "Highest Salary",
        "Lowest Salary",
    ])?;

    for row in tabular_rows(report) {
        writer.write_record([
            row.group.clone(),
            row.role.clone().unwrap_or_default(),
            row.count.to_string(),
            format_stat(row.mean),
            format_stat(row.max),
            format_stat(row.min),
        ])?;
    }

    writer.flush()?;
    debug!("wrote report CSV to {:?}", path);
    Ok(())
}

/// Writes the validated records as a flat dataset CSV.
pub fn write_dataset_csv(path: &Path, records: &[EmployeeRecord]) -> Result<(), PersistenceError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Company", "Employee", "Job", "Salary"])?;

    for record in records {
        writer.write_record([
            record.subsidiary.clone(),
            record.employee_id.clone(),
            record.role.clone().unwrap_or_default(),
            format!("{:.2}", record.salary),
        ])?;
    }

    writer.flush()?;
    debug!("wrote {} dataset rows to {:?}", records.len(), path);
    Ok(())
}

/// An absent statistic becomes an empty cell, never a zero.
fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => String::new(),
    }
}
