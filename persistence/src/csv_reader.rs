//! FILENAME: persistence/src/csv_reader.rs
//! Loader for flat CSV datasets.
//!
//! Expects a header row. Column names are matched case-insensitively and
//! both the export spellings (`Company`, `Employee`, `Job`, `Salary`) and
//! the model spellings (`subsidiary`, `employee_id`, `role`, `salary`) are
//! accepted. Salary cells are carried as text; validation parses them.

use std::path::Path;

use log::debug;

use model::{RawRow, RawValue};

use crate::PersistenceError;

/// Column positions resolved from the header row.
struct ColumnMap {
    employee_id: Option<usize>,
    subsidiary: usize,
    role: Option<usize>,
    salary: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, PersistenceError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };

        let subsidiary = find(&["company", "subsidiary"]).ok_or_else(|| {
            PersistenceError::InvalidFormat("no Company/subsidiary column in header".to_string())
        })?;
        let salary = find(&["salary", "monthly salary", "monthly_salary"]).ok_or_else(|| {
            PersistenceError::InvalidFormat("no Salary column in header".to_string())
        })?;

        Ok(ColumnMap {
            employee_id: find(&["employee", "employee_id", "name"]),
            subsidiary,
            role: find(&["job", "role", "job title"]),
            salary,
        })
    }
}

/// Loads a flat CSV dataset into raw rows.
pub fn load_csv(path: &Path) -> Result<Vec<RawRow>, PersistenceError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut rows = Vec::new();

    for (ordinal, result) in reader.records().enumerate() {
        let record = result?;

        let cell = |index: Option<usize>| match index.and_then(|i| record.get(i)) {
            Some(text) if !text.trim().is_empty() => RawValue::Text(text.trim().to_string()),
            _ => RawValue::Empty,
        };

        let employee_id = match cell(columns.employee_id) {
            RawValue::Empty => RawValue::Text(format!("row-{}", ordinal)),
            id => id,
        };

        rows.push(RawRow {
            employee_id,
            subsidiary: cell(Some(columns.subsidiary)),
            role: cell(columns.role),
            salary: cell(Some(columns.salary)),
        });
    }

    debug!("loaded {} rows from {:?}", rows.len(), path);
    Ok(rows)
}
