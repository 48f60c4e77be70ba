//! FILENAME: model/src/validate.rs
//! The ingestion boundary: raw rows in, validated records out.
//!
//! Validation is pure and per-row. A defective row is classified, not
//! coerced: a missing subsidiary drops the row (it cannot be grouped), a
//! bad salary drops the row from statistics, and both are tallied so the
//! caller can report exclusion counts alongside the results.

use thiserror::Error;

use crate::record::{EmployeeRecord, RawRow};

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// Per-row data-quality error. Never fatal: the row is excluded and tallied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("row has no subsidiary")]
    MissingSubsidiary,

    #[error("invalid salary: {0}")]
    InvalidSalary(String),
}

/// Exclusion tallies for one validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Rows that produced a valid record.
    pub valid: usize,

    /// Rows excluded for a non-numeric, non-finite, or negative salary.
    pub invalid_salary: usize,

    /// Rows excluded because no subsidiary was present.
    pub missing_subsidiary: usize,
}

impl ValidationSummary {
    /// Total number of excluded rows.
    pub fn excluded(&self) -> usize {
        self.invalid_salary + self.missing_subsidiary
    }

    /// Total number of rows seen.
    pub fn total(&self) -> usize {
        self.valid + self.excluded()
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validates one raw row into an `EmployeeRecord`.
///
/// Rules:
/// - `subsidiary` must be present and non-empty, otherwise `MissingSubsidiary`.
/// - `salary` must coerce to a finite, non-negative number, otherwise
///   `InvalidSalary`.
/// - `employee_id` falls back to the empty string when absent; uniqueness is
///   the loader's concern.
pub fn validate(row: &RawRow) -> Result<EmployeeRecord, ValidationError> {
    let subsidiary = row
        .subsidiary
        .as_text()
        .ok_or(ValidationError::MissingSubsidiary)?;

    let salary = row
        .salary
        .as_number()
        .ok_or_else(|| ValidationError::InvalidSalary(describe_salary(row)))?;

    if !salary.is_finite() || salary < 0.0 {
        return Err(ValidationError::InvalidSalary(describe_salary(row)));
    }

    Ok(EmployeeRecord {
        employee_id: row.employee_id.as_text().unwrap_or_default(),
        subsidiary,
        role: row.role.as_text(),
        salary,
    })
}

/// Validates a batch of rows, recovering locally from per-row errors.
/// Returns the surviving records plus exclusion tallies.
pub fn validate_all<'a, I>(rows: I) -> (Vec<EmployeeRecord>, ValidationSummary)
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut records = Vec::new();
    let mut summary = ValidationSummary::default();

    for row in rows {
        match validate(row) {
            Ok(record) => {
                summary.valid += 1;
                records.push(record);
            }
            Err(ValidationError::MissingSubsidiary) => {
                summary.missing_subsidiary += 1;
            }
            Err(ValidationError::InvalidSalary(_)) => {
                summary.invalid_salary += 1;
            }
        }
    }

    (records, summary)
}

/// Human-readable description of a row's salary field for error messages.
fn describe_salary(row: &RawRow) -> String {
    match row.salary.as_text() {
        Some(text) => text,
        None => "(empty)".to_string(),
    }
}
