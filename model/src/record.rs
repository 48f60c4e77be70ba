//! FILENAME: model/src/record.rs
//! Input rows and the validated employee record.
//!
//! `RawValue`/`RawRow` mirror whatever shape the external loader produced:
//! every field may be absent, text, or numeric. `EmployeeRecord` is the
//! fixed-field type the rest of the system works with; it is constructed
//! only by `validate` and never mutated afterwards.

use serde::{Deserialize, Serialize};

// ============================================================================
// RAW VALUES
// ============================================================================

/// A loosely-typed field value as produced by a loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl RawValue {
    /// Numeric coercion: numbers pass through, numeric text parses.
    /// Booleans and empty values are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
            RawValue::Empty | RawValue::Boolean(_) => None,
        }
    }

    /// Text coercion: trims text, formats numbers, `None` when empty.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            RawValue::Number(n) => Some(format_number(*n)),
            RawValue::Boolean(b) => Some(b.to_string()),
            RawValue::Empty => None,
        }
    }

    /// Returns true if this value carries no data.
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Empty
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

/// Formats a number as text without a trailing ".0" for whole values.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// ============================================================================
// RAW ROW
// ============================================================================

/// One loosely-typed input row, addressable by field name.
/// Produced by the external loaders; consumed only by `validate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Identifier for the employee (text or numeric).
    pub employee_id: RawValue,

    /// Which subsidiary employs this person. Required.
    pub subsidiary: RawValue,

    /// Job title/category. Optional.
    pub role: RawValue,

    /// Monthly salary figure. Must coerce to a non-negative number.
    pub salary: RawValue,
}

impl RawRow {
    pub fn new(
        employee_id: impl Into<RawValue>,
        subsidiary: impl Into<RawValue>,
        role: impl Into<RawValue>,
        salary: impl Into<RawValue>,
    ) -> Self {
        RawRow {
            employee_id: employee_id.into(),
            subsidiary: subsidiary.into(),
            role: role.into(),
            salary: salary.into(),
        }
    }
}

// ============================================================================
// EMPLOYEE RECORD
// ============================================================================

/// One employee's validated salary observation.
///
/// Invariants (guaranteed by `validate`):
/// - `subsidiary` is non-empty,
/// - `salary` is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier within the dataset.
    pub employee_id: String,

    /// The subsidiary this record belongs to.
    pub subsidiary: String,

    /// Job title/category, when known.
    pub role: Option<String>,

    /// Monthly salary amount, unit consistent across the dataset.
    pub salary: f64,
}

impl EmployeeRecord {
    pub fn new(
        employee_id: impl Into<String>,
        subsidiary: impl Into<String>,
        role: Option<String>,
        salary: f64,
    ) -> Self {
        EmployeeRecord {
            employee_id: employee_id.into(),
            subsidiary: subsidiary.into(),
            role,
            salary,
        }
    }
}
