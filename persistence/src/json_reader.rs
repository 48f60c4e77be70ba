//! FILENAME: persistence/src/json_reader.rs
//! Loader for the nested JSON dataset format.
//!
//! The dataset is a JSON object mapping subsidiary names to arrays of
//! employee objects. An employee either carries a salary figure directly
//! (`salary` or `monthly_salary`) or wage components (`hourly_rate`,
//! `weekly_hours_worked`, `contract_hours`), from which the monthly salary
//! is derived. Values are carried through as loosely-typed `RawValue`s;
//! validation downstream decides what is usable.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde_json::Value;

use model::{RawRow, RawValue, WageProfile};

use crate::PersistenceError;

/// Loads a nested JSON employee dataset into flat raw rows.
pub fn load_json(path: &Path) -> Result<Vec<RawRow>, PersistenceError> {
    let file = File::open(path)?;
    let root: Value = serde_json::from_reader(BufReader::new(file))?;

    let Value::Object(subsidiaries) = root else {
        return Err(PersistenceError::InvalidFormat(
            "expected a top-level object mapping subsidiaries to employee lists".to_string(),
        ));
    };

    let mut rows = Vec::new();

    for (subsidiary, employees) in subsidiaries {
        let Value::Array(employees) = employees else {
            return Err(PersistenceError::InvalidFormat(format!(
                "subsidiary {:?} does not map to an employee list",
                subsidiary
            )));
        };

        for employee in &employees {
            let ordinal = rows.len();
            rows.push(employee_row(&subsidiary, employee, ordinal));
        }
    }

    debug!("loaded {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Builds one raw row from an employee object. Never fails: missing or
/// malformed fields become `RawValue::Empty` and are classified during
/// validation.
fn employee_row(subsidiary: &str, employee: &Value, ordinal: usize) -> RawRow {
    let employee_id = field_text(employee, "name")
        .unwrap_or_else(|| format!("row-{}", ordinal));

    let role = match field_text(employee, "job") {
        Some(job) => RawValue::Text(job),
        None => RawValue::Empty,
    };

    RawRow {
        employee_id: RawValue::Text(employee_id),
        subsidiary: RawValue::Text(subsidiary.to_string()),
        role,
        salary: salary_value(employee),
    }
}

/// Picks the salary for an employee object: a direct figure when present,
/// otherwise derived from wage components.
fn salary_value(employee: &Value) -> RawValue {
    for key in ["salary", "monthly_salary"] {
        match employee.get(key) {
            Some(Value::Number(n)) => {
                return n.as_f64().map(RawValue::Number).unwrap_or(RawValue::Empty);
            }
            Some(Value::String(s)) => return RawValue::Text(s.clone()),
            _ => {}
        }
    }

    let rate = field_number(employee, "hourly_rate");
    let weekly = field_number(employee, "weekly_hours_worked");
    let contract = field_number(employee, "contract_hours");

    match (rate, weekly, contract) {
        (Some(rate), Some(weekly), Some(contract)) => {
            RawValue::Number(WageProfile::new(rate, weekly, contract).monthly_salary())
        }
        _ => RawValue::Empty,
    }
}

fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn field_number(value: &Value, key: &str) -> Option<f64> {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
