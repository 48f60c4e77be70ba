//! FILENAME: model/src/lib.rs
//! Salaria Record Model.
//!
//! This crate defines the validated employee-salary record shape shared by
//! the aggregation engine and the IO boundary. It has three layers:
//! - `record`: loosely-typed input rows (what the loaders hand us) and the
//!   validated, immutable `EmployeeRecord`.
//! - `validate`: the ingestion boundary that turns raw rows into records,
//!   classifying defective rows instead of silently coercing them.
//! - `pay`: monthly salary derivation for datasets that carry wage
//!   components (hourly rate / hours worked) instead of a salary figure.

pub mod pay;
pub mod record;
pub mod validate;

pub use pay::WageProfile;
pub use record::{EmployeeRecord, RawRow, RawValue};
pub use validate::{validate, validate_all, ValidationError, ValidationSummary};
