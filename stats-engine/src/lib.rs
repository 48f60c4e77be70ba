//! FILENAME: stats-engine/src/lib.rs
//! Salary aggregation engine for Salaria.
//!
//! This crate turns a sequence of validated employee records into salary
//! statistics (count, mean, max, min), globally and per subsidiary (and
//! optionally per subsidiary x role), and composes them into an immutable,
//! deterministic `Report` any presentation layer can consume.
//!
//! Layers:
//! - `definition`: Serializable configuration (grouping modes, report
//!   options, record filters)
//! - `accumulator`: Per-group running statistics (HOW we compute)
//! - `engine`: Single-pass grouping and aggregation
//! - `report`: Report assembly with consistency checks
//! - `view`: Console- and table-ready projections of a report

pub mod accumulator;
pub mod definition;
pub mod engine;
pub mod report;
pub mod view;

pub use accumulator::{SalaryAccumulator, SalarySummary};
pub use definition::{GroupBy, GroupKey, RecordFilter, ReportOptions};
pub use engine::{aggregate, StatisticsResult};
pub use report::{assemble, assemble_filtered, Report, ReportError};
pub use view::{console_lines, tabular_rows, ReportRow};
