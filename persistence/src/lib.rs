//! FILENAME: persistence/src/lib.rs
//! Salaria Persistence Module
//!
//! Handles loading employee datasets (JSON or flat CSV) and writing CSV
//! exports. Loaders produce loosely-typed `RawRow` values; nothing here
//! decides what is valid - that is the record model's job.

mod csv_reader;
mod csv_writer;
mod error;
mod json_reader;

pub use csv_reader::load_csv;
pub use csv_writer::{write_dataset_csv, write_report_csv};
pub use error::PersistenceError;
pub use json_reader::load_json;
