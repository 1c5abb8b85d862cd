//! I/O module
//!
//! Handles the ledger file and its line format.
//!
//! # Components
//!
//! - `csv_format` - Store format handling (record conversion, serialization)
//! - `store` - File-backed record store (initialize, append, load)

pub mod csv_format;
pub mod store;

pub use csv_format::{convert_csv_record, to_csv_line, CsvRecord};
pub use store::RecordStore;
