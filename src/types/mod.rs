//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: ledger entries and amount handling
//! - `totals`: income/expense aggregates
//! - `error`: Error types for the ledger

pub mod error;
pub mod totals;
pub mod transaction;

pub use error::LedgerError;
pub use totals::Totals;
pub use transaction::{
    format_amount, parse_amount, round_amount, Transaction, TransactionType,
};
