//! Core business logic module
//!
//! This module contains the in-memory ledger operations:
//! - `ledger` - month filtering, overall totals, and per-month grouping

pub mod ledger;

pub use ledger::Ledger;
