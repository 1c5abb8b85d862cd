//! Budget Tracker Library
//! # Overview
//!
//! This library provides a small personal finance ledger: dated income and
//! expense entries appended to a flat text file, with monthly and overall
//! summaries derived on demand.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Totals, errors)
//! - [`io`] - Store file format and access:
//!   - [`io::csv_format`] - Line serialization and parsing
//!   - [`io::store`] - Header initialization, append, and load
//! - [`core`] - In-memory aggregation ([`core::Ledger`])
//! - [`commands`] - One handler per CLI command plus dispatch
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Store location
//!
//! # Store Format
//!
//! ```text
//! date,type,category,amount,note
//! 2025-09-05,expense,Groceries,85.30,
//! 2025-09-05,income,Salary,2500.00,Paycheck
//! ```
//!
//! The header is always the first line. Each following line holds one entry;
//! commas in notes are replaced by spaces so every line has five fields.
//!
//! # Commands
//!
//! - **add**: Append an entry dated today
//! - **list**: Print entries as a table, optionally for one month
//! - **summary**: Print income, expense, and net totals
//! - **balance**: Print income, expense, and net per month

// Module declarations
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use commands::{dispatch, CommandHandler};
pub use config::LedgerConfig;
pub use crate::core::Ledger;
pub use io::RecordStore;
pub use types::{LedgerError, Totals, Transaction, TransactionType};
