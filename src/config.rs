//! Ledger configuration
//!
//! The binary always runs against `transactions.csv` in the working
//! directory. The library takes the path from here so tests and embedders can
//! point it elsewhere.

use std::path::PathBuf;

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "transactions.csv";

/// Runtime configuration for a ledger invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Path of the store file
    pub store_path: PathBuf,
}

impl LedgerConfig {
    /// Create a configuration for a store at the given path
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        LedgerConfig {
            store_path: store_path.into(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig::new(DEFAULT_STORE_PATH)
    }
}
