//! Command handlers for the ledger CLI
//!
//! This module defines the handler trait every command implements, the
//! factory that maps a parsed [`Command`] to its handler, and the dispatch
//! entry point used by the binary.
//!
//! Handlers write their human-readable output to the provided writer rather
//! than straight to stdout, which keeps them testable.

use crate::cli::Command;
use crate::config::LedgerConfig;
use crate::io::RecordStore;
use crate::types::LedgerError;
use log::debug;
use std::io::Write;

pub mod add;
pub mod balance;
pub mod help;
pub mod list;
pub mod summary;

pub use add::AddHandler;
pub use balance::BalanceHandler;
pub use help::HelpHandler;
pub use list::ListHandler;
pub use summary::SummaryHandler;

/// One unit of work behind a CLI command
pub trait CommandHandler {
    /// Run the command against an initialized store
    ///
    /// # Errors
    ///
    /// Returns fatal errors only (I/O failures, corrupt store rows). Invalid
    /// user input is reported as a message on `output` instead.
    fn run(&self, store: &RecordStore, output: &mut dyn Write) -> Result<(), LedgerError>;

    /// Whether the store must exist before [`CommandHandler::run`] is called
    fn uses_store(&self) -> bool {
        true
    }
}

/// Create the handler for a parsed command
pub fn create_handler(command: Command) -> Box<dyn CommandHandler> {
    match command {
        Command::Add {
            tx_type,
            category,
            amount,
            note,
            ..
        } => Box::new(AddHandler::new(tx_type, category, amount, note)),
        Command::List { month, .. } => Box::new(ListHandler::new(month)),
        Command::Summary { month, .. } => Box::new(SummaryHandler::new(month)),
        Command::Balance { .. } => Box::new(BalanceHandler),
        Command::Help => Box::new(HelpHandler),
    }
}

/// Run one command to completion
///
/// Initializes the store first unless the command never touches it (help).
pub fn dispatch(
    command: Command,
    config: &LedgerConfig,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    debug!("dispatching {:?}", command);
    let handler = create_handler(command);
    let store = RecordStore::new(&config.store_path);

    if handler.uses_store() {
        store.ensure_initialized()?;
    }
    handler.run(&store, output)
}

/// Shared helpers for handler tests
#[cfg(test)]
pub(crate) mod test_support {
    use crate::io::RecordStore;
    use std::fs;
    use tempfile::TempDir;

    pub const HEADER_LINE: &str = "date,type,category,amount,note\n";

    /// Create an initialized store holding the given data lines
    pub fn store_with(lines: &[&str]) -> (TempDir, RecordStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = RecordStore::new(dir.path().join("transactions.csv"));
        let mut content = HEADER_LINE.to_string();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(store.path(), content).expect("Failed to write store");
        (dir, store)
    }

    /// Run a handler and capture its output as a string
    pub fn run_to_string(
        handler: &dyn super::CommandHandler,
        store: &RecordStore,
    ) -> Result<String, crate::types::LedgerError> {
        let mut output = Vec::new();
        handler.run(store, &mut output)?;
        Ok(String::from_utf8(output).expect("handler output is UTF-8"))
    }
}
