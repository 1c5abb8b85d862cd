//! Usage text, shown for `help`, no arguments, or an unknown command

use super::CommandHandler;
use crate::io::RecordStore;
use crate::types::LedgerError;
use std::io::Write;

pub const USAGE: &str = "\
Commands:
  add <type> <category> <amount> [note]
  list [YYYY-MM]
  summary [YYYY-MM]
  balance
Example:
  budget add expense Food 12.50 \"Lunch\"
  budget list 2025-09
";

/// Handler that prints the usage block
///
/// Never touches the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn run(&self, _store: &RecordStore, output: &mut dyn Write) -> Result<(), LedgerError> {
        output.write_all(USAGE.as_bytes())?;
        Ok(())
    }

    fn uses_store(&self) -> bool {
        false
    }
}
