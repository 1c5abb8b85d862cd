//! `balance` command: income, expense, and net for every month

use super::CommandHandler;
use crate::core::Ledger;
use crate::io::RecordStore;
use crate::types::{format_amount, LedgerError};
use std::io::Write;

/// Handler for `balance`
///
/// Prints one line per month present in the store, oldest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceHandler;

impl CommandHandler for BalanceHandler {
    fn run(&self, store: &RecordStore, output: &mut dyn Write) -> Result<(), LedgerError> {
        let ledger = Ledger::new(store.load_all()?);

        for (month, totals) in ledger.monthly_totals()? {
            writeln!(
                output,
                "{}: income={}  expense={}  net={}",
                month,
                format_amount(totals.income),
                format_amount(totals.expense),
                format_amount(totals.net()?)
            )?;
        }
        Ok(())
    }
}
