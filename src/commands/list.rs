//! `list` command: print entries as a fixed-width table

use super::CommandHandler;
use crate::core::Ledger;
use crate::io::csv_format::DATE_FORMAT;
use crate::io::RecordStore;
use crate::types::LedgerError;
use std::io::Write;

/// Width of the dash line under the table header
const SEPARATOR_WIDTH: usize = 63;

/// Handler for `list [YYYY-MM]`
#[derive(Debug, Clone, Default)]
pub struct ListHandler {
    month: Option<String>,
}

impl ListHandler {
    pub fn new(month: Option<String>) -> Self {
        ListHandler { month }
    }
}

fn write_row(
    output: &mut dyn Write,
    date: &str,
    tx_type: &str,
    category: &str,
    amount: &str,
    note: &str,
) -> std::io::Result<()> {
    writeln!(
        output,
        "{:<10} {:<7} {:<12} {:<10} {}",
        date, tx_type, category, amount, note
    )
}

impl CommandHandler for ListHandler {
    fn run(&self, store: &RecordStore, output: &mut dyn Write) -> Result<(), LedgerError> {
        let ledger = Ledger::new(store.load_all()?).in_month(self.month.as_deref());

        write_row(output, "Date", "Type", "Category", "Amount", "Note")?;
        writeln!(output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for tx in ledger.transactions() {
            write_row(
                output,
                &tx.date.format(DATE_FORMAT).to_string(),
                tx.tx_type.as_str(),
                &tx.category,
                &tx.signed_display_amount(),
                &tx.note,
            )?;
        }
        writeln!(output, "{} transactions shown", ledger.len())?;
        Ok(())
    }
}
