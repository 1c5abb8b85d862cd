//! `summary` command: income, expense, and net for all months or one month

use super::CommandHandler;
use crate::core::Ledger;
use crate::io::RecordStore;
use crate::types::{format_amount, LedgerError};
use std::io::Write;

/// Handler for `summary [YYYY-MM]`
#[derive(Debug, Clone, Default)]
pub struct SummaryHandler {
    month: Option<String>,
}

impl SummaryHandler {
    pub fn new(month: Option<String>) -> Self {
        SummaryHandler { month }
    }

    fn scope(&self) -> &str {
        self.month.as_deref().unwrap_or("all months")
    }
}

impl CommandHandler for SummaryHandler {
    fn run(&self, store: &RecordStore, output: &mut dyn Write) -> Result<(), LedgerError> {
        let totals = Ledger::new(store.load_all()?)
            .in_month(self.month.as_deref())
            .totals()?;
        let net = totals.net()?;

        writeln!(output, "Summary for {}", self.scope())?;
        writeln!(output, "  Income : {}", format_amount(totals.income))?;
        writeln!(output, "  Expense: {}", format_amount(totals.expense))?;
        writeln!(output, "  Net    : {}", format_amount(net))?;
        Ok(())
    }
}
