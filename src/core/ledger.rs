//! In-memory ledger aggregation
//!
//! Holds the transactions loaded for one invocation and derives everything
//! the reports need from them. Nothing here is persisted; aggregates are
//! recomputed on every run.
//!
//! # Month Filter
//!
//! Filtering compares the formatted `YYYY-MM` key of each date with the filter
//! string for exact equality. A malformed filter such as `2025-9` is not an
//! error, it simply matches nothing.

use crate::types::{LedgerError, Totals, Transaction};
use std::collections::BTreeMap;

/// Loaded ledger entries in store order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Ledger { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Keep only the entries of one month, preserving order
    ///
    /// `None` keeps everything.
    pub fn in_month(self, month: Option<&str>) -> Ledger {
        match month {
            None => self,
            Some(month) => Ledger {
                transactions: self
                    .transactions
                    .into_iter()
                    .filter(|tx| tx.month_key() == month)
                    .collect(),
            },
        }
    }

    /// Income and expense totals over every entry
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a total leaves the decimal range.
    pub fn totals(&self) -> Result<Totals, LedgerError> {
        Totals::from_transactions(&self.transactions)
    }

    /// Totals grouped by year-month key, in ascending key order
    ///
    /// The `YYYY-MM` key sorts lexicographically in chronological order.
    pub fn monthly_totals(&self) -> Result<BTreeMap<String, Totals>, LedgerError> {
        let mut months: BTreeMap<String, Totals> = BTreeMap::new();
        for tx in &self.transactions {
            months.entry(tx.month_key()).or_default().record(tx)?;
        }
        Ok(months)
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Ledger::new(transactions)
    }
}
