//! Aggregate totals for a set of ledger entries
//!
//! This module defines the income/expense accumulator used both for the
//! overall summary and for each month of the balance report.
//!
//! All arithmetic is checked: amounts close to the decimal range limit can be
//! stored, so summing them may overflow and is reported as an error.

use super::error::LedgerError;
use super::transaction::Transaction;
use rust_decimal::Decimal;

/// Income and expense totals over some scope
///
/// Represents either the whole ledger, one filtered month, or one group of
/// the per-month balance report. Net is derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Decimal,

    /// Sum of all non-income (expense) amounts
    pub expense: Decimal,
}

impl Totals {
    /// Create totals with zero income and zero expense
    pub fn new() -> Self {
        Totals {
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        }
    }

    /// Sum a sequence of transactions
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if either accumulator leaves the
    /// representable range.
    pub fn from_transactions<'a, I>(transactions: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Totals::new();
        for tx in transactions {
            totals.record(tx)?;
        }
        Ok(totals)
    }

    /// Add one transaction to the matching accumulator
    ///
    /// Income entries go to `income`; every other entry counts as expense.
    /// On overflow the totals are left unchanged.
    pub fn record(&mut self, tx: &Transaction) -> Result<(), LedgerError> {
        if tx.is_income() {
            self.income = self
                .income
                .checked_add(tx.amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("income total"))?;
        } else {
            self.expense = self
                .expense
                .checked_add(tx.amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("expense total"))?;
        }
        Ok(())
    }

    /// Income minus expense
    pub fn net(&self) -> Result<Decimal, LedgerError> {
        self.income
            .checked_sub(self.expense)
            .ok_or_else(|| LedgerError::arithmetic_overflow("net"))
    }

    /// Combine two totals accumulator by accumulator
    pub fn combine(self, other: Totals) -> Result<Totals, LedgerError> {
        Ok(Totals {
            income: self
                .income
                .checked_add(other.income)
                .ok_or_else(|| LedgerError::arithmetic_overflow("income total"))?,
            expense: self
                .expense
                .checked_add(other.expense)
                .ok_or_else(|| LedgerError::arithmetic_overflow("expense total"))?,
        })
    }
}
