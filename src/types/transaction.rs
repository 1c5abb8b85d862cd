//! Transaction-related types for the budget tracker
//!
//! This module defines the ledger entry type and the income/expense
//! classification, along with the amount normalisation every entry goes
//! through before it is stored or displayed.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits every amount carries
pub const AMOUNT_SCALE: u32 = 2;

/// Format used for the year-month grouping and filter key
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";

/// Kind of ledger entry
///
/// Only two kinds exist. Parsing is case-insensitive, display is always
/// lowercase, which is also the stored form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Money coming in
    Income,

    /// Money going out
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(s.to_string()),
        }
    }
}

/// A single recorded income or expense event
///
/// Built by the `add` command or by parsing a stored line. Never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date of the entry
    pub date: NaiveDate,

    /// Income or expense
    pub tx_type: TransactionType,

    /// Free-text category label
    pub category: String,

    /// Amount with exactly two decimal places
    ///
    /// The sign is kept as given; expenses are stored as positive values and
    /// only displayed with a leading `-`.
    pub amount: Decimal,

    /// Free-text note, possibly empty
    pub note: String,
}

impl Transaction {
    /// Create a transaction, normalising the amount to two decimal places
    pub fn new(
        date: NaiveDate,
        tx_type: TransactionType,
        category: impl Into<String>,
        amount: Decimal,
        note: impl Into<String>,
    ) -> Self {
        Transaction {
            date,
            tx_type,
            category: category.into(),
            amount: round_amount(amount),
            note: note.into(),
        }
    }

    /// Year-month key (`YYYY-MM`) used for filtering and grouping
    pub fn month_key(&self) -> String {
        self.date.format(MONTH_KEY_FORMAT).to_string()
    }

    pub fn is_income(&self) -> bool {
        self.tx_type == TransactionType::Income
    }

    /// Amount as shown in listings: expenses get a leading `-`
    pub fn signed_display_amount(&self) -> String {
        match self.tx_type {
            TransactionType::Expense => format!("-{}", format_amount(self.amount)),
            TransactionType::Income => format_amount(self.amount),
        }
    }
}

/// Round an amount half-up (away from zero on ties) to two decimals
///
/// The result always carries a scale of exactly two, so `2500` becomes
/// `2500.00` and `12.505` becomes `12.51`.
pub fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AMOUNT_SCALE);
    rounded
}

/// Parse a user- or file-supplied amount
///
/// Accepts plain decimals with an optional sign as well as scientific
/// notation. The value is not rounded here.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(unsigned)
        .or_else(|_| Decimal::from_scientific(unsigned))
        .ok()
}

/// Format an amount with exactly two decimals and no grouping separators
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
