//! `add` command: record one income or expense entry
//!
//! Validation happens here, before anything is written: the three required
//! arguments must be present, the type must be income or expense, and the
//! amount must parse as a decimal. Any failure prints a plain message and
//! leaves the store untouched.

use super::CommandHandler;
use crate::io::RecordStore;
use crate::types::{format_amount, parse_amount, LedgerError, Transaction, TransactionType};
use chrono::{Local, NaiveDate};
use log::debug;
use std::io::Write;

/// Handler for `add <type> <category> <amount> [note]`
#[derive(Debug, Clone)]
pub struct AddHandler {
    tx_type: Option<String>,
    category: Option<String>,
    amount: Option<String>,
    note: Option<String>,
    date: NaiveDate,
}

impl AddHandler {
    /// Create a handler that dates the entry today (local time)
    pub fn new(
        tx_type: Option<String>,
        category: Option<String>,
        amount: Option<String>,
        note: Option<String>,
    ) -> Self {
        AddHandler {
            tx_type,
            category,
            amount,
            note,
            date: Local::now().date_naive(),
        }
    }

    /// Use a fixed date instead of today
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Validate the raw arguments and build the transaction to store
    pub fn build(&self) -> Result<Transaction, LedgerError> {
        let (Some(tx_type), Some(category), Some(amount)) =
            (&self.tx_type, &self.category, &self.amount)
        else {
            return Err(LedgerError::missing_add_arguments());
        };

        let tx_type = tx_type
            .parse::<TransactionType>()
            .map_err(|value| LedgerError::invalid_type(&value))?;
        let amount = parse_amount(amount).ok_or_else(|| LedgerError::invalid_amount(amount))?;

        Ok(Transaction::new(
            self.date,
            tx_type,
            category.as_str(),
            amount,
            self.note.as_deref().unwrap_or_default(),
        ))
    }
}

impl CommandHandler for AddHandler {
    fn run(&self, store: &RecordStore, output: &mut dyn Write) -> Result<(), LedgerError> {
        let tx = match self.build() {
            Ok(tx) => tx,
            Err(e) if e.is_validation() => {
                debug!("rejected add: {}", e);
                writeln!(output, "{}", e)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        store.append(&tx)?;
        writeln!(
            output,
            "Saved {} of {} in category {}",
            tx.tx_type,
            format_amount(tx.amount),
            tx.category
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run_to_string, store_with, HEADER_LINE};
    use rstest::rstest;
    use std::fs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
    }

    fn handler(args: &[&str]) -> AddHandler {
        let mut args = args.iter().map(|s| s.to_string());
        AddHandler::new(args.next(), args.next(), args.next(), args.next()).on(today())
    }

    #[test]
    fn test_add_expense_to_fresh_store() {
        let (_dir, store) = store_with(&[]);

        let output = run_to_string(&handler(&["expense", "Groceries", "85.30"]), &store).unwrap();

        assert_eq!(output, "Saved expense of 85.30 in category Groceries\n");
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            format!("{}2025-09-05,expense,Groceries,85.30,\n", HEADER_LINE)
        );
    }

    #[rstest]
    #[case::uppercase_type(&["INCOME", "Salary", "2500", "Paycheck"], "2025-09-05,income,Salary,2500.00,Paycheck")]
    #[case::rounds_half_up(&["expense", "Food", "12.505"], "2025-09-05,expense,Food,12.51,")]
    #[case::comma_in_note(&["expense", "Food", "3", "bread, milk"], "2025-09-05,expense,Food,3.00,bread  milk")]
    #[case::negative_amount(&["expense", "Refund", "-4.5"], "2025-09-05,expense,Refund,-4.50,")]
    fn test_add_stored_line(#[case] args: &[&str], #[case] expected_line: &str) {
        let (_dir, store) = store_with(&[]);

        run_to_string(&handler(args), &store).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, format!("{}{}\n", HEADER_LINE, expected_line));
    }

    #[rstest]
    #[case::bogus_type(&["bogus", "Food", "10"], "Type must be income or expense")]
    #[case::bad_amount(&["expense", "Food", "ten"], "Amount must be a number")]
    #[case::no_args(&[], "Usage: add <type> <category> <amount> [note]")]
    #[case::missing_amount(&["expense", "Food"], "Usage: add <type> <category> <amount> [note]")]
    fn test_add_rejects_invalid_input(#[case] args: &[&str], #[case] expected_message: &str) {
        let (_dir, store) = store_with(&[]);

        let output = run_to_string(&handler(args), &store).unwrap();

        assert!(output.contains(expected_message), "output: {}", output);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), HEADER_LINE);
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let (_dir, store) = store_with(&[]);
        let calls: [&[&str]; 3] = [
            &["expense", "Rent", "900"],
            &["income", "Salary", "2500"],
            &["expense", "Food", "12.5", "Lunch"],
        ];

        for args in calls {
            run_to_string(&handler(args), &store).unwrap();
        }

        let content = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "date,type,category,amount,note",
                "2025-09-05,expense,Rent,900.00,",
                "2025-09-05,income,Salary,2500.00,",
                "2025-09-05,expense,Food,12.50,Lunch",
            ]
        );
    }

    #[test]
    fn test_build_uses_given_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let tx = handler(&["income", "Gift", "20"]).on(date).build().unwrap();
        assert_eq!(tx.date, date);
        assert_eq!(tx.note, "");
    }
}
