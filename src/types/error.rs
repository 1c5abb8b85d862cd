//! Error types for the budget tracker
//!
//! This module defines all error types that can occur while reading or
//! writing the ledger and while validating user input.
//!
//! # Error Categories
//!
//! - **I/O Errors**: store cannot be created, opened, or written
//! - **Parse Errors**: a stored line carries a corrupt date, type, or amount
//! - **Validation Errors**: bad arguments to `add` (type, amount, arity)
//! - **Arithmetic Errors**: a total exceeds the representable amount range
//!
//! Validation errors are shown to the user as plain messages on stdout.
//! Everything else is rendered once at the top level as `Error: <message>`.

use thiserror::Error;

/// Usage line printed when `add` is missing arguments
pub const ADD_USAGE: &str = "Usage: add <type> <category> <amount> [note]";

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// I/O error while creating, reading, or appending to the store
    ///
    /// Fatal for the current command.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A stored line could not be parsed
    ///
    /// Only raised for lines with all five fields present whose values are
    /// corrupt. Short lines are skipped instead.
    #[error("Parse error{}: {message} in '{content}'", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number in the store file (if available)
        line: Option<u64>,
        /// Raw content of the offending line
        content: String,
        /// Description of the parsing error
        message: String,
    },

    /// The `add` type argument is neither income nor expense
    #[error("Type must be income or expense (got '{value}')")]
    InvalidType {
        /// The rejected type string
        value: String,
    },

    /// The `add` amount argument is not a decimal number
    #[error("Amount must be a number (got '{value}')")]
    InvalidAmount {
        /// The rejected amount string
        value: String,
    },

    /// Summing stored amounts would overflow
    ///
    /// Fatal for the report being computed; the store is not modified.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Fewer positional arguments than the command requires
    #[error("{usage}")]
    MissingArguments {
        /// Usage line for the command
        usage: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        match error.kind() {
            csv::ErrorKind::Io(_) => LedgerError::IoError {
                message: error.to_string(),
            },
            _ => LedgerError::ParseError {
                line,
                content: String::new(),
                message: error.to_string(),
            },
        }
    }
}

impl LedgerError {
    /// Whether this error comes from bad user input rather than the store
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidType { .. }
                | LedgerError::InvalidAmount { .. }
                | LedgerError::MissingArguments { .. }
        )
    }

    /// Create an IoError with context about what was being attempted
    pub fn io(context: &str, error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: format!("{}: {}", context, error),
        }
    }

    /// Create a ParseError for a stored line
    pub fn parse(line: Option<u64>, content: &str, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line,
            content: content.to_string(),
            message: message.into(),
        }
    }

    /// Create an InvalidType error
    pub fn invalid_type(value: &str) -> Self {
        LedgerError::InvalidType {
            value: value.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        LedgerError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create the MissingArguments error for `add`
    pub fn missing_add_arguments() -> Self {
        LedgerError::MissingArguments {
            usage: ADD_USAGE.to_string(),
        }
    }
}
