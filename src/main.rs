//! Budget Tracker CLI
//!
//! Command-line interface for recording income and expenses in
//! `transactions.csv` in the current directory.
//!
//! # Usage
//!
//! ```bash
//! budget add expense Food 12.50 "Lunch"
//! budget add income Salary 2000 "Paycheck"
//! budget list
//! budget list 2025-09
//! budget summary
//! budget summary 2025-09
//! budget balance
//! ```
//!
//! Running without arguments, or with an unknown command, prints the usage
//! text. Set `RUST_LOG=debug` to trace store access on stderr.
//!
//! # Exit Codes
//!
//! - 0: Success, including rejected `add` input and help output
//! - 1: Error (store cannot be created or written, corrupt store line, etc.)

use budget_tracker::cli;
use budget_tracker::commands;
use budget_tracker::config::LedgerConfig;
use std::io::Write;
use std::process;

fn main() {
    // Logging goes to stderr and is controlled by RUST_LOG
    env_logger::init();

    let command = cli::parse_args();
    let config = LedgerConfig::default();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    let result = commands::dispatch(command, &config, &mut output)
        .and_then(|()| output.flush().map_err(Into::into));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
