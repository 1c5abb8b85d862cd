use clap::{Parser, Subcommand};

/// Record income and expenses and report monthly totals
#[derive(Parser, Debug)]
#[command(name = "budget")]
#[command(about = "Record income and expenses and report monthly totals", long_about = None)]
#[command(disable_help_subcommand = true, disable_version_flag = true)]
pub struct CliArgs {
    /// Command to run; none prints the usage text
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Ledger commands
///
/// Every argument is positional. Arguments are kept as raw strings here and
/// validated by the command handlers, so bad input produces the ledger's own
/// messages rather than parser errors. Surplus trailing arguments are
/// accepted and ignored.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record an income or expense entry dated today
    Add {
        /// Entry type: income or expense
        #[arg(value_name = "TYPE")]
        tx_type: Option<String>,

        /// Category label
        #[arg(value_name = "CATEGORY", allow_hyphen_values = true)]
        category: Option<String>,

        /// Amount, rounded half-up to two decimals
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: Option<String>,

        /// Optional free-text note
        #[arg(value_name = "NOTE", allow_hyphen_values = true)]
        note: Option<String>,

        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// List entries, optionally for one month
    List {
        /// Month filter in YYYY-MM form
        #[arg(value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Show income, expense, and net totals, optionally for one month
    Summary {
        /// Month filter in YYYY-MM form
        #[arg(value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Show income, expense, and net for every month
    Balance {
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Print usage
    Help,
}
