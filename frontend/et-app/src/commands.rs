use crate::{BudgetCommands, ExpenseCommands};

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Spending overview for a month (default: current month)
    Dashboard {
        /// Month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long, value_parser = clap::value_parser!(i32).range(1970..=9999))]
        year: Option<i32>,
    },

    /// Expense operations
    Expense {
        #[command(subcommand)]
        action: ExpenseCommands,
    },

    /// Budget operations
    Budget {
        #[command(subcommand)]
        action: BudgetCommands,
    },
}

impl Commands {
    /// True when the user asked to skip confirmations.
    pub fn assume_yes(&self) -> bool {
        matches!(
            self,
            Commands::Expense {
                action: ExpenseCommands::Delete { yes: true, .. }
            }
        )
    }
}
