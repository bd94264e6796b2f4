use clap::Subcommand;
use rust_decimal::Decimal;

#[derive(Debug, Subcommand)]
pub enum BudgetCommands {
    /// Show the budget for a month (default: current month)
    Get {
        /// Month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long, value_parser = clap::value_parser!(i32).range(1970..=9999))]
        year: Option<i32>,
    },

    /// Create or replace the budget for a month
    Set {
        #[arg(long, allow_hyphen_values = true)]
        limit: Decimal,

        /// Month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long, value_parser = clap::value_parser!(i32).range(1970..=9999))]
        year: Option<i32>,
    },
}
