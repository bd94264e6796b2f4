use et_core::Category;

use chrono::NaiveDate;
use clap::Subcommand;
use rust_decimal::Decimal;

#[derive(Debug, Subcommand)]
pub enum ExpenseCommands {
    /// List expenses for a month (default: current month)
    List {
        /// Month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long, value_parser = clap::value_parser!(i32).range(1970..=9999))]
        year: Option<i32>,

        /// List every expense regardless of date
        #[arg(long, conflicts_with_all = ["month", "year"])]
        all: bool,
    },

    /// Record a new expense
    Add {
        #[arg(long)]
        title: String,

        /// Positive amount, e.g. 4.50
        #[arg(long, allow_hyphen_values = true)]
        amount: Decimal,

        /// Food, Transport, Utilities, Entertainment, Shopping, Health or Others
        #[arg(long)]
        category: Category,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        note: Option<String>,
    },

    /// Delete an expense by ID. Sent once to the backend without loading a
    /// list, so nothing is rolled back locally
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Backend total for one category
    CategoryTotal { category: Category },
}
