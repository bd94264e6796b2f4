//! et - expense tracker terminal client
//!
//! Views, routing and rendering on top of `et-api`. The `et` binary wires
//! them to clap commands.

pub mod app;
pub mod budget_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod expense_commands;
pub mod logger;
pub mod prompt;
pub mod render;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use app::App;
pub use budget_commands::BudgetCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{AppError, Result as AppResult};
pub use expense_commands::ExpenseCommands;
pub use prompt::{Prompt, TerminalPrompt};
pub use render::Renderer;
pub use router::{Navigation, Route, RouteGuard};
pub use views::{
    auth::{LoginForm, RegisterForm},
    dashboard::DashboardView,
    modal::ModalState,
    transactions::{DeleteOutcome, FetchTicket, TransactionsView},
};
