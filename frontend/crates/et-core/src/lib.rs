//! Domain values shared by the expense tracker client.
//!
//! Everything here is a plain value snapshot of what the backend returns,
//! plus the pure aggregations the dashboard derives from them.

pub mod error;
pub mod models;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::budget::Budget;
pub use models::budget_lookup::BudgetLookup;
pub use models::budget_period::BudgetPeriod;
pub use models::category::Category;
pub use models::expense::Expense;
pub use models::login_request::LoginRequest;
pub use models::login_response::LoginResponse;
pub use models::new_expense::NewExpense;
pub use models::register_request::RegisterRequest;
pub use models::set_budget::SetBudget;
pub use models::user_profile::UserProfile;
pub use summary::category_total::{CategoryTotal, category_totals};
pub use summary::daily_total::{DailyTotal, daily_totals};
pub use summary::spending_summary::{SpendingSummary, total_spent};
