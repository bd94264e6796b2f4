pub mod budget;
pub mod budget_lookup;
pub mod budget_period;
pub mod calendar_date;
pub mod category;
pub mod expense;
pub mod login_request;
pub mod login_response;
pub mod new_expense;
pub mod register_request;
pub mod set_budget;
pub mod user_profile;
