mod budget_lookup;
mod budget_period;
mod category;
mod expense;
mod new_expense;
mod user_profile;
