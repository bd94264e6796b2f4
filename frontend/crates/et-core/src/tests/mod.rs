mod models;

use crate::{Category, Expense};

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Build an expense with an amount given in cents
pub(crate) fn expense(id: i64, category: Category, cents: i64, date: (i32, u32, u32)) -> Expense {
    Expense {
        id,
        user_id: 1,
        title: format!("expense-{id}"),
        amount: Decimal::new(cents, 2),
        category,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        notes: None,
    }
}
