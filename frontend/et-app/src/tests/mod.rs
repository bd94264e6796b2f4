mod render;
mod router;

use et_core::{Category, Expense};

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub(crate) fn expense(id: i64, title: &str, cents: i64, (y, m, d): (i32, u32, u32)) -> Expense {
    Expense {
        id,
        user_id: 1,
        title: title.to_string(),
        amount: Decimal::new(cents, 2),
        category: Category::Food,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        notes: None,
    }
}
