use crate::{BudgetPeriod, Category, models::calendar_date};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recorded transaction, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,

    pub title: String,
    pub amount: Decimal,
    pub category: Category,

    #[serde(with = "calendar_date")]
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    pub fn is_in(&self, period: &BudgetPeriod) -> bool {
        period.contains(self.date)
    }
}
