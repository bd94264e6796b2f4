use crate::BudgetPeriod;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly spending limit. At most one exists per (month, year).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub month: u32,
    pub year: i32,
    pub limit: Decimal,
}

impl Budget {
    pub fn is_for(&self, period: &BudgetPeriod) -> bool {
        self.month == period.month() && self.year == period.year()
    }
}
