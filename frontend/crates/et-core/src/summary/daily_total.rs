use crate::Expense;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

const LABEL_FORMAT: &str = "%d %b";

/// One point of the per-day spending series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

impl DailyTotal {
    /// `05 Mar`
    pub fn label(&self) -> String {
        self.date.format(LABEL_FORMAT).to_string()
    }
}

/// Sum amounts per calendar day, oldest day first.
pub fn daily_totals(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for expense in expenses {
        let total = by_day.entry(expense.date).or_default();
        *total = total.saturating_add(expense.amount);
    }

    by_day
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}
