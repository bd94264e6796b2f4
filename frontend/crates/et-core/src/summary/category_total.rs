use crate::{Category, Expense};

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Sum amounts per category, in the order each category first appears.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|entry| entry.category == expense.category)
        {
            Some(entry) => entry.total = entry.total.saturating_add(expense.amount),
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
            }),
        }
    }

    totals
}
