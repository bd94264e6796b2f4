use crate::{
    BudgetLookup, CategoryTotal, DailyTotal, Expense, category_totals, daily_totals,
};

use rust_decimal::Decimal;
use serde::Serialize;

/// Everything the dashboard shows for one month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: Decimal,
    /// `None` when no budget is configured for the period
    pub budget_limit: Option<Decimal>,
    pub remaining: Decimal,
    /// Unclamped; may exceed 100 when overspent
    pub progress: Decimal,
    pub by_category: Vec<CategoryTotal>,
    pub by_day: Vec<DailyTotal>,
}

impl SpendingSummary {
    pub fn compute(expenses: &[Expense], budget: &BudgetLookup) -> Self {
        let total_spent = total_spent(expenses);
        let budget_limit = budget.limit();
        let limit = budget_limit.unwrap_or(Decimal::ZERO);

        Self {
            total_spent,
            budget_limit,
            remaining: limit.saturating_sub(total_spent),
            progress: progress(total_spent, limit),
            by_category: category_totals(expenses),
            by_day: daily_totals(expenses),
        }
    }

    /// Progress capped at 100 for progress bars.
    pub fn display_progress(&self) -> Decimal {
        self.progress.min(Decimal::ONE_HUNDRED)
    }

    pub fn is_over_budget(&self) -> bool {
        self.budget_limit.is_some() && self.remaining < Decimal::ZERO
    }
}

/// Saturates at the `Decimal` bounds instead of overflowing.
pub fn total_spent(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |total, expense| total.saturating_add(expense.amount))
}

/// Percentage of `limit` already spent. Zero when there is no positive limit.
fn progress(spent: Decimal, limit: Decimal) -> Decimal {
    if limit <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    spent
        .checked_div(limit)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}
