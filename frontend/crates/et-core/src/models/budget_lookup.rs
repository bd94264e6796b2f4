use crate::Budget;

use rust_decimal::Decimal;

/// Outcome of asking the backend for a period's budget.
///
/// A missing budget is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BudgetLookup {
    Found(Budget),
    #[default]
    NotSet,
}

impl BudgetLookup {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn budget(&self) -> Option<&Budget> {
        match self {
            Self::Found(budget) => Some(budget),
            Self::NotSet => None,
        }
    }

    pub fn limit(&self) -> Option<Decimal> {
        self.budget().map(|budget| budget.limit)
    }
}

impl From<Option<Budget>> for BudgetLookup {
    fn from(budget: Option<Budget>) -> Self {
        budget.map_or(Self::NotSet, Self::Found)
    }
}
