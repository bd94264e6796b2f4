use crate::{BudgetPeriod, CoreError, CoreResult};

use rust_decimal::Decimal;
use serde::Serialize;

/// Body of the budget upsert call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SetBudget {
    pub month: u32,
    pub year: i32,
    pub limit: Decimal,
}

impl SetBudget {
    pub fn new(period: BudgetPeriod, limit: Decimal) -> Self {
        Self {
            month: period.month(),
            year: period.year(),
            limit,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.limit < Decimal::ZERO {
            return Err(CoreError::validation(
                "limit",
                format!("limit cannot be negative, got {}", self.limit),
            ));
        }
        Ok(())
    }
}
