use crate::{Category, CoreError, CoreResult, models::calendar_date};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Body of a create-expense request: an expense minus `id` and `userId`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewExpense {
    pub title: String,
    pub amount: Decimal,
    pub category: Category,

    #[serde(with = "calendar_date")]
    pub date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewExpense {
    pub fn new(title: impl Into<String>, amount: Decimal, category: Category, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            date,
            notes: None,
        }
    }

    /// Attach a note. Blank notes are dropped.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title", "title is required"));
        }

        if self.amount <= Decimal::ZERO {
            return Err(CoreError::validation(
                "amount",
                format!("amount must be greater than 0, got {}", self.amount),
            ));
        }

        Ok(())
    }
}
