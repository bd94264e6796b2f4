use et_core::{BudgetLookup, BudgetPeriod, Expense, SpendingSummary, UserProfile};

use std::fmt::Write;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: usize = 20;
pub const NOT_SET: &str = "Not Set";

/// Plain-text output for the terminal.
pub struct Renderer {
    currency: String,
}

impl Renderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency: currency_symbol.into(),
        }
    }

    /// `₹1234.50`, `-₹20.00`
    pub fn amount(&self, amount: Decimal) -> String {
        let sign = if amount.is_sign_negative() && !amount.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{:.2}", self.currency, amount.abs())
    }

    fn limit(&self, limit: Option<Decimal>) -> String {
        limit.map_or_else(|| NOT_SET.to_string(), |limit| self.amount(limit))
    }

    pub fn dashboard(
        &self,
        period: BudgetPeriod,
        summary: &SpendingSummary,
        profile: Option<&UserProfile>,
    ) -> String {
        let mut out = String::new();

        match profile {
            Some(profile) => {
                let _ = writeln!(out, "Welcome, {}", profile.display_name());
            }
            None => {
                let _ = writeln!(out, "Welcome");
            }
        }
        let _ = writeln!(out, "Dashboard for {period}");
        let _ = writeln!(out);
        let _ = writeln!(out, "  Total spent:  {}", self.amount(summary.total_spent));
        let _ = writeln!(out, "  Budget:       {}", self.limit(summary.budget_limit));
        let _ = writeln!(out, "  Remaining:    {}", self.amount(summary.remaining));

        let shown = summary.display_progress();
        let _ = writeln!(
            out,
            "  Progress:     {} {}%{}",
            progress_bar(shown),
            shown.round_dp(0),
            if summary.is_over_budget() {
                "  (over budget)"
            } else {
                ""
            }
        );

        if !summary.by_category.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "By category:");
            for entry in &summary.by_category {
                let _ = writeln!(
                    out,
                    "  {:<14} {}",
                    entry.category.as_str(),
                    self.amount(entry.total)
                );
            }
        }

        if !summary.by_day.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "By day:");
            for point in &summary.by_day {
                let _ = writeln!(out, "  {}  {}", point.label(), self.amount(point.total));
            }
        }

        out.trim_end().to_string()
    }

    pub fn expenses(&self, heading: &str, expenses: &[Expense]) -> String {
        if expenses.is_empty() {
            return format!("No expenses for {heading}");
        }

        let mut out = String::new();
        let _ = writeln!(out, "Expenses for {heading}");

        for expense in expenses {
            let _ = write!(
                out,
                "  #{:<6} {}  {:<14} {:>12}  {}",
                expense.id,
                expense.date,
                expense.category.as_str(),
                self.amount(expense.amount),
                expense.title
            );
            if let Some(ref notes) = expense.notes {
                let _ = write!(out, " ({notes})");
            }
            let _ = writeln!(out);
        }

        out.trim_end().to_string()
    }

    pub fn budget(&self, period: BudgetPeriod, lookup: &BudgetLookup) -> String {
        format!("Budget for {period}: {}", self.limit(lookup.limit()))
    }
}

/// Fixed-width bar for a percentage. Values outside 0..=100 are clamped.
pub fn progress_bar(percent: Decimal) -> String {
    let percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (percent * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);

    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
