use et_api::Client;
use et_core::{BudgetLookup, BudgetPeriod, Expense, SpendingSummary};

use log::error;

/// Month overview: the period's expenses plus its budget.
pub struct DashboardView<'a> {
    client: &'a Client,
    period: BudgetPeriod,
    expenses: Vec<Expense>,
    budget: BudgetLookup,
}

impl<'a> DashboardView<'a> {
    pub fn new(client: &'a Client, period: BudgetPeriod) -> Self {
        Self {
            client,
            period,
            expenses: Vec::new(),
            budget: BudgetLookup::NotSet,
        }
    }

    pub fn period(&self) -> BudgetPeriod {
        self.period
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budget(&self) -> &BudgetLookup {
        &self.budget
    }

    /// Fetch expenses and budget concurrently.
    ///
    /// Each half is applied on its own; a failed half is logged and left
    /// empty. Returns true when both succeeded.
    pub async fn load(&mut self) -> bool {
        let (expenses, budget) = tokio::join!(
            self.client.list_expenses_by_month(self.period),
            self.client.get_budget(self.period),
        );

        let mut complete = true;

        match expenses {
            Ok(expenses) => self.expenses = expenses,
            Err(e) => {
                error!("Error fetching expenses for {}: {e}", self.period);
                self.expenses.clear();
                complete = false;
            }
        }

        match budget {
            Ok(budget) => self.budget = budget,
            Err(e) => {
                error!("Error fetching budget for {}: {e}", self.period);
                self.budget = BudgetLookup::NotSet;
                complete = false;
            }
        }

        complete
    }

    pub fn summary(&self) -> SpendingSummary {
        SpendingSummary::compute(&self.expenses, &self.budget)
    }
}
