use crate::{ModalState, Prompt};

use et_api::{ApiResult, Client};
use et_core::{BudgetPeriod, CoreResult, Expense, NewExpense, SetBudget};

use log::{debug, error, info, warn};
use rust_decimal::Decimal;

pub const CONFIRM_DELETE: &str = "Are you sure?";
pub const CREATE_FAILED: &str = "Failed to create expense";
pub const BUDGET_UPDATED: &str = "Budget updated successfully";
pub const BUDGET_FAILED: &str = "Failed to set budget";

/// Identifies one list fetch. Only the newest ticket may update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    period: BudgetPeriod,
}

impl FetchTicket {
    pub fn period(&self) -> BudgetPeriod {
        self.period
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    /// The delete call failed and any local removal was undone
    RolledBack,
}

/// Expense list for one month with create, delete and budget dialogs.
pub struct TransactionsView<'a> {
    client: &'a Client,
    prompt: &'a dyn Prompt,
    period: BudgetPeriod,
    expenses: Vec<Expense>,
    latest_ticket: u64,
    pub expense_modal: ModalState,
    pub budget_modal: ModalState,
}

impl<'a> TransactionsView<'a> {
    pub fn new(client: &'a Client, prompt: &'a dyn Prompt, period: BudgetPeriod) -> Self {
        Self {
            client,
            prompt,
            period,
            expenses: Vec::new(),
            latest_ticket: 0,
            expense_modal: ModalState::Closed,
            budget_modal: ModalState::Closed,
        }
    }

    pub fn period(&self) -> BudgetPeriod {
        self.period
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Issue a ticket for the current filter period, superseding older ones.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        FetchTicket {
            generation: self.latest_ticket,
            period: self.period,
        }
    }

    /// Apply a settled fetch if its ticket is still the newest.
    ///
    /// Returns `Ok(false)` for superseded results, whatever their outcome.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: ApiResult<Vec<Expense>>,
    ) -> ApiResult<bool> {
        if ticket.generation != self.latest_ticket {
            debug!(
                "Discarding stale expense list for {} (ticket {} < {})",
                ticket.period, ticket.generation, self.latest_ticket
            );
            return Ok(false);
        }

        match result {
            Ok(expenses) => {
                self.expenses = expenses;
                Ok(true)
            }
            Err(e) => {
                error!("Error fetching expenses for {}: {e}", ticket.period);
                Err(e)
            }
        }
    }

    pub async fn fetch(&self, ticket: FetchTicket) -> ApiResult<Vec<Expense>> {
        self.client.list_expenses_by_month(ticket.period).await
    }

    pub async fn refresh(&mut self) -> ApiResult<bool> {
        let ticket = self.begin_fetch();
        let result = self.fetch(ticket).await;
        self.settle(ticket, result)
    }

    /// Change the filter month. Re-fetches only if the value changed.
    pub async fn select_month(&mut self, month: u32) -> CoreResult<bool> {
        let next = self.period.with_month(month)?;
        Ok(self.select_period(next).await)
    }

    /// Change the filter year. Re-fetches only if the value changed.
    pub async fn select_year(&mut self, year: i32) -> CoreResult<bool> {
        let next = self.period.with_year(year)?;
        Ok(self.select_period(next).await)
    }

    async fn select_period(&mut self, next: BudgetPeriod) -> bool {
        if next == self.period {
            return false;
        }

        self.period = next;
        // Failures are already logged by settle
        let _ = self.refresh().await;
        true
    }

    // =========================================================================
    // Create
    // =========================================================================

    /// Submit the create-expense dialog. True when the expense was stored.
    pub async fn submit_expense(&mut self, draft: &NewExpense) -> bool {
        self.expense_modal.open();

        if let Err(e) = draft.validate() {
            warn!("Rejected expense draft: {e}");
            self.prompt.alert(&validation_message(&e));
            return false;
        }

        if !self.expense_modal.begin_submit() {
            return false;
        }

        match self.client.create_expense(draft).await {
            Ok(_) => {
                self.expense_modal.finish(true);
                info!("Created expense \"{}\"", draft.title);
                let _ = self.refresh().await;
                true
            }
            Err(e) => {
                error!("Error creating expense: {e}");
                self.expense_modal.finish(false);
                self.prompt.alert(CREATE_FAILED);
                false
            }
        }
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Confirm, remove locally, then delete remotely.
    ///
    /// A failed delete puts the record back where it was.
    pub async fn delete_expense(&mut self, id: i64) -> DeleteOutcome {
        if !self.prompt.confirm(CONFIRM_DELETE) {
            debug!("Delete of expense {id} cancelled");
            return DeleteOutcome::Cancelled;
        }

        let removed = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .map(|index| (index, self.expenses.remove(index)));

        match self.client.delete_expense(id).await {
            Ok(()) => {
                info!("Deleted expense {id}");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Error deleting expense {id}: {e}");
                if let Some((index, expense)) = removed {
                    let index = index.min(self.expenses.len());
                    self.expenses.insert(index, expense);
                }
                DeleteOutcome::RolledBack
            }
        }
    }

    // =========================================================================
    // Budget
    // =========================================================================

    /// Upsert the budget for the current filter period.
    pub async fn submit_budget(&mut self, limit: Decimal) -> bool {
        self.budget_modal.open();

        let request = SetBudget::new(self.period, limit);
        if let Err(e) = request.validate() {
            warn!("Rejected budget: {e}");
            self.prompt.alert(&validation_message(&e));
            return false;
        }

        if !self.budget_modal.begin_submit() {
            return false;
        }

        match self.client.set_budget(&request).await {
            Ok(_) => {
                self.budget_modal.finish(true);
                self.prompt.alert(BUDGET_UPDATED);
                true
            }
            Err(e) => {
                error!("Error setting budget for {}: {e}", self.period);
                self.budget_modal.finish(false);
                self.prompt.alert(BUDGET_FAILED);
                false
            }
        }
    }
}

fn validation_message(err: &et_core::CoreError) -> String {
    match err {
        et_core::CoreError::Validation { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
