use crate::{
    AppError, AppResult, BudgetCommands, Commands, DashboardView, DeleteOutcome, ExpenseCommands,
    LoginForm, Navigation, Prompt, RegisterForm, Renderer, Route, RouteGuard, TransactionsView,
    views::auth::{LOGIN_FAILED, REGISTRATION_FAILED},
};

use et_api::{Client, ClientError};
use et_core::{BudgetPeriod, Category, CoreResult, NewExpense};

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

/// Runs one command against the API and renders its result.
pub struct App {
    client: Client,
    guard: RouteGuard,
    prompt: Box<dyn Prompt>,
    renderer: Renderer,
    json: bool,
}

impl App {
    pub fn new(client: Client, prompt: Box<dyn Prompt>, currency_symbol: &str, json: bool) -> Self {
        let guard = RouteGuard::new(client.session().clone());

        Self {
            client,
            guard,
            prompt,
            renderer: Renderer::new(currency_symbol),
            json,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the text to print on stdout (possibly empty).
    pub async fn run(&self, command: Commands) -> AppResult<String> {
        match command {
            Commands::Login { email, password } => self.login(email, password).await,
            Commands::Register {
                name,
                email,
                password,
            } => self.register(name, email, password).await,
            Commands::Logout => {
                self.client.logout()?;
                self.emit(&json!({ "authenticated": false }), || {
                    "Logged out".to_string()
                })
            }
            Commands::Whoami => self.whoami(),
            Commands::Dashboard { month, year } => self.dashboard(period(month, year)?).await,
            Commands::Expense { action } => self.expense(action).await,
            Commands::Budget { action } => self.budget(action).await,
        }
    }

    fn enter(&self, route: Route) -> AppResult<()> {
        match self.guard.resolve(route) {
            Navigation::Render(_) => Ok(()),
            Navigation::Redirect(target) => {
                debug!("{} requires a session, redirected to {}", route, target);
                Err(AppError::Unauthenticated { path: route.path() })
            }
        }
    }

    fn emit<T: Serialize + ?Sized>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> AppResult<String> {
        if self.json {
            return serde_json::to_string_pretty(value)
                .map_err(|e| AppError::from(ClientError::from_json(e)));
        }
        Ok(text())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    async fn login(&self, email: String, password: String) -> AppResult<String> {
        let mut form = LoginForm::new(email, password);

        match form.submit(&self.client).await {
            Some(route) => {
                debug!("Login succeeded, next route {route}");
                self.emit(
                    &json!({ "authenticated": true, "email": form.email }),
                    || format!("Logged in as {}", form.email),
                )
            }
            None => Err(AppError::rejected(form.error().unwrap_or(LOGIN_FAILED))),
        }
    }

    async fn register(&self, name: String, email: String, password: String) -> AppResult<String> {
        let mut form = RegisterForm::new(name, email, password);

        match form.submit(&self.client).await {
            Some(route) => {
                debug!("Registration succeeded, next route {route}");
                self.emit(&json!({ "registered": true, "email": form.email }), || {
                    format!("Registered {}. Run `et login` to sign in.", form.email)
                })
            }
            None => Err(AppError::rejected(
                form.error().unwrap_or(REGISTRATION_FAILED),
            )),
        }
    }

    fn whoami(&self) -> AppResult<String> {
        let state = self.client.session().snapshot();
        let profile = state.profile.as_ref();

        self.emit(
            &json!({
                "authenticated": state.is_authenticated(),
                "name": profile.and_then(|p| p.name.clone()),
                "email": profile.map(|p| p.email.clone()),
            }),
            || match (state.is_authenticated(), profile) {
                (true, Some(profile)) => {
                    format!("{} <{}>", profile.display_name(), profile.email)
                }
                (true, None) => "Logged in".to_string(),
                (false, _) => "Not logged in".to_string(),
            },
        )
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    async fn dashboard(&self, period: BudgetPeriod) -> AppResult<String> {
        self.enter(Route::Dashboard)?;

        let mut view = DashboardView::new(&self.client, period);
        view.load().await;
        let summary = view.summary();
        let profile = self.client.session().profile();

        self.emit(&summary, || {
            self.renderer.dashboard(period, &summary, profile.as_ref())
        })
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    async fn expense(&self, action: ExpenseCommands) -> AppResult<String> {
        self.enter(Route::Transactions)?;

        match action {
            ExpenseCommands::List { all: true, .. } => {
                let expenses = self.client.list_expenses().await?;
                self.emit(&expenses, || self.renderer.expenses("all time", &expenses))
            }
            ExpenseCommands::List { month, year, .. } => {
                let mut view = self.transactions(period(month, year)?);
                view.refresh().await?;
                self.list_output(&view)
            }
            ExpenseCommands::Add {
                title,
                amount,
                category,
                date,
                note,
            } => self.add_expense(title, amount, category, date, note).await,
            ExpenseCommands::Delete { id, .. } => {
                let mut view = self.transactions(BudgetPeriod::current());

                match view.delete_expense(id).await {
                    DeleteOutcome::Deleted => self.emit(&json!({ "deleted": id }), || {
                        format!("Deleted expense {id}")
                    }),
                    DeleteOutcome::Cancelled => Ok(String::new()),
                    DeleteOutcome::RolledBack => Err(AppError::Aborted),
                }
            }
            ExpenseCommands::CategoryTotal { category } => self.category_total(category).await,
        }
    }

    async fn add_expense(
        &self,
        title: String,
        amount: Decimal,
        category: Category,
        date: NaiveDate,
        note: Option<String>,
    ) -> AppResult<String> {
        let mut draft = NewExpense::new(title, amount, category, date);
        if let Some(note) = note {
            draft = draft.with_notes(note);
        }

        let mut view = self.transactions(BudgetPeriod::of(date));
        if !view.submit_expense(&draft).await {
            return Err(AppError::Aborted);
        }

        self.list_output(&view)
    }

    async fn category_total(&self, category: Category) -> AppResult<String> {
        let total = self.client.category_total(category).await?;

        self.emit(&total, || {
            let amount = total
                .get("total")
                .unwrap_or(&total)
                .as_f64()
                .and_then(|value| Decimal::try_from(value).ok());

            match amount {
                Some(amount) => format!("{category}: {}", self.renderer.amount(amount)),
                None if total.is_null() => format!("{category}: nothing recorded"),
                None => format!("{category}: {total}"),
            }
        })
    }

    fn transactions(&self, period: BudgetPeriod) -> TransactionsView<'_> {
        TransactionsView::new(&self.client, self.prompt.as_ref(), period)
    }

    fn list_output(&self, view: &TransactionsView<'_>) -> AppResult<String> {
        let heading = view.period().to_string();
        self.emit(view.expenses(), || {
            self.renderer.expenses(&heading, view.expenses())
        })
    }

    // =========================================================================
    // Budget
    // =========================================================================

    async fn budget(&self, action: BudgetCommands) -> AppResult<String> {
        self.enter(Route::Transactions)?;

        match action {
            BudgetCommands::Get { month, year } => {
                let period = period(month, year)?;
                let lookup = self.client.get_budget(period).await?;

                self.emit(&lookup.budget(), || self.renderer.budget(period, &lookup))
            }
            BudgetCommands::Set { limit, month, year } => {
                let period = period(month, year)?;
                let mut view = self.transactions(period);

                if !view.submit_budget(limit).await {
                    return Err(AppError::Aborted);
                }

                self.emit(
                    &json!({ "month": period.month(), "year": period.year(), "limit": limit }),
                    String::new,
                )
            }
        }
    }
}

/// Explicit month/year, each defaulting to the current calendar month.
pub fn period(month: Option<u32>, year: Option<i32>) -> CoreResult<BudgetPeriod> {
    let current = BudgetPeriod::current();
    BudgetPeriod::new(
        month.unwrap_or(current.month()),
        year.unwrap_or(current.year()),
    )
}
