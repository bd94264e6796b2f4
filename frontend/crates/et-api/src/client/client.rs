use crate::{ApiResult, ClientError, Session};

use et_core::{
    Budget, BudgetLookup, BudgetPeriod, Category, Expense, LoginRequest, LoginResponse,
    NewExpense, RegisterRequest, SetBudget, UserProfile,
};

use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the expense tracker REST API.
///
/// Every operation performs exactly one request (logout performs none).
pub struct Client {
    pub base_url: String,
    session: Session,
    http: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API prefix (e.g., "http://127.0.0.1:5000/api")
    /// * `session` - Source of the bearer token; login and logout write to it
    pub fn new(base_url: &str, session: Session) -> Self {
        Self::with_http(base_url, session, ReqwestClient::new())
    }

    /// Create a client around a preconfigured reqwest client (timeouts, proxies)
    pub fn with_http(base_url: &str, session: Session, http: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            http,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a request without credentials
    fn public_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Build a request carrying the session's bearer token, if any
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let req = self.public_request(method, path);

        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> ApiResult<Response> {
        let request = req.build()?;
        debug!("{} {}", request.method(), request.url().path());

        Ok(self.http.execute(request).await?)
    }

    /// Execute request and handle errors.
    ///
    /// Non-success statuses become `ClientError::Api` carrying the body text,
    /// or the status reason when the body is empty. An empty success body is `None`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<Option<Value>> {
        let response = self.send(req).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            } else {
                body
            };
            debug!("Request rejected with {}: {}", status.as_u16(), message);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        // Some endpoints answer success with plain text
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!("Non-JSON {} body treated as empty: {}", status.as_u16(), e);
                Ok(None)
            }
        }
    }

    async fn execute_as<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ApiResult<Option<T>> {
        match self.execute(req).await? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Log in. A returned token is stored in the session.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest { email, password };
        let req = self.public_request(Method::POST, "/auth/login").json(&body);
        let response: LoginResponse = self.execute_as(req).await?.unwrap_or_default();

        if let Some(token) = response.token() {
            self.session
                .sign_in(token, Some(UserProfile::new(None, email)))?;
            info!("Logged in as {}", email);
        }

        Ok(response)
    }

    /// Register a new account. The backend's confirmation is returned as-is.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<Value> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let req = self.public_request(Method::POST, "/auth/register").json(&body);
        let confirmation = self.execute(req).await?.unwrap_or(Value::Null);

        self.session
            .remember_profile(UserProfile::new(Some(name.to_string()), email))?;

        Ok(confirmation)
    }

    /// Clear the stored session. Purely local.
    pub fn logout(&self) -> ApiResult<()> {
        self.session.sign_out()
    }

    // =========================================================================
    // Expense Operations
    // =========================================================================

    /// List every expense of the current user
    pub async fn list_expenses(&self) -> ApiResult<Vec<Expense>> {
        let req = self.request(Method::GET, "/expense");
        Ok(self.execute_as(req).await?.unwrap_or_default())
    }

    /// List expenses dated within one month
    pub async fn list_expenses_by_month(&self, period: BudgetPeriod) -> ApiResult<Vec<Expense>> {
        let req = self.request(
            Method::GET,
            &format!("/expense/Month/{}/{}", period.month(), period.year()),
        );
        Ok(self.execute_as(req).await?.unwrap_or_default())
    }

    /// Create an expense, returning the stored record when the backend echoes it
    pub async fn create_expense(&self, expense: &NewExpense) -> ApiResult<Option<Expense>> {
        let req = self.request(Method::POST, "/expense").json(expense);
        self.execute_as(req).await
    }

    /// Delete an expense by ID
    pub async fn delete_expense(&self, id: i64) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/expense/{}", id));
        self.execute(req).await?;
        Ok(())
    }

    /// Backend-computed total for one category (shape defined by the backend)
    pub async fn category_total(&self, category: Category) -> ApiResult<Value> {
        let req = self.request(
            Method::GET,
            &format!("/expense/category/{}/total", category.as_str()),
        );
        Ok(self.execute(req).await?.unwrap_or(Value::Null))
    }

    // =========================================================================
    // Budget Operations
    // =========================================================================

    /// Look up the budget for a period.
    ///
    /// Rejections, empty or malformed bodies, and payloads without a numeric
    /// `id` all mean "not set". Only transport failures are errors.
    pub async fn get_budget(&self, period: BudgetPeriod) -> ApiResult<BudgetLookup> {
        let req = self.request(
            Method::GET,
            &format!("/budget/Month/{}/{}", period.month(), period.year()),
        );
        let response = self.send(req).await?;
        let status = response.status();

        if !status.is_success() {
            debug!("No budget for {} (status {})", period, status.as_u16());
            return Ok(BudgetLookup::NotSet);
        }

        let body = response.text().await?;
        Ok(budget_from_body(&body))
    }

    /// Create or replace the budget for a period
    pub async fn set_budget(&self, budget: &SetBudget) -> ApiResult<Option<Budget>> {
        let req = self.request(Method::POST, "/budget").json(budget);
        self.execute_as(req).await
    }
}

pub(crate) fn budget_from_body(body: &str) -> BudgetLookup {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return BudgetLookup::NotSet;
    };

    if !value.get("id").is_some_and(Value::is_number) {
        return BudgetLookup::NotSet;
    }

    serde_json::from_value::<Budget>(value)
        .map(BudgetLookup::Found)
        .unwrap_or(BudgetLookup::NotSet)
}

