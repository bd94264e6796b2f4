use crate::Route;

use et_api::Client;

use log::{debug, warn};
use serde_json::Value;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Email/password form. Failures are kept as an inline message.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns where to navigate on success. The client stores the token.
    pub async fn submit(&mut self, client: &Client) -> Option<Route> {
        self.error = None;

        match client.login(&self.email, &self.password).await {
            Ok(response) if response.token().is_some() => Some(Route::Dashboard),
            Ok(_) => {
                self.error = Some(INVALID_CREDENTIALS.to_string());
                None
            }
            Err(e) => {
                warn!("Login failed: {e}");
                self.error = Some(LOGIN_FAILED.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl RegisterForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success needs a non-empty `message` in the response. A rejection
    /// shows whatever the backend said; anything else gets the generic
    /// message.
    pub async fn submit(&mut self, client: &Client) -> Option<Route> {
        self.error = None;

        match client.register(&self.name, &self.email, &self.password).await {
            Ok(confirmation) if has_message(&confirmation) => Some(Route::Login),
            Ok(confirmation) => {
                debug!("Registration response without a message: {confirmation}");
                self.error = Some(REGISTRATION_FAILED.to_string());
                None
            }
            Err(e) => {
                warn!("Registration failed: {e}");
                self.error = Some(
                    e.api_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| REGISTRATION_FAILED.to_string()),
                );
                None
            }
        }
    }
}

fn has_message(confirmation: &Value) -> bool {
    confirmation
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|message| !message.trim().is_empty())
}
