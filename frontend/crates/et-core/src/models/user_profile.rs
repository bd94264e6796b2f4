use serde::{Deserialize, Serialize};

/// Display fields cached next to the session token.
///
/// Only used to personalise output; the backend never sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

impl UserProfile {
    pub fn new(name: Option<String>, email: impl Into<String>) -> Self {
        Self {
            name,
            email: email.into(),
        }
    }

    /// Name if known, otherwise the local part of the email.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    /// Keep a previously cached name when both profiles describe the same account.
    pub fn merged_with(mut self, cached: Option<&UserProfile>) -> Self {
        if self.name.is_none()
            && let Some(cached) = cached
            && cached.email.eq_ignore_ascii_case(&self.email)
        {
            self.name = cached.name.clone();
        }
        self
    }
}
