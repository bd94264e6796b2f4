use serde::Deserialize;

/// A success status without a token means the credentials were not accepted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}
