use crate::{ConfigError, ConfigErrorResult, DEFAULT_CURRENCY_SYMBOL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix for every rendered amount
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: String::from(DEFAULT_CURRENCY_SYMBOL),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::display("display.currency_symbol cannot be empty"));
        }
        Ok(())
    }
}
