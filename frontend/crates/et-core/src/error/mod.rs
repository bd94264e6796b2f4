use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid budget period: {month}/{year} {location}")]
    InvalidPeriod {
        month: u32,
        year: i32,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a named field
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
