use et_api::ClientError;
use et_config::ConfigError;
use et_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// A protected route was requested without a session
    #[error("Not logged in (cannot open {path}). Run `et login` first.")]
    Unauthenticated { path: &'static str },

    /// A form rejected the submission; the message is meant for the user
    #[error("{message}")]
    Rejected { message: String },

    /// The failure was already reported through the prompt
    #[error("Aborted")]
    Aborted,
}

impl AppError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
