use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn generic(category: &'static str, message: impl Into<String>) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(message: impl Into<String>) -> Self {
        Self::generic("Api", message)
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::generic("Config", message)
    }

    #[track_caller]
    pub fn display(message: impl Into<String>) -> Self {
        Self::generic("Display", message)
    }

    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::generic("Logging", message)
    }

    #[track_caller]
    pub fn session(message: impl Into<String>) -> Self {
        Self::generic("Session", message)
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
