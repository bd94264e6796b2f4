use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed set of labels an expense can be filed under.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Shopping,
    Health,
    /// Also receives labels the backend knows but this client does not
    Others,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive, so `food` and `Food` both parse
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Labels match case-insensitively, like `FromStr`. Unknown labels become `Others`.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(label.parse().unwrap_or(Self::Others))
    }
}
