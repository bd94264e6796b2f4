use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use chrono::{Datelike, Local, NaiveDate};
use error_location::ErrorLocation;

pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 9999;

/// A validated (month, year) pair. Months are 1-12, as the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BudgetPeriod {
    month: u32,
    year: i32,
}

impl BudgetPeriod {
    #[track_caller]
    pub fn new(month: u32, year: i32) -> CoreResult<Self> {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CoreError::InvalidPeriod {
                month,
                year,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self { month, year })
    }

    /// The period containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// The current local calendar month.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    #[track_caller]
    pub fn with_month(&self, month: u32) -> CoreResult<Self> {
        Self::new(month, self.year)
    }

    #[track_caller]
    pub fn with_year(&self, year: i32) -> CoreResult<Self> {
        Self::new(self.month, year)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for BudgetPeriod {
    /// `March 2024`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_day() {
            Some(day) => write!(f, "{}", day.format("%B %Y")),
            None => write!(f, "{:02}/{}", self.month, self.year),
        }
    }
}
