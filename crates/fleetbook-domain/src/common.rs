//! Shared traits and the statement-month value type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the book.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// A calendar month used for statement filtering, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementMonth {
    pub year: i32,
    pub month: u32,
}

impl StatementMonth {
    /// Builds a month, rejecting values outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, StatementMonthError> {
        if !(1..=12).contains(&month) {
            return Err(StatementMonthError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns `true` when `date` falls inside this calendar month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for StatementMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for StatementMonth {
    type Err = StatementMonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value
            .split_once('-')
            .ok_or_else(|| StatementMonthError::Malformed(value.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| StatementMonthError::Malformed(value.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| StatementMonthError::Malformed(value.to_string()))?;
        Self::new(year, month)
    }
}

/// Errors that can occur when constructing [`StatementMonth`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementMonthError {
    MonthOutOfRange(u32),
    Malformed(String),
}

impl fmt::Display for StatementMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementMonthError::MonthOutOfRange(month) => {
                write!(f, "month {} is outside 1..=12", month)
            }
            StatementMonthError::Malformed(value) => {
                write!(f, "`{}` is not a YYYY-MM month", value)
            }
        }
    }
}

impl std::error::Error for StatementMonthError {}
