//! Error types for era-calendar conversion.

use chrono::NaiveDate;
use roumu_shared::AppError;
use thiserror::Error;

use crate::calendar::era::Era;

/// Errors that can occur when converting to or from an era date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The era-date components do not form a real calendar date.
    #[error("{era} {year}-{month}-{day} is not a valid calendar date")]
    InvalidEraYear {
        /// The era of the rejected date.
        era: Era,
        /// The era year as entered.
        year: i32,
        /// The month as entered.
        month: u32,
        /// The day as entered.
        day: u32,
    },

    /// The date falls outside the historical span of the era.
    #[error("{date} is outside the span of era {era}")]
    EraRangeExceeded {
        /// The era whose span was exceeded.
        era: Era,
        /// The offending Gregorian date.
        date: NaiveDate,
    },
}

impl CalendarError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidEraYear { .. } | Self::EraRangeExceeded { .. } => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEraYear { .. } => "INVALID_ERA_YEAR",
            Self::EraRangeExceeded { .. } => "ERA_RANGE_EXCEEDED",
        }
    }
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        Self::Validation(err.to_string())
    }
}
