//! The `EraDate` value type and Gregorian conversion.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::era::Era;
use crate::calendar::error::CalendarError;

/// A calendar date expressed in the Japanese era calendar.
///
/// Immutable value type: conversions build a new `EraDate`, it is never
/// mutated in place. Field order gives derived ordering that matches
/// Gregorian order for valid dates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EraDate {
    /// The era this date belongs to.
    pub era: Era,
    /// Year within the era, starting at 1.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

impl EraDate {
    /// Converts a Gregorian date into the era calendar.
    ///
    /// The era is selected by day span, so a date on the first day of an
    /// era belongs to the new era (2019-05-01 is Reiwa 1, not Heisei 31).
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::EraRangeExceeded` for dates before
    /// 1912-07-30, the start of the supported range.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let era = Era::for_date(date).ok_or(CalendarError::EraRangeExceeded {
            era: Era::Taisho,
            date,
        })?;
        Ok(Self {
            era,
            year: date.year() - era.epoch_year() + 1,
            month: date.month(),
            day: date.day(),
        })
    }

    /// Converts this era date back to a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidEraYear` when the components do not
    /// form a real calendar date (era year below 1, month out of range,
    /// or a day that does not exist in the resulting Gregorian month),
    /// and `CalendarError::EraRangeExceeded` when the date is real but
    /// falls outside the era's historical span (e.g. Showa 65).
    pub fn to_gregorian(&self) -> Result<NaiveDate, CalendarError> {
        let invalid = CalendarError::InvalidEraYear {
            era: self.era,
            year: self.year,
            month: self.month,
            day: self.day,
        };
        if self.year < 1 {
            return Err(invalid);
        }
        let gregorian_year = self.era.epoch_year() + self.year - 1;
        let date =
            NaiveDate::from_ymd_opt(gregorian_year, self.month, self.day).ok_or(invalid)?;
        if !self.era.contains(date) {
            return Err(CalendarError::EraRangeExceeded {
                era: self.era,
                date,
            });
        }
        Ok(date)
    }

    /// Returns true if the era year is the first year of the era.
    #[must_use]
    pub const fn is_first_year(&self) -> bool {
        self.year == 1
    }
}

impl fmt::Display for EraDate {
    /// Renders the statutory kanji form, with the first year written 元年.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_first_year() {
            write!(f, "{}元年{}月{}日", self.era.kanji(), self.month, self.day)
        } else {
            write!(
                f,
                "{}{}年{}月{}日",
                self.era.kanji(),
                self.year,
                self.month,
                self.day
            )
        }
    }
}
