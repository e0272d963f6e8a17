//! Conversion between Gregorian dates and the Japanese era calendar.
//!
//! Every date printed on a statutory form uses the era calendar
//! (Taisho/Showa/Heisei/Reiwa). This module implements:
//! - Era definitions with their historical day spans
//! - The `EraDate` value type and bidirectional conversion
//! - Error types for out-of-range and malformed era dates

pub mod date;
pub mod era;
pub mod error;

#[cfg(test)]
mod props;

pub use date::EraDate;
pub use era::Era;
pub use error::CalendarError;
