//! Standard-remuneration averaging and bonus figures.
//!
//! This module implements the statutory calculations behind the
//! remuneration filings:
//! - Averaging a three-month salary window into the figures printed on
//!   the standard-remuneration filing
//! - Exclusion of short-paid months and retroactive payments
//! - Truncation of the standard bonus amount

pub mod aggregate;
pub mod bonus;
pub mod types;

#[cfg(test)]
mod props;

pub use aggregate::aggregate;
pub use bonus::standard_bonus;
pub use types::{
    AveragingWindow, RemunerationResult, RetroactivePayment, SalaryMonthEntry,
    ELIGIBLE_BASE_DAYS, WINDOW_MONTHS,
};
