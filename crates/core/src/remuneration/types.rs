//! Domain types for the remuneration averaging window.

use roumu_shared::types::Yen;
use serde::{Deserialize, Serialize};

/// Minimum base days for a month to count toward the average.
///
/// A month paid for fewer days is excluded from both the total and the
/// averages; it does not represent a normal month of remuneration.
pub const ELIGIBLE_BASE_DAYS: u32 = 17;

/// Number of months in an averaging window.
pub const WINDOW_MONTHS: usize = 3;

/// One month's raw salary figures inside an averaging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryMonthEntry {
    /// Calendar month (1-12) this entry belongs to.
    pub month: u32,
    /// Days counted as worked/paid in the month.
    pub base_days: u32,
    /// Cash remuneration paid in the month.
    pub cash: Yen,
    /// Non-cash (in-kind) remuneration valued for the month.
    pub in_kind: Yen,
}

impl SalaryMonthEntry {
    /// Total remuneration for the month.
    #[must_use]
    pub fn total(&self) -> Yen {
        self.cash + self.in_kind
    }

    /// Returns true if the month counts toward the average.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.base_days >= ELIGIBLE_BASE_DAYS
    }
}

/// Back-pay included in a month's cash figure.
///
/// Retroactive pay inflates the month it was paid in but must be excluded
/// from the adjusted average, which reflects the long-run remuneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetroactivePayment {
    /// Calendar month (1-12) the back-pay landed in.
    pub month: u32,
    /// Amount of back-pay folded into that month's cash figure.
    pub amount: Yen,
}

/// The three-month window a remuneration filing averages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AveragingWindow {
    /// April through June, used by the standard annual revision.
    Annual,
    /// Three consecutive months starting at `first_month`, used when a
    /// fixed-pay change triggers an off-cycle recalculation. Wraps over
    /// the year end (e.g. starting in December covers 12, 1, 2).
    Revision {
        /// First month of the window (1-12).
        first_month: u32,
    },
}

impl AveragingWindow {
    /// The calendar months covered by the window, in order.
    #[must_use]
    pub fn months(self) -> [u32; WINDOW_MONTHS] {
        match self {
            Self::Annual => [4, 5, 6],
            Self::Revision { first_month } => {
                let mut months = [0; WINDOW_MONTHS];
                for (i, slot) in months.iter_mut().enumerate() {
                    *slot = (first_month - 1 + i as u32) % 12 + 1;
                }
                months
            }
        }
    }
}

/// Derived figures for a remuneration filing.
///
/// Never persisted independently of its inputs; recomputed whenever any
/// entry or retroactive payment changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemunerationResult {
    /// Sum of eligible months' totals.
    pub total: Yen,
    /// Floored average over eligible months; `None` when no month is eligible.
    pub average: Option<Yen>,
    /// Total minus all retroactive payments.
    pub adjusted_total: Yen,
    /// Floored adjusted average; `None` when no month is eligible.
    pub adjusted_average: Option<Yen>,
    /// Number of months that counted toward the averages.
    pub eligible_months: u32,
}
