//! Integer yen money type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Statutory amounts in this domain are whole yen; fractions are truncated
//! (floored), never rounded to nearest.

use serde::{Deserialize, Serialize};

/// A monetary amount in whole Japanese yen.
///
/// Wraps `i64` so that the floor-division rules of the remuneration
/// calculations are exact. Amounts supplied by the form layer are
/// non-negative; intermediate results (e.g. an adjusted total after
/// subtracting retroactive pay) may go negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Yen(pub i64);

impl Yen {
    /// Zero yen.
    pub const ZERO: Self = Self(0);

    /// Creates a new amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns the inner amount.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Floor-divides the amount by `divisor`.
    ///
    /// Uses Euclidean division so the result is floored toward negative
    /// infinity even for negative amounts, matching the statutory
    /// truncate-fractional-yen convention.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero; callers guard the zero case.
    #[must_use]
    pub const fn floor_div(self, divisor: i64) -> Self {
        Self(self.0.div_euclid(divisor))
    }

    /// Floors the amount down to the nearest lower multiple of 1,000 yen.
    #[must_use]
    pub const fn floor_to_thousand(self) -> Self {
        Self(self.0.div_euclid(1000) * 1000)
    }
}

impl std::ops::Add for Yen {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Yen {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Yen {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Yen {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, y| acc + y)
    }
}

impl std::fmt::Display for Yen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Yen {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}
