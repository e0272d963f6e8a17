//! The standard-remuneration averaging calculation.

use roumu_shared::types::Yen;

use crate::remuneration::types::{
    RemunerationResult, RetroactivePayment, SalaryMonthEntry, WINDOW_MONTHS,
};

/// Computes the figures printed on a remuneration filing from a
/// three-month salary window.
///
/// Months with fewer than 17 base days are excluded from the total and
/// both averages. Retroactive payments are subtracted from the adjusted
/// total regardless of which month they landed in. All division is floor
/// division; fractional yen are truncated, never rounded. When no month
/// is eligible both averages are `None` - there is nothing to divide by.
///
/// Pure and idempotent; inputs are not mutated.
#[must_use]
pub fn aggregate(
    entries: &[SalaryMonthEntry; WINDOW_MONTHS],
    retro: &[RetroactivePayment; WINDOW_MONTHS],
) -> RemunerationResult {
    let eligible_months = entries.iter().filter(|e| e.is_eligible()).count();
    let total: Yen = entries
        .iter()
        .filter(|e| e.is_eligible())
        .map(SalaryMonthEntry::total)
        .sum();
    let retro_total: Yen = retro.iter().map(|r| r.amount).sum();
    let adjusted_total = total - retro_total;

    let (average, adjusted_average) = if eligible_months == 0 {
        (None, None)
    } else {
        let divisor = eligible_months as i64;
        (
            Some(total.floor_div(divisor)),
            Some(adjusted_total.floor_div(divisor)),
        )
    };

    RemunerationResult {
        total,
        average,
        adjusted_total,
        adjusted_average,
        eligible_months: eligible_months as u32,
    }
}
