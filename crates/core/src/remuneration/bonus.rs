//! Standard bonus amount truncation.

use roumu_shared::types::Yen;

/// Computes the standard bonus amount for a bonus filing.
///
/// The cash and in-kind figures are summed and floored to the nearest
/// lower thousand yen. Total function over non-negative inputs; the
/// caller rejects negative amounts before they reach this core.
#[must_use]
pub fn standard_bonus(cash: Yen, in_kind: Yen) -> Yen {
    (cash + in_kind).floor_to_thousand()
}
