//! Property-based tests for the remuneration calculations.

use proptest::prelude::*;
use roumu_shared::types::Yen;

use crate::remuneration::aggregate::aggregate;
use crate::remuneration::bonus::standard_bonus;
use crate::remuneration::types::{RetroactivePayment, SalaryMonthEntry, WINDOW_MONTHS};

fn arb_entry(month: u32) -> impl Strategy<Value = SalaryMonthEntry> {
    (0u32..=31, 0i64..2_000_000, 0i64..200_000).prop_map(move |(base_days, cash, in_kind)| {
        SalaryMonthEntry {
            month,
            base_days,
            cash: Yen::new(cash),
            in_kind: Yen::new(in_kind),
        }
    })
}

fn arb_window() -> impl Strategy<Value = [SalaryMonthEntry; WINDOW_MONTHS]> {
    (arb_entry(4), arb_entry(5), arb_entry(6)).prop_map(|(a, b, c)| [a, b, c])
}

fn arb_retro() -> impl Strategy<Value = [RetroactivePayment; WINDOW_MONTHS]> {
    (0i64..100_000, 0i64..100_000, 0i64..100_000).prop_map(|(a, b, c)| {
        [
            RetroactivePayment { month: 4, amount: Yen::new(a) },
            RetroactivePayment { month: 5, amount: Yen::new(b) },
            RetroactivePayment { month: 6, amount: Yen::new(c) },
        ]
    })
}

proptest! {
    /// Floor-division bound: average * n <= total < (average + 1) * n.
    #[test]
    fn prop_average_is_floored(entries in arb_window(), retro in arb_retro()) {
        let result = aggregate(&entries, &retro);
        if let Some(average) = result.average {
            let n = i64::from(result.eligible_months);
            prop_assert!(average.into_inner() * n <= result.total.into_inner());
            prop_assert!(result.total.into_inner() < (average.into_inner() + 1) * n);
        } else {
            prop_assert_eq!(result.eligible_months, 0);
        }
    }

    /// The adjusted average never exceeds the unadjusted average.
    #[test]
    fn prop_adjusted_never_exceeds_average(entries in arb_window(), retro in arb_retro()) {
        let result = aggregate(&entries, &retro);
        if let (Some(average), Some(adjusted)) = (result.average, result.adjusted_average) {
            prop_assert!(adjusted <= average);
        }
    }

    /// Amounts in ineligible months never influence the total or average.
    #[test]
    fn prop_ineligible_amounts_ignored(
        entries in arb_window(),
        retro in arb_retro(),
        replacement in 0i64..5_000_000,
    ) {
        let result = aggregate(&entries, &retro);
        let mut perturbed = entries;
        for entry in &mut perturbed {
            if !entry.is_eligible() {
                entry.cash = Yen::new(replacement);
            }
        }
        let perturbed_result = aggregate(&perturbed, &retro);
        prop_assert_eq!(result.total, perturbed_result.total);
        prop_assert_eq!(result.average, perturbed_result.average);
    }

    /// Which month a retro payment belongs to does not change the result.
    #[test]
    fn prop_retro_month_is_irrelevant(entries in arb_window(), retro in arb_retro()) {
        let result = aggregate(&entries, &retro);
        let rotated = [retro[2], retro[0], retro[1]];
        prop_assert_eq!(result, aggregate(&entries, &rotated));
    }

    /// The bonus figure is a multiple of 1,000 within 999 yen of the raw sum.
    #[test]
    fn prop_bonus_truncates_to_thousand(cash in 0i64..10_000_000, in_kind in 0i64..1_000_000) {
        let bonus = standard_bonus(Yen::new(cash), Yen::new(in_kind));
        prop_assert_eq!(bonus.into_inner() % 1000, 0);
        let raw = cash + in_kind;
        prop_assert!(bonus.into_inner() <= raw);
        prop_assert!(raw - bonus.into_inner() < 1000);
    }

    /// Bonus truncation is monotone in its inputs.
    #[test]
    fn prop_bonus_is_monotone(cash in 0i64..10_000_000, extra in 0i64..1_000_000) {
        let lower = standard_bonus(Yen::new(cash), Yen::ZERO);
        let higher = standard_bonus(Yen::new(cash + extra), Yen::ZERO);
        prop_assert!(lower <= higher);
    }
}
