//! Property-based tests for era-calendar conversion.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::calendar::date::EraDate;
use crate::calendar::era::Era;

/// Strategy for any supported Gregorian date (1912-07-30 through the 2030s).
fn arb_supported_date() -> impl Strategy<Value = NaiveDate> {
    // ~43,000 days after the start of Taisho reaches past 2030
    (0u64..43_000).prop_map(|offset| {
        Era::Taisho
            .start()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

proptest! {
    /// Round-trip law: converting to an era date and back is the identity.
    #[test]
    fn prop_round_trip(date in arb_supported_date()) {
        let era_date = EraDate::from_gregorian(date).unwrap();
        prop_assert_eq!(era_date.to_gregorian().unwrap(), date);
    }

    /// Era years start at 1 and the era's span contains the date.
    #[test]
    fn prop_era_year_positive_and_in_span(date in arb_supported_date()) {
        let era_date = EraDate::from_gregorian(date).unwrap();
        prop_assert!(era_date.year >= 1);
        prop_assert!(era_date.era.contains(date));
    }

    /// Exactly one era claims each supported date.
    #[test]
    fn prop_exactly_one_era(date in arb_supported_date()) {
        let claiming = Era::ALL.into_iter().filter(|era| era.contains(date)).count();
        prop_assert_eq!(claiming, 1);
    }

    /// Derived ordering on EraDate matches Gregorian ordering.
    #[test]
    fn prop_ordering_matches_gregorian(
        a in arb_supported_date(),
        b in arb_supported_date(),
    ) {
        let ea = EraDate::from_gregorian(a).unwrap();
        let eb = EraDate::from_gregorian(b).unwrap();
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
    }
}
