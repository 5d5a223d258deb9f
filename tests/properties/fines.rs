//! Property tests for fine calculation.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use libris::{FixedClock, LendingService, LoanPolicy, Money};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn offset(days: i64) -> NaiveDate {
    if days >= 0 {
        today() + Days::new(days as u64)
    } else {
        today() - Days::new(days.unsigned_abs())
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: fine is 0 on or before today - 14, else 10 per day after it.
    #[test]
    fn property_fine_matches_formula(delta in -400i64..400) {
        let service = LendingService::new(LoanPolicy::default(), FixedClock(today()));
        let fine = service.calculate_fine(offset(delta));

        let days_late = delta + 14;
        let expected = if days_late <= 0 {
            Money::ZERO
        } else {
            Money::from_units(10 * days_late as u64)
        };
        prop_assert_eq!(fine, expected);
    }

    /// PROPERTY: a later return date never yields a smaller fine.
    #[test]
    fn property_fine_is_monotonic(a in -400i64..400, b in -400i64..400) {
        let service = LendingService::new(LoanPolicy::default(), FixedClock(today()));
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(service.calculate_fine(offset(early)) <= service.calculate_fine(offset(late)));
    }

    /// PROPERTY: custom policies scale the same formula.
    #[test]
    fn property_custom_policy_formula(
        period in 1u32..60,
        rate_minor in 0u64..5_000,
        delta in -200i64..200,
    ) {
        let policy = LoanPolicy::new(period, Money::from_minor(rate_minor));
        let service = LendingService::new(policy, FixedClock(today()));

        let days_late = delta + i64::from(period);
        let expected = if days_late <= 0 {
            Money::ZERO
        } else {
            Money::from_minor(rate_minor * days_late as u64)
        };
        prop_assert_eq!(service.calculate_fine(offset(delta)), expected);
    }
}
