//! Property tests for fine payments.

use proptest::prelude::*;

use libris::{ErrorKind, Money, Patron};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: paying more than the balance is a no-op; otherwise exact.
    #[test]
    fn property_payment_is_exact_or_rejected(balance in 0u64..1_000_000, amount in 0u64..1_000_000) {
        let mut patron = Patron::new("P001", "Name", "", "");
        patron.add_fine(Money::from_minor(balance));

        let result = patron.pay_fine(Money::from_minor(amount));

        if amount > balance {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::PaymentExceedsBalance);
            prop_assert_eq!(patron.fine_balance(), Money::from_minor(balance));
        } else {
            prop_assert_eq!(result.unwrap(), Money::from_minor(balance - amount));
            prop_assert_eq!(patron.fine_balance(), Money::from_minor(balance - amount));
        }
    }
}
