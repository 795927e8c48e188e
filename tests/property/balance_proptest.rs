//! Property tests for the stored balance conversion

use proptest::prelude::*;
use rust_decimal::Decimal;
use walletbox::backend::wallet::{from_balance, to_balance};

proptest! {
    #[test]
    fn stored_balance_never_rounds_down(mantissa in -1_000_000_000_000i64..1_000_000_000_000i64, scale in 0u32..6) {
        let balance = Decimal::new(mantissa, scale);
        let stored = to_balance(from_balance(balance).unwrap());

        prop_assert!(stored >= balance);
        prop_assert!(stored - balance < Decimal::ONE);
    }

    #[test]
    fn whole_balances_are_stored_exactly(value in any::<i64>()) {
        prop_assert_eq!(from_balance(to_balance(value)).unwrap(), value);
    }
}
