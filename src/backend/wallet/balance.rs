/**
 * Balance Conversion
 *
 * Wallet balances are stored as whole integers (`balance_number`) and handed
 * to callers as `Decimal`. The two functions here are the only place the
 * representations meet; repositories call them at the persistence boundary.
 *
 * Writing rounds up: a balance of `3.2` is stored as `4` and reads back as `4`.
 */

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("balance {0} does not fit into the stored integer range")]
    OutOfRange(Decimal),
}

/// Read a stored integer balance as a decimal.
pub fn to_balance(balance_number: i64) -> Decimal {
    Decimal::from(balance_number)
}

/// Convert a decimal balance to its stored integer form, rounding up.
///
/// # Errors
///
/// `BalanceError::OutOfRange` if the ceiling does not fit in an `i64`.
pub fn from_balance(balance: Decimal) -> Result<i64, BalanceError> {
    balance
        .ceil()
        .to_i64()
        .ok_or(BalanceError::OutOfRange(balance))
}
