/**
 * Wallet Database Operations
 *
 * Every user owns exactly one wallet row (`wallets.user_id` is UNIQUE).
 * The balance is kept in `balance_number` as an integer and converted with
 * the functions in `wallet::balance` whenever it crosses this boundary.
 */

use rust_decimal::Decimal;
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::wallet::balance::{from_balance, to_balance};

/// Wallet row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Wallet {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Stored integer form of the balance
    pub balance_number: i64,
}

impl Wallet {
    /// Balance as a decimal
    pub fn balance(&self) -> Decimal {
        to_balance(self.balance_number)
    }
}

/// Create the wallet of a freshly registered user with a zero balance.
pub async fn create_wallet<'e, E>(executor: E, user_id: Uuid) -> Result<Wallet, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Wallet>(
        r#"
        INSERT INTO wallets (id, user_id, balance_number)
        VALUES (?, ?, 0)
        RETURNING id, user_id, balance_number
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .fetch_one(executor)
    .await
}

/// Get the wallet owned by a user
pub async fn find_wallet_by_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Option<Wallet>, sqlx::Error> {
    sqlx::query_as::<_, Wallet>(
        r#"
        SELECT id, user_id, balance_number
        FROM wallets
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Replace a user's balance.
///
/// The value is rounded up before it is stored.
///
/// # Errors
///
/// `BackendError::Balance` when the value does not fit the stored range,
/// `BackendError::Database` when the user has no wallet or the write fails.
pub async fn set_balance(
    pool: &SqlitePool,
    user_id: Uuid,
    balance: Decimal,
) -> Result<Wallet, BackendError> {
    tracing::debug!("Setting new balance {} for user {}", balance, user_id);
    let balance_number = from_balance(balance)?;

    let wallet = sqlx::query_as::<_, Wallet>(
        r#"
        UPDATE wallets
        SET balance_number = ?
        WHERE user_id = ?
        RETURNING id, user_id, balance_number
        "#,
    )
    .bind(balance_number)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(wallet)
}
