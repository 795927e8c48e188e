/**
 * Wallet Balance Handler
 *
 * `GET /api/wallet/balance`, behind the session guard.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::wallet::repository::find_wallet_by_user;
use crate::shared::{ApiEnvelope, BalanceData};

/// Balance of the signed-in user's wallet
///
/// # Errors
///
/// * `500 Internal Server Error` - Database failure, or the user has no wallet
pub async fn get_balance(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<ApiEnvelope<BalanceData>>, BackendError> {
    let wallet = find_wallet_by_user(&pool, user.user_id)
        .await?
        .ok_or_else(|| BackendError::internal(format!("No wallet for user {}", user.user_id)))?;

    Ok(Json(ApiEnvelope::success(BalanceData {
        balance: wallet.balance(),
    })))
}
