/**
 * Get Current User Handler
 *
 * `GET /api/account/user`, behind the session guard. Returns the projection
 * of the signed-in user.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{ApiEnvelope, UserProjection};

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - The user was removed after the session was issued
/// * `500 Internal Server Error` - Database failure
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ApiEnvelope<UserProjection>>, BackendError> {
    let user = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or(BackendError::Unauthorized)?;

    Ok(Json(ApiEnvelope::success(user.projection())))
}
