/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse` so handlers and guards can return
 * it directly. The body uses the same envelope as successful responses:
 *
 * ```json
 * { "error": "Invalid username or password", "data": null }
 * ```
 *
 * Validation failures answer with an empty `error`:
 *
 * ```json
 * { "error": "", "data": null }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::ApiEnvelope;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else if let Self::Validation { field, message } = &self {
            tracing::warn!("Rejected request, field '{}': {}", field, message);
        }

        let body: ApiEnvelope<()> = ApiEnvelope::failure(self.message());
        (status, Json(body)).into_response()
    }
}
