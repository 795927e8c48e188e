/**
 * Router Configuration
 *
 * Combines the API routes, the 404 fallback and request tracing into the
 * router served by the binary.
 */

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::ApiEnvelope;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Request context shared by every handler
///
/// # Returns
///
/// Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiEnvelope::<()>::failure("Not found")))
}
