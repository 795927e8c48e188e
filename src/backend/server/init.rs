/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Open the database and run migrations
 * 2. Build the session issuer and `AppState`
 * 3. Create the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated; the server does
/// not start without its store.
pub async fn create_app(config: ServerConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing walletbox backend server");

    let db = load_database(&config.database_url).await?;
    let app_state = AppState::new(db, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
