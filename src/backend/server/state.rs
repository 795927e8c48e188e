/**
 * Application State Management
 *
 * This module defines the request context shared by every handler, guard and
 * middleware, and the `FromRef` impls that let handlers extract only the part
 * they need.
 *
 * # State Extraction
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<SqlitePool>) { /* ... */ }
 * async fn other(State(sessions): State<Arc<SessionIssuer>>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::server::config::ServerConfig;

/// Explicit request context
///
/// # Fields
///
/// * `db` - SQLite connection pool
/// * `sessions` - Token issuer built from the configured secret and lifetime
/// * `config` - Settings the handlers consult (cookie flags, bcrypt cost)
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub sessions: Arc<SessionIssuer>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the state for an already migrated pool
    pub fn new(db: SqlitePool, config: ServerConfig) -> Self {
        let sessions = SessionIssuer::new(config.jwt_secret.as_bytes(), config.session_ttl_secs);
        Self {
            db,
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<SessionIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
