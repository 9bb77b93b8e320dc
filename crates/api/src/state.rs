use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally and the config sits
/// behind one.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pantry_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
