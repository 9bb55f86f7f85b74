use std::sync::Arc;

use playcrate_cache::CacheClient;

use crate::config::AppConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool and cache client share their connections
/// across clones.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: playcrate_db::DbPool,
    /// Shared Redis cache client (leaderboard views, pet snapshot).
    pub cache: CacheClient,
    /// Server configuration.
    pub config: Arc<AppConfig>,
}
