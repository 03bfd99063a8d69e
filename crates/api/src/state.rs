use std::sync::Arc;

use keystone_db::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pools and config are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Reader and writer connection pools.
    pub db: Database,
    pub config: Arc<ServerConfig>,
}
