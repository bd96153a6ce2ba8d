use std::sync::Arc;

use atelier_assets::AssetStore;

use crate::auth::google::GoogleOAuth;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Remote image CDN. Behind a trait so tests can substitute a stub.
    pub assets: Arc<dyn AssetStore>,
    /// Client for the Google OAuth endpoints.
    pub google: Arc<GoogleOAuth>,
}
