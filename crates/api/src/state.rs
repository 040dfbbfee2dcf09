use std::sync::Arc;

use pitchside_core::device_store::DeviceStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pitchside_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// File-backed store for opponent markers and saved annotation lines.
    pub device_store: Arc<DeviceStore>,
}
