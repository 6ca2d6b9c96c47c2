use std::sync::Arc;

use siloshare_core::store::NoteStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory note store.
    pub store: Arc<NoteStore>,
    /// Server configuration (read by the auth extractor).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with a fresh store configured from `config`.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(NoteStore::new(config.store)),
            config: Arc::new(config),
        }
    }
}
