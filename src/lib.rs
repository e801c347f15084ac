// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod filters;
pub mod models;
pub mod render;
pub mod routes;

// Re-export commonly used types
pub use error::{AppError, Result};

use cache::EntityCache;
use db::TransportRepository;
use filters::SessionStore;
use std::sync::Arc;

// App state for sharing across the application
pub struct AppState {
    pub repo: Arc<dyn TransportRepository>,
    pub cache: EntityCache,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn TransportRepository>,
        table_cache_ttl: u64,
        table_row_limit: i64,
        session_idle_timeout: u64,
    ) -> Self {
        AppState {
            cache: EntityCache::new(repo.clone(), table_cache_ttl, table_row_limit),
            sessions: SessionStore::new(session_idle_timeout),
            repo,
        }
    }
}
