use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

mod transport_queries;
pub mod transport_repository;

/// Re-export query functions under `queries`
pub mod queries {
    pub use super::transport_queries::*;
}

pub use transport_repository::{PgTransportRepository, TransportRepository};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
