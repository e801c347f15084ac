use crate::error::Result;
use crate::models::{Personnel, Route, RouteCriteria, Schedule, Stop};
use async_trait::async_trait;

/// Read-only access to the transport tables.
///
/// `limit` caps the number of rows returned; order is whatever the store yields.
#[async_trait]
pub trait TransportRepository: Send + Sync {
    async fn routes(&self, limit: i64) -> Result<Vec<Route>>;

    async fn schedules(&self, limit: i64) -> Result<Vec<Schedule>>;

    async fn stops(&self, limit: i64) -> Result<Vec<Stop>>;

    async fn personnel(&self, limit: i64) -> Result<Vec<Personnel>>;

    /// Distinct transport types across all routes.
    async fn transport_types(&self) -> Result<Vec<String>>;

    async fn search_routes(&self, criteria: &RouteCriteria) -> Result<Vec<Route>>;
}

pub struct PgTransportRepository {
    pool: sqlx::PgPool,
}

impl PgTransportRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransportRepository for PgTransportRepository {
    async fn routes(&self, limit: i64) -> Result<Vec<Route>> {
        Ok(super::transport_queries::list_routes(&self.pool, limit).await?)
    }

    async fn schedules(&self, limit: i64) -> Result<Vec<Schedule>> {
        Ok(super::transport_queries::list_schedules(&self.pool, limit).await?)
    }

    async fn stops(&self, limit: i64) -> Result<Vec<Stop>> {
        Ok(super::transport_queries::list_stops(&self.pool, limit).await?)
    }

    async fn personnel(&self, limit: i64) -> Result<Vec<Personnel>> {
        Ok(super::transport_queries::list_personnel(&self.pool, limit).await?)
    }

    async fn transport_types(&self) -> Result<Vec<String>> {
        Ok(super::transport_queries::distinct_transport_types(&self.pool).await?)
    }

    async fn search_routes(&self, criteria: &RouteCriteria) -> Result<Vec<Route>> {
        let routes = super::transport_queries::search_routes(&self.pool, criteria).await?;
        tracing::debug!(?criteria, "Route search returned {} rows", routes.len());
        Ok(routes)
    }
}
