use crate::cache::CacheStats;
use crate::db::TransportRepository;
use crate::error::Result;
use crate::models::{EntitySet, Personnel, Route, Schedule, Stop};
use moka::future::Cache;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A cached, immutable list of rows for one entity set.
#[derive(Debug, Clone)]
pub enum Snapshot {
    Personnel(Arc<Vec<Personnel>>),
    Routes(Arc<Vec<Route>>),
    Schedules(Arc<Vec<Schedule>>),
    Stops(Arc<Vec<Stop>>),
}

impl Snapshot {
    #[cfg(test)]
    fn len(&self) -> usize {
        match self {
            Snapshot::Personnel(rows) => rows.len(),
            Snapshot::Routes(rows) => rows.len(),
            Snapshot::Schedules(rows) => rows.len(),
            Snapshot::Stops(rows) => rows.len(),
        }
    }
}

/// Row types that can be stored in a [`Snapshot`].
pub trait Snapshotted: Sized {
    const SET: EntitySet;

    fn into_snapshot(rows: Arc<Vec<Self>>) -> Snapshot;

    fn from_snapshot(snapshot: Snapshot) -> Option<Arc<Vec<Self>>>;
}

macro_rules! snapshotted {
    ($ty:ty, $set:ident, $variant:ident) => {
        impl Snapshotted for $ty {
            const SET: EntitySet = EntitySet::$set;

            fn into_snapshot(rows: Arc<Vec<Self>>) -> Snapshot {
                Snapshot::$variant(rows)
            }

            fn from_snapshot(snapshot: Snapshot) -> Option<Arc<Vec<Self>>> {
                match snapshot {
                    Snapshot::$variant(rows) => Some(rows),
                    _ => None,
                }
            }
        }
    };
}

snapshotted!(Personnel, Personnel, Personnel);
snapshotted!(Route, Route, Routes);
snapshotted!(Schedule, Schedule, Schedules);
snapshotted!(Stop, Stop, Stops);

/// In-memory read-through cache backed by moka, one slot per entity set.
///
/// A miss loads at most `row_limit` rows from the repository and keeps them
/// for the configured TTL. Hits never consult the store. Concurrent misses
/// may each query the store; the last insert wins. Failed loads are not cached.
pub struct EntityCache {
    repo: Arc<dyn TransportRepository>,
    row_limit: i64,
    snapshots: Cache<EntitySet, Snapshot>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EntityCache {
    pub fn new(repo: Arc<dyn TransportRepository>, ttl_seconds: u64, row_limit: i64) -> Self {
        let snapshots = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(EntitySet::ALL.len() as u64)
            .build();

        EntityCache {
            repo,
            row_limit,
            snapshots,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub async fn routes(&self) -> Result<Arc<Vec<Route>>> {
        self.read_through(|| self.repo.routes(self.row_limit)).await
    }

    pub async fn schedules(&self) -> Result<Arc<Vec<Schedule>>> {
        self.read_through(|| self.repo.schedules(self.row_limit)).await
    }

    pub async fn stops(&self) -> Result<Arc<Vec<Stop>>> {
        self.read_through(|| self.repo.stops(self.row_limit)).await
    }

    pub async fn personnel(&self) -> Result<Arc<Vec<Personnel>>> {
        self.read_through(|| self.repo.personnel(self.row_limit)).await
    }

    async fn read_through<T, F, Fut>(&self, load: F) -> Result<Arc<Vec<T>>>
    where
        T: Snapshotted,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        if let Some(rows) = self.snapshots.get(&T::SET).await.and_then(T::from_snapshot) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Table cache hit for {}: {} rows", T::SET, rows.len());
            return Ok(rows);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Table cache miss for {}", T::SET);

        let mut rows = load().await?;
        rows.truncate(self.row_limit.max(0) as usize);
        let rows = Arc::new(rows);
        self.snapshots
            .insert(T::SET, T::into_snapshot(rows.clone()))
            .await;
        tracing::debug!(
            hit_rate = self.stats().hit_rate,
            "Table cache filled {} with {} rows",
            T::SET,
            rows.len()
        );

        Ok(rows)
    }

    /// The snapshot currently held for `set`, if any, without loading.
    #[cfg(test)]
    async fn peek(&self, set: EntitySet) -> Option<Snapshot> {
        self.snapshots.get(&set).await
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats::new(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
