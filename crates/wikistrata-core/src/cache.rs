//! In-memory result cache with lazy expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::domain::GeologicalPeriod;

/// Default time-to-live for cached query results.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<GeologicalPeriod>,
    stored_at: Instant,
}

/// Keyed store of query results, shared across client clones.
///
/// Expiry is lazy: an entry past its TTL stays in the map and is simply
/// never returned. The next insert for the same key replaces it. There
/// is no eviction and no delete; the working set is bounded by the
/// number of distinct option combinations callers actually use.
#[derive(Debug, Clone)]
pub struct PeriodCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl PeriodCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Fetch a cached result if it is still fresh.
    pub async fn get(&self, key: &str) -> Option<Vec<GeologicalPeriod>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.data.clone())
        } else {
            None
        }
    }

    /// Store a result, replacing any previous entry for the key.
    pub async fn insert(&self, key: String, data: Vec<GeologicalPeriod>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                data,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, fresh or stale. Diagnostic only.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for PeriodCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(id: &str) -> GeologicalPeriod {
        GeologicalPeriod {
            id: id.to_string(),
            label: format!("Period {id}"),
            description: None,
            start_date: None,
            end_date: None,
            parent_period: None,
            child_periods: Vec::new(),
        }
    }

    #[tokio::test]
    async fn fresh_entry_is_returned() {
        let cache = PeriodCache::new(Duration::from_secs(60));
        cache.insert("20-0-fr-root".to_string(), vec![period("Q104460")]).await;

        let hit = cache.get("20-0-fr-root").await;
        assert_eq!(hit.map(|p| p.len()), Some(1));
    }

    #[tokio::test]
    async fn missing_key_is_a_miss() {
        let cache = PeriodCache::new(Duration::from_secs(60));
        assert!(cache.get("20-0-fr-root").await.is_none());
    }

    #[tokio::test]
    async fn expired_entry_is_a_miss_but_lingers() {
        let cache = PeriodCache::new(Duration::from_millis(10));
        cache.insert("k".to_string(), vec![period("Q104162")]).await;

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(cache.get("k").await.is_none());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn insert_replaces_existing_entry() {
        let cache = PeriodCache::new(Duration::from_secs(60));
        cache.insert("k".to_string(), vec![period("Q1")]).await;
        cache.insert("k".to_string(), vec![period("Q2"), period("Q3")]).await;

        let hit = cache.get("k").await;
        assert_eq!(hit.map(|p| p.len()), Some(2));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let cache = PeriodCache::new(Duration::from_secs(60));
        let other = cache.clone();

        cache.insert("k".to_string(), vec![period("Q101313")]).await;
        assert!(other.get("k").await.is_some());
    }
}
