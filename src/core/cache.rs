//! In-process memoization for assembled results.
//!
//! Scraping three-plus pages per request is far too slow to repeat on
//! every call, so the aggregation entry points run through a TTL cache
//! keyed by operation. Values are cached whether or not they are empty;
//! an upstream outage produces an empty listing set that is served for
//! the full TTL like any other result.
//!
//! There is no single-flight guard. Two tasks that miss the same key
//! concurrently both run the producer and the later completion wins,
//! which is harmless because producers are idempotent.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::core::models::IpoListing;

/// Cache segments that can be invalidated independently of TTL expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTag {
    /// The assembled listing set behind [`crate::board::IpoBoard::active`].
    ActiveListings,
    /// Single-listing lookups behind [`crate::board::IpoBoard::by_slug`].
    ListingLookup,
}

#[derive(Debug, Clone)]
struct MemoEntry<V> {
    value: V,
    expires_at: Instant,
}

/// A TTL map from operation key to memoized value.
#[derive(Debug)]
pub(crate) struct MemoCache<V> {
    entries: RwLock<HashMap<String, MemoEntry<V>>>,
}

impl<V> Default for MemoCache<V> {
    fn default() -> Self {
        MemoCache {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<V: Clone> MemoCache<V> {
    async fn get(&self, key: &str) -> Option<V> {
        let guard = self.entries.read().await;
        let entry = guard.get(key)?;
        (entry.expires_at > Instant::now()).then(|| entry.value.clone())
    }

    async fn put(&self, key: &str, value: V, ttl: Duration) {
        let mut guard = self.entries.write().await;
        guard.insert(
            key.to_string(),
            MemoEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Returns the fresh value under `key`, running `produce` on a miss
    /// and storing its output for `ttl`. A zero TTL makes every call a
    /// miss. The lock is never held across the producer await.
    pub(crate) async fn get_or_else<F, Fut>(&self, key: &str, ttl: Duration, produce: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        if let Some(hit) = self.get(key).await {
            return hit;
        }
        let value = produce().await;
        self.put(key, value.clone(), ttl).await;
        value
    }
}

/// The client's cache segments, one per memoized operation shape.
#[derive(Debug, Default)]
pub(crate) struct MemoStore {
    active: MemoCache<Vec<IpoListing>>,
    lookup: MemoCache<Option<IpoListing>>,
}

impl MemoStore {
    pub(crate) fn active(&self) -> &MemoCache<Vec<IpoListing>> {
        &self.active
    }

    pub(crate) fn lookup(&self) -> &MemoCache<Option<IpoListing>> {
        &self.lookup
    }

    pub(crate) async fn invalidate(&self, tag: CacheTag) {
        match tag {
            CacheTag::ActiveListings => self.active.clear().await,
            CacheTag::ListingLookup => self.lookup.clear().await,
        }
    }

    pub(crate) async fn flush(&self) {
        self.active.clear().await;
        self.lookup.clear().await;
    }
}
