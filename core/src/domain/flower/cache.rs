use std::future::Future;
use std::num::NonZeroUsize;

use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::flower::entities::LookupResult;

/// Bounded LRU memo of finished lookups, keyed by normalized flower name.
///
/// The lock is only held for the map operation itself, never across the
/// computation, so concurrent misses on one key may each compute; the last
/// writer wins.
pub struct LookupCache {
    entries: Mutex<LruCache<String, LookupResult>>,
    capacity: NonZeroUsize,
}

impl LookupCache {
    /// A zero capacity is clamped to one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
        }
    }

    pub async fn get(&self, key: &str) -> Option<LookupResult> {
        self.entries.lock().await.get(key).cloned()
    }

    pub async fn put(&self, key: String, result: LookupResult) {
        if let Some((evicted, _)) = self.entries.lock().await.push(key.clone(), result)
            && evicted != key
        {
            debug!(evicted = %evicted, "lookup cache full, evicted least recently used entry");
        }
    }

    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> LookupResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = LookupResult>,
    {
        if let Some(hit) = self.get(key).await {
            debug!(key, "lookup cache hit");
            return hit;
        }

        debug!(key, "lookup cache miss");
        let result = compute().await;
        self.put(key.to_string(), result.clone()).await;
        result
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flower::entities::{FlowerEntry, Safety};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn result(name: &str) -> LookupResult {
        LookupResult::from_entry(&FlowerEntry::new(name, "✅ safe", Safety::Safe))
    }

    #[tokio::test]
    async fn test_get_or_compute_computes_once() {
        let cache = LookupCache::new(10);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_compute("roses", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    result("roses")
                })
                .await;
            assert_eq!(value, result("roses"));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_least_recently_used_is_evicted_first() {
        let cache = LookupCache::new(2);
        cache.put("a".to_string(), result("a")).await;
        cache.put("b".to_string(), result("b")).await;

        // touching "a" makes "b" the eviction candidate
        assert!(cache.get("a").await.is_some());
        cache.put("c".to_string(), result("c")).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("a").await.is_some());
        assert!(cache.get("b").await.is_none());
        assert!(cache.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_error_results_are_stored_like_any_other() {
        let cache = LookupCache::new(4);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_compute("dracaena", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    LookupResult::from_error("dracaena", "timeout")
                })
                .await;
            assert_eq!(value, LookupResult::from_error("dracaena", "timeout"));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        assert_eq!(LookupCache::new(0).capacity(), 1);
    }
}
