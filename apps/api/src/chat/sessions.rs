//! Keyed store of in-memory chat histories, one per session key.
//!
//! Replaces an unbounded process-wide map: capacity-bounded LRU with a TTL,
//! owned by the orchestrator and passed by handle. Histories are ephemeral
//! and lost on restart; only the tracker state is persisted.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use lru::LruCache;
use tokio::sync::Mutex as AsyncMutex;

use crate::llm_client::Content;

/// Shared handle to one session's transcript. Locked across the whole turn
/// so concurrent requests for the same key serialize instead of forking the
/// conversational memory.
pub type SessionHistory = Arc<AsyncMutex<Vec<Content>>>;

struct SessionEntry {
    history: SessionHistory,
    last_used: Instant,
}

pub struct SessionStore {
    inner: Mutex<LruCache<String, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Returns the history for `key`, lazily creating it on first access and
    /// replacing it with a fresh one when the TTL has lapsed.
    pub fn get_or_create(&self, key: &str) -> SessionHistory {
        let mut cache = self.inner.lock().expect("session store lock poisoned");

        if let Some(entry) = cache.get_mut(key) {
            if entry.last_used.elapsed() <= self.ttl {
                entry.last_used = Instant::now();
                return Arc::clone(&entry.history);
            }
        }

        let history: SessionHistory = Arc::new(AsyncMutex::new(Vec::new()));
        cache.put(
            key.to_string(),
            SessionEntry {
                history: Arc::clone(&history),
                last_used: Instant::now(),
            },
        );
        history
    }

    pub fn remove(&self, key: &str) {
        let mut cache = self.inner.lock().expect("session store lock poisoned");
        cache.pop(key);
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("session store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_TTL: Duration = Duration::from_secs(3600);

    #[test]
    fn test_same_key_returns_same_history() {
        let store = SessionStore::new(8, LONG_TTL);
        let a = store.get_or_create("s1");
        let b = store.get_or_create("s1");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_keys_get_distinct_histories() {
        let store = SessionStore::new(8, LONG_TTL);
        let a = store.get_or_create("s1");
        let b = store.get_or_create("s2");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_evicts_session() {
        let store = SessionStore::new(8, LONG_TTL);
        let a = store.get_or_create("s1");
        store.remove("s1");
        assert!(store.is_empty());
        let b = store.get_or_create("s1");
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_expired_session_is_replaced() {
        let store = SessionStore::new(8, Duration::from_millis(0));
        let a = store.get_or_create("s1");
        std::thread::sleep(Duration::from_millis(5));
        let b = store.get_or_create("s1");
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_capacity_bound_evicts_least_recently_used() {
        let store = SessionStore::new(2, LONG_TTL);
        let a = store.get_or_create("s1");
        store.get_or_create("s2");
        store.get_or_create("s3");
        assert_eq!(store.len(), 2);

        // s1 was least recently used, so asking again builds a fresh history.
        let a2 = store.get_or_create("s1");
        assert!(!Arc::ptr_eq(&a, &a2));
    }
}
