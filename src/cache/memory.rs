//! In-memory cache backend.
//!
//! Mirrors the semantics of the array-backed caches commonly used in tests
//! and single-process deployments: optional entry limit with oldest-first
//! eviction, per-entry TTL, and lazy expiry on read.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::AsyncCache;
use crate::types::{CacheError, CacheResult};

struct Entry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

struct State<V> {
    entries: HashMap<String, Entry<V>>,
    /// Insertion order, oldest first. Re-setting a key moves it to the back.
    order: Vec<String>,
}

impl<V> State<V> {
    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.retain(|k| k != key);
    }

    fn insert(&mut self, key: &str, entry: Entry<V>, limit: Option<usize>) {
        if self.entries.insert(key.to_string(), entry).is_some() {
            self.order.retain(|k| k != key);
        }
        self.order.push(key.to_string());
        if let Some(limit) = limit {
            while self.entries.len() > limit && !self.order.is_empty() {
                let oldest = self.order.remove(0);
                self.entries.remove(&oldest);
            }
        }
    }
}

/// In-memory cache with optional entry limit.
///
/// Unbounded by default; [`MemoryCache::with_limit`] evicts the
/// least-recently-written entry once the limit is exceeded.
pub struct MemoryCache<V> {
    state: Mutex<State<V>>,
    limit: Option<usize>,
}

impl<V> MemoryCache<V> {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a cache holding at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self::build(Some(limit))
    }

    fn build(limit: Option<usize>) -> Self {
        Self {
            state: Mutex::new(State {
                entries: HashMap::new(),
                order: Vec::new(),
            }),
            limit,
        }
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> AsyncCache for MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = V;

    async fn get(&self, key: &str) -> CacheResult<Option<V>> {
        let mut state = self.state.lock().await;
        let now = Instant::now();
        if state.entries.get(key).is_some_and(|e| e.is_expired(now)) {
            state.remove(key);
            return Ok(None);
        }
        Ok(state.entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: V, ttl: Option<Duration>) -> CacheResult<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("empty key".to_string()));
        }
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        let mut state = self.state.lock().await;
        state.insert(key, Entry { value, expires_at }, self.limit);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut state = self.state.lock().await;
        state.remove(key);
        Ok(())
    }

    async fn clear(&self) -> CacheResult<()> {
        let mut state = self.state.lock().await;
        state.entries.clear();
        state.order.clear();
        Ok(())
    }

    async fn get_multiple(&self, keys: &[String]) -> CacheResult<Vec<Option<V>>> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push(self.get(key).await?);
        }
        Ok(values)
    }

    async fn set_multiple(
        &self,
        entries: &[(String, V)],
        ttl: Option<Duration>,
    ) -> CacheResult<()> {
        for (key, value) in entries {
            self.set(key, value.clone(), ttl).await?;
        }
        Ok(())
    }

    async fn delete_multiple(&self, keys: &[String]) -> CacheResult<()> {
        let mut state = self.state.lock().await;
        for key in keys {
            state.remove(key);
        }
        Ok(())
    }

    async fn has(&self, key: &str) -> CacheResult<bool> {
        let mut state = self.state.lock().await;
        let now = Instant::now();
        if state.entries.get(key).is_some_and(|e| e.is_expired(now)) {
            state.remove(key);
            return Ok(false);
        }
        Ok(state.entries.contains_key(key))
    }
}
