//! Cache interface and bundled backends.
//!
//! [`AsyncCache`] is the interface the instrumentation decorates: eight
//! operations over string keys, each resolving asynchronously. Backends are
//! pluggable; [`MemoryCache`] is bundled for tests and single-process use.

mod memory;

pub use memory::MemoryCache;

use std::time::Duration;

use async_trait::async_trait;

use crate::types::CacheResult;

/// Asynchronous key-value cache interface.
///
/// Batch operations take keys (or key-value pairs) in caller order; entry
/// order is significant for the `cache.keys` span attribute derived from
/// them.
#[async_trait]
pub trait AsyncCache: Send + Sync {
    /// Value type stored by this cache.
    type Value: Clone + Send + Sync + 'static;

    /// Fetch a value. Resolves `None` on a miss or an expired entry.
    async fn get(&self, key: &str) -> CacheResult<Option<Self::Value>>;

    /// Store a value, optionally expiring after `ttl`.
    async fn set(&self, key: &str, value: Self::Value, ttl: Option<Duration>) -> CacheResult<()>;

    /// Remove a single entry. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Remove all entries.
    async fn clear(&self) -> CacheResult<()>;

    /// Fetch several values, one slot per requested key, in key order.
    async fn get_multiple(&self, keys: &[String]) -> CacheResult<Vec<Option<Self::Value>>>;

    /// Store several entries with a shared TTL.
    async fn set_multiple(
        &self,
        entries: &[(String, Self::Value)],
        ttl: Option<Duration>,
    ) -> CacheResult<()>;

    /// Remove several entries.
    async fn delete_multiple(&self, keys: &[String]) -> CacheResult<()>;

    /// Check for a live (non-expired) entry.
    async fn has(&self, key: &str) -> CacheResult<bool>;
}
