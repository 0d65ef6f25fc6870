//! OpenTelemetry span instrumentation for asynchronous key-value caches.
//!
//! Wrap any [`AsyncCache`] implementation in a [`TracedCache`] and every
//! operation (`get`, `set`, `delete`, `clear`, `get_multiple`,
//! `set_multiple`, `delete_multiple`, `has`) is recorded as a tracing span
//! carrying `cache.operation`, `cache.key` / `cache.keys`, and code-location
//! attributes. Errors from the wrapped cache are recorded on the span with
//! error status and propagated to the caller unchanged.
//!
//! # Quick Start
//!
//! ```no_run
//! use traced_cache::{AsyncCache, MemoryCache, TracedCache};
//!
//! # async fn example() -> traced_cache::CacheResult<()> {
//! let cache = TracedCache::new(MemoryCache::new());
//!
//! cache.set("user:42", serde_json::json!({"name": "Ada"}), None).await?;
//! let value = cache.get("user:42").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Span export is wired up separately through
//! [`init_telemetry`](otel::init_telemetry); the decorator itself only emits
//! `tracing` spans and works with whatever subscriber is installed.

pub mod cache;
pub mod otel;
pub mod traced;
pub mod types;

// Re-export main types
pub use cache::{AsyncCache, MemoryCache};
pub use otel::{init_telemetry, TelemetryConfig};
pub use traced::TracedCache;
pub use types::{CacheError, CacheResult};
