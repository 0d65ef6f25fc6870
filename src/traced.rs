//! Span-emitting cache decorator.
//!
//! [`TracedCache`] wraps any [`AsyncCache`] and records one span per
//! operation. The span is opened before the delegated future runs and is
//! attached to it with [`tracing::Instrument`], so it is the current span
//! for exactly the duration of the operation and is released exactly once
//! on every exit path. Errors are recorded on the span and returned to the
//! caller unchanged.
//!
//! Batch fan-out: `get_multiple` and `set_multiple` delegate element-wise
//! through the decorator's own single-key methods, so a batch of N keys
//! produces N nested element spans that complete, in call order, before the
//! enclosing batch span. `delete_multiple` passes through to the wrapped
//! implementation and produces a single span.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{Instrument, Span};

use crate::cache::AsyncCache;
use crate::otel::{cache_span, record_failure, CacheKeys, CacheOperation};
use crate::types::CacheResult;

/// Decorator recording a tracing span for every cache operation.
pub struct TracedCache<C> {
    inner: C,
}

impl<C> TracedCache<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

fn observe<T>(span: &Span, result: &CacheResult<T>) {
    if let Err(error) = result {
        record_failure(span, error);
    }
}

#[async_trait]
impl<C> AsyncCache for TracedCache<C>
where
    C: AsyncCache,
{
    type Value = C::Value;

    async fn get(&self, key: &str) -> CacheResult<Option<Self::Value>> {
        let span = cache_span(CacheOperation::Get, &CacheKeys::single(key));
        let result = self.inner.get(key).instrument(span.clone()).await;
        observe(&span, &result);
        result
    }

    async fn set(&self, key: &str, value: Self::Value, ttl: Option<Duration>) -> CacheResult<()> {
        let span = cache_span(CacheOperation::Set, &CacheKeys::single(key));
        let result = self.inner.set(key, value, ttl).instrument(span.clone()).await;
        observe(&span, &result);
        result
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let span = cache_span(CacheOperation::Delete, &CacheKeys::single(key));
        let result = self.inner.delete(key).instrument(span.clone()).await;
        observe(&span, &result);
        result
    }

    async fn clear(&self) -> CacheResult<()> {
        let span = cache_span(CacheOperation::Clear, &CacheKeys::None);
        let result = self.inner.clear().instrument(span.clone()).await;
        observe(&span, &result);
        result
    }

    async fn get_multiple(&self, keys: &[String]) -> CacheResult<Vec<Option<Self::Value>>> {
        let span = cache_span(
            CacheOperation::GetMultiple,
            &CacheKeys::multi(keys.iter().map(String::as_str)),
        );
        let result: CacheResult<Vec<Option<Self::Value>>> = async {
            let mut values = Vec::with_capacity(keys.len());
            for key in keys {
                values.push(self.get(key).await?);
            }
            Ok(values)
        }
        .instrument(span.clone())
        .await;
        observe(&span, &result);
        result
    }

    async fn set_multiple(
        &self,
        entries: &[(String, Self::Value)],
        ttl: Option<Duration>,
    ) -> CacheResult<()> {
        let span = cache_span(
            CacheOperation::SetMultiple,
            &CacheKeys::multi(entries.iter().map(|(key, _)| key.as_str())),
        );
        let result: CacheResult<()> = async {
            for (key, value) in entries {
                self.set(key, value.clone(), ttl).await?;
            }
            Ok(())
        }
        .instrument(span.clone())
        .await;
        observe(&span, &result);
        result
    }

    async fn delete_multiple(&self, keys: &[String]) -> CacheResult<()> {
        let span = cache_span(
            CacheOperation::DeleteMultiple,
            &CacheKeys::multi(keys.iter().map(String::as_str)),
        );
        let result = self.inner.delete_multiple(keys).instrument(span.clone()).await;
        observe(&span, &result);
        result
    }

    async fn has(&self, key: &str) -> CacheResult<bool> {
        let span = cache_span(CacheOperation::Has, &CacheKeys::single(key));
        let result = self.inner.has(key).instrument(span.clone()).await;
        observe(&span, &result);
        result
    }
}
