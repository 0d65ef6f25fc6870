//! Cache operation span construction.

use std::panic::Location;

use tracing::{field, span, Level, Span};

use super::{
    CACHE_KEY, CACHE_KEYS, EXCEPTION_MESSAGE, EXCEPTION_TYPE, OTEL_STATUS_CODE,
    OTEL_STATUS_MESSAGE,
};
use crate::types::CacheError;

/// Cache operation types (maps to `cache.operation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOperation {
    /// Fetch a single value
    Get,
    /// Store a single value
    Set,
    /// Remove a single entry
    Delete,
    /// Remove all entries
    Clear,
    /// Fetch a batch of values
    GetMultiple,
    /// Store a batch of entries
    SetMultiple,
    /// Remove a batch of entries
    DeleteMultiple,
    /// Check for a live entry
    Has,
}

impl CacheOperation {
    /// Telemetry name: span name and `cache.operation` value.
    ///
    /// Batch operations keep the camelCase names of the instrumented
    /// interface so dashboards see one vocabulary regardless of the
    /// implementation language behind the cache.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Delete => "delete",
            Self::Clear => "clear",
            Self::GetMultiple => "getMultiple",
            Self::SetMultiple => "setMultiple",
            Self::DeleteMultiple => "deleteMultiple",
            Self::Has => "has",
        }
    }

    /// Rust method name, used for the `code.function.name` attribute.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Delete => "delete",
            Self::Clear => "clear",
            Self::GetMultiple => "get_multiple",
            Self::SetMultiple => "set_multiple",
            Self::DeleteMultiple => "delete_multiple",
            Self::Has => "has",
        }
    }
}

/// Key shape of a cache call, fixed at the call boundary.
///
/// Single-key operations record `cache.key`; batch operations record
/// `cache.keys` with the keys comma-joined in call order. Operations
/// without a key argument (`clear`) record neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheKeys {
    /// No key argument
    None,
    /// One key
    Single(String),
    /// Ordered batch of keys
    Multi(Vec<String>),
}

impl CacheKeys {
    pub fn single(key: impl Into<String>) -> Self {
        Self::Single(key.into())
    }

    pub fn multi<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multi(keys.into_iter().map(Into::into).collect())
    }

    /// Comma-joined keys for the `cache.keys` attribute (`Multi` only).
    pub fn joined(&self) -> Option<String> {
        match self {
            Self::Multi(keys) => Some(keys.join(",")),
            _ => None,
        }
    }
}

/// Create a cache operation span.
///
/// The span is named after the operation (via `otel.name`), uses INTERNAL
/// kind, and carries the `cache.*` and `code.*` attributes. Code location
/// is taken from the caller, i.e. the delegating method that observed the
/// operation.
///
/// # Example
///
/// ```rust,ignore
/// let span = cache_span(CacheOperation::Get, &CacheKeys::single("foo"));
/// let result = inner.get("foo").instrument(span.clone()).await;
/// ```
#[track_caller]
pub fn cache_span(operation: CacheOperation, keys: &CacheKeys) -> Span {
    let location = Location::caller();
    let function = format!("TracedCache::{}", operation.method_name());

    let span = span!(
        Level::INFO,
        "cache",
        otel.name = operation.as_str(),
        otel.kind = "internal",
        cache.operation = operation.as_str(),
        cache.key = field::Empty,
        cache.keys = field::Empty,
        code.function.name = function.as_str(),
        code.file.path = location.file(),
        code.line.number = location.line(),
        otel.status_code = field::Empty,
        otel.status_message = field::Empty,
        "exception.type" = field::Empty,
        exception.message = field::Empty,
    );

    match keys {
        CacheKeys::None => {}
        CacheKeys::Single(key) => {
            span.record(CACHE_KEY, key.as_str());
        }
        CacheKeys::Multi(list) => {
            span.record(CACHE_KEYS, list.join(",").as_str());
        }
    }

    span
}

/// Record a failed operation on its span.
///
/// Sets OTel error status with the failure's message and the exception
/// attributes. The caller still propagates the error itself.
pub fn record_failure(span: &Span, error: &CacheError) {
    let message = error.to_string();
    span.record(EXCEPTION_TYPE, error.kind());
    span.record(EXCEPTION_MESSAGE, message.as_str());
    span.record(OTEL_STATUS_CODE, "ERROR");
    span.record(OTEL_STATUS_MESSAGE, message.as_str());
}
