//! Error types for cache operations.
//!
//! Uses `thiserror` for ergonomic error definitions. Backend errors are
//! deliberately stringly-typed: the instrumented interface is
//! backend-agnostic, and the decorator only needs a message to record on
//! the span before propagating the error unchanged.

use thiserror::Error;

/// Error type for all cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Underlying cache backend failed
    #[error("Cache backend error: {0}")]
    Backend(String),

    /// Key rejected by the backend
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),
}

impl CacheError {
    /// Stable variant tag, recorded as the `exception.type` span attribute.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Backend(_) => "Backend",
            Self::InvalidKey(_) => "InvalidKey",
        }
    }
}

pub type CacheResult<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_are_stable() {
        assert_eq!(CacheError::Backend("boom".into()).kind(), "Backend");
        assert_eq!(CacheError::InvalidKey("".into()).kind(), "InvalidKey");
    }

    #[test]
    fn error_messages_include_cause() {
        let error = CacheError::Backend("connection reset".into());
        assert_eq!(error.to_string(), "Cache backend error: connection reset");
    }
}
