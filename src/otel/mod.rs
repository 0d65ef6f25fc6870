//! OpenTelemetry instrumentation for cache operations.
//!
//! Spans follow the shape emitted by OpenTelemetry cache instrumentations:
//!
//! **Span naming**: the operation name (`get`, `set`, ..., `getMultiple`).
//!
//! **Required attributes**:
//! - `cache.operation`: operation name, always equal to the span name
//!
//! **Conditionally required**:
//! - `cache.key`: for single-key operations, the key
//! - `cache.keys`: for batch operations, the keys comma-joined in call order
//!
//! **Code location** (`code.function.name`, `code.file.path`,
//! `code.line.number`): the delegating method inside the decorator, which is
//! the point where instrumentation observes the call.
//!
//! All spans use INTERNAL kind. Failures are recorded with
//! `exception.type` / `exception.message` and OTel error status; the error
//! itself still reaches the caller.

pub mod cache;
pub mod init;

pub use cache::{cache_span, record_failure, CacheKeys, CacheOperation};
pub use init::{init_telemetry, TelemetryConfig, TelemetryError};

/// Span attribute keys for cache operations.
/// Keep these stable; changing them is a breaking change for dashboards.
pub const CACHE_OPERATION: &str = "cache.operation";
pub const CACHE_KEY: &str = "cache.key";
pub const CACHE_KEYS: &str = "cache.keys";

pub const CODE_FUNCTION_NAME: &str = "code.function.name";
pub const CODE_FILE_PATH: &str = "code.file.path";
pub const CODE_LINE_NUMBER: &str = "code.line.number";

/// Error-related (recorded only when the wrapped operation fails)
pub const EXCEPTION_TYPE: &str = "exception.type";
pub const EXCEPTION_MESSAGE: &str = "exception.message";
pub const OTEL_STATUS_CODE: &str = "otel.status_code";
pub const OTEL_STATUS_MESSAGE: &str = "otel.status_message";
