//! Core types for cache instrumentation.

pub mod error;

pub use error::{CacheError, CacheResult};
