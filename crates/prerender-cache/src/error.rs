//! Cache error types.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur when using the page cache.
///
/// All store operations are fallible external calls; how a failure is
/// handled (swallowed vs. surfaced) is the caller's policy, not the store's.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to open or reach the backing store.
    #[error("failed to open store: {0}")]
    Open(String),

    /// A store operation failed.
    #[error("store operation failed: {0}")]
    Store(String),
}
