//! Page store contract.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheResult;

/// Key-value store for assembled pages.
///
/// The store is an external shared resource assumed safe for concurrent
/// independent key operations. No single-flight de-duplication is provided:
/// two requests missing on the same key may both render and both write, last
/// write wins.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Get a cached page body. Expired entries read as absent.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a page body with a time-to-live. Entries are never partially
    /// written.
    async fn set(&self, key: &str, body: String, ttl: Duration) -> CacheResult<()>;

    /// List all keys currently in the store.
    async fn keys(&self) -> CacheResult<Vec<String>>;

    /// Delete an entry. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;
}
