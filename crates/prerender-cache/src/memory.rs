//! In-process page store.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::error::CacheResult;
use crate::store::PageStore;

#[derive(Debug, Clone)]
struct StoredPage {
    body: String,
    expires_at: Instant,
}

impl StoredPage {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory `PageStore` with per-entry expiry.
///
/// Suitable for single-process deployments and tests. Expired entries are
/// dropped lazily when read or enumerated.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredPage>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|e| !e.is_expired()).count()
    }

    /// Whether the store has no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.body.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Entry exists but expired: drop it under the write lock.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| e.is_expired()) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, body: String, ttl: Duration) -> CacheResult<()> {
        let entry = StoredPage {
            body,
            expires_at: Instant::now() + ttl,
        };
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn keys(&self) -> CacheResult<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(_, e)| !e.is_expired())
            .map(|(k, _)| k.clone())
            .collect())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("ssr:/a", "<html>a</html>".into(), TTL).await.unwrap();

        assert_eq!(
            store.get("ssr:/a").await.unwrap(),
            Some("<html>a</html>".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let store = MemoryStore::new();

        assert_eq!(store.get("ssr:/missing").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("ssr:/a", "body".into(), TTL).await.unwrap();

        tokio::time::advance(TTL + Duration::from_secs(1)).await;

        assert_eq!(store.get("ssr:/a").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_not_enumerated() {
        let store = MemoryStore::new();
        store.set("ssr:/a", "a".into(), TTL).await.unwrap();
        store.set("ssr:/b", "b".into(), TTL * 10).await.unwrap();

        tokio::time::advance(TTL + Duration::from_secs(1)).await;

        assert_eq!(store.keys().await.unwrap(), vec!["ssr:/b".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let store = MemoryStore::new();
        store.set("ssr:/a", "a".into(), TTL).await.unwrap();

        store.delete("ssr:/a").await.unwrap();

        assert_eq!(store.get("ssr:/a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let store = MemoryStore::new();

        assert!(store.delete("ssr:/missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("ssr:/a", "old".into(), TTL).await.unwrap();
        store.set("ssr:/a", "new".into(), TTL).await.unwrap();

        assert_eq!(store.get("ssr:/a").await.unwrap(), Some("new".to_string()));
    }
}
