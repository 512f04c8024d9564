//! Administrative cache clearing.

use crate::error::CacheResult;
use crate::key::in_page_namespace;
use crate::store::PageStore;

/// Delete every rendered page in the `ssr:` namespace.
///
/// Enumerates all keys, filters to the page namespace, and deletes them
/// concurrently. Returns the number of entries removed. Unlike the request
/// path, failures here are surfaced to the caller: an administrative clear
/// needs to know whether it completed.
pub async fn clear_rendered_pages(store: &dyn PageStore) -> CacheResult<u64> {
    let keys = store.keys().await?;
    let page_keys: Vec<String> = keys.into_iter().filter(|k| in_page_namespace(k)).collect();
    let removed = page_keys.len() as u64;

    futures::future::try_join_all(page_keys.iter().map(|key| store.delete(key))).await?;

    tracing::info!(removed, "cleared rendered page cache");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::CacheError;
    use crate::memory::MemoryStore;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_clear_removes_only_page_namespace() {
        let store = MemoryStore::new();
        store.set("ssr:/a", "a".into(), TTL).await.unwrap();
        store.set("ssr:/b", "b".into(), TTL).await.unwrap();
        store.set("other:/c", "c".into(), TTL).await.unwrap();

        let removed = clear_rendered_pages(&store).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(store.get("ssr:/a").await.unwrap(), None);
        assert_eq!(store.get("ssr:/b").await.unwrap(), None);
        assert_eq!(store.get("other:/c").await.unwrap(), Some("c".to_string()));
    }

    #[tokio::test]
    async fn test_clear_empty_store_reports_zero() {
        let store = MemoryStore::new();

        assert_eq!(clear_rendered_pages(&store).await.unwrap(), 0);
    }

    struct FailingStore;

    #[async_trait::async_trait]
    impl PageStore for FailingStore {
        async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _body: String, _ttl: Duration) -> CacheResult<()> {
            Ok(())
        }

        async fn keys(&self) -> CacheResult<Vec<String>> {
            Err(CacheError::Store("enumeration unavailable".into()))
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_clear_surfaces_enumeration_failure() {
        assert!(clear_rendered_pages(&FailingStore).await.is_err());
    }
}
