//! Per-request context.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = format!(
            "{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context for one inbound page request.
///
/// `original_url` is the full path including the query string and is the
/// unit the cache is keyed on; `path` is the query-stripped path used for
/// route bypass checks. Created per request, discarded after the response.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// Originating path including query string.
    pub original_url: String,
    /// Normalized path without the query string.
    pub path: String,
}

impl PageRequest {
    /// Create a request context from the original URL.
    pub fn new(original_url: impl Into<String>) -> Self {
        let original_url = original_url.into();
        let path = original_url
            .split_once('?')
            .map(|(path, _)| path.to_string())
            .unwrap_or_else(|| original_url.clone());

        Self {
            request_id: RequestId::generate(),
            original_url,
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_splits_query_string() {
        let req = PageRequest::new("/products/42?ref=home&sort=asc");

        assert_eq!(req.original_url, "/products/42?ref=home&sort=asc");
        assert_eq!(req.path, "/products/42");
    }

    #[test]
    fn test_request_without_query_string() {
        let req = PageRequest::new("/products/42");

        assert_eq!(req.original_url, "/products/42");
        assert_eq!(req.path, "/products/42");
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();

        assert_ne!(a, b);
    }
}
