//! Page cache key namespace.

/// Namespace prefix for all rendered-page keys.
///
/// Keys are `ssr:` followed by the raw request URL including the query
/// string. This is effectively a wire format wherever the store is
/// externally inspectable.
pub const PAGE_NAMESPACE: &str = "ssr:";

/// Build the cache key for a request URL.
pub fn page_key(original_url: &str) -> String {
    format!("{PAGE_NAMESPACE}{original_url}")
}

/// Whether a key belongs to the rendered-page namespace.
pub fn in_page_namespace(key: &str) -> bool {
    key.starts_with(PAGE_NAMESPACE)
}
