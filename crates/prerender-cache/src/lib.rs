//! Rendered page cache for the prerender middleware.
//!
//! This crate provides:
//! - `PageStore` - Async key-value store contract for assembled pages
//! - `MemoryStore` - In-process store with per-entry expiry
//! - `page_key` / `PAGE_NAMESPACE` - The `ssr:` key namespace
//! - `clear_rendered_pages` - Administrative namespace clear
//!
//! Cache failures on the request path are non-fatal by design; the one
//! operation that surfaces them is `clear_rendered_pages`, since an
//! administrative clear needs confirmation that it completed.

mod clear;
mod error;
mod key;
mod memory;
mod store;

pub use clear::*;
pub use error::*;
pub use key::*;
pub use memory::*;
pub use store::*;
