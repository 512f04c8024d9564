//! Server-side page rendering middleware with cached output.
//!
//! Renders application pages on the server and serves them over HTTP,
//! switching between a live development renderer and a precompiled
//! production renderer, with a time-bounded cache for rendered output and a
//! graceful fallback to client-only rendering when server rendering fails.
//!
//! ```ignore
//! use std::sync::Arc;
//! use prerender::prelude::*;
//!
//! let config = SsrConfig::new(RenderMode::Production).with_build_dir("dist");
//! let resolver = Arc::new(ProdResolver::new(config.clone(), renderer));
//! let middleware = SsrMiddleware::new(config, resolver, prefetch, store);
//!
//! match middleware.handle(&PageRequest::new(original_url)).await {
//!     Served::Page(page) => respond(page),
//!     Served::Forward => next(),
//!     Served::Abort(err) => next_with_error(err),
//! }
//! ```

pub use prerender_cache;
pub use prerender_core;
pub use prerender_pipeline;

/// Prelude for convenient imports.
pub mod prelude {
    pub use prerender_cache::*;
    pub use prerender_core::*;
    pub use prerender_pipeline::*;
}
