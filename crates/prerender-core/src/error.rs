//! Pipeline error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving, loading, or rendering a page.
///
/// Only `Render` and `Prefetch` carry opaque collaborator failures; the rest
/// originate inside the pipeline. Render failures are recovered locally by
/// the middleware (client-shell degradation); every other variant propagates
/// to the enclosing request-handling chain.
#[derive(Debug, Error)]
pub enum SsrError {
    /// Failed to read an HTML shell from disk.
    #[error("failed to read template {path}: {source}")]
    Template {
        /// Template path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Dev module server construction or HTML transform failed.
    #[error("dev server error: {0}")]
    DevServer(String),

    /// Failed to load the render entry point.
    #[error("failed to load render module: {0}")]
    ModuleLoad(String),

    /// Failed to load or parse the build asset manifest.
    #[error("failed to load asset manifest: {0}")]
    Manifest(String),

    /// Prefetch collaborator failed.
    #[error("prefetch failed for {url}: {source}")]
    Prefetch {
        /// Request URL being prefetched.
        url: String,
        /// Underlying collaborator error.
        #[source]
        source: anyhow::Error,
    },

    /// The render entry point raised.
    #[error("render failed for {url}: {source}")]
    Render {
        /// Request URL being rendered.
        url: String,
        /// Underlying collaborator error.
        #[source]
        source: anyhow::Error,
    },
}
