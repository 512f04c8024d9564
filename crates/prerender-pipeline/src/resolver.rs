//! Environment-gated module resolution.
//!
//! Two explicit strategies behind one interface, selected once at process
//! start: `DevResolver` routes every request through a lazily-created live
//! module-transformation server so source edits are reflected without a
//! restart; `ProdResolver` serves the prebuilt shell and a precompiled
//! render entry point. The two modes never interleave within one process.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use prerender_core::{Renderer, SsrConfig, SsrError};

/// Template and render function resolved for one request.
pub struct ResolvedApp {
    /// HTML shell for this request.
    pub template: String,
    /// Render entry point.
    pub renderer: Arc<dyn Renderer>,
}

/// Resolves the template and render entry point for a request.
///
/// Failures are not handled here; they propagate to the request pipeline's
/// outer error path.
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    /// Resolve the shell template and render function for `url`.
    async fn resolve(&self, url: &str) -> Result<ResolvedApp, SsrError>;

    /// Produce the diagnostic message recorded for a resolution failure.
    ///
    /// Development resolvers remap stack traces against original source
    /// here; the default is the error's own message.
    async fn describe_failure(&self, err: &SsrError) -> String {
        err.to_string()
    }
}

/// Live module-transformation server used in development.
///
/// A single long-lived instance per process, created lazily on first use and
/// reused for every subsequent request.
#[async_trait]
pub trait DevServer: Send + Sync {
    /// Transform the raw HTML shell for `url` (per-route head injection).
    async fn transform_html(&self, url: &str, raw: &str) -> anyhow::Result<String>;

    /// Load the render entry point through the live server.
    async fn load_renderer(&self) -> anyhow::Result<Arc<dyn Renderer>>;

    /// Remap an error message's stack trace to original source.
    fn remap_stack(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Future returned by a dev server factory.
pub type DevServerFuture = Pin<Box<dyn Future<Output = anyhow::Result<Arc<dyn DevServer>>> + Send>>;

/// Development-mode resolver.
///
/// Construction of the dev server is guarded by a one-shot cell, so two
/// concurrent first requests cannot race it into existence twice. A failed
/// construction leaves the cell empty and is retried by the next request.
pub struct DevResolver {
    config: SsrConfig,
    factory: Box<dyn Fn() -> DevServerFuture + Send + Sync>,
    server: OnceCell<Arc<dyn DevServer>>,
}

impl DevResolver {
    /// Create a dev resolver with a factory for the live server.
    pub fn new(
        config: SsrConfig,
        factory: impl Fn() -> DevServerFuture + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            factory: Box::new(factory),
            server: OnceCell::new(),
        }
    }

    async fn server(&self) -> Result<&Arc<dyn DevServer>, SsrError> {
        self.server
            .get_or_try_init(|| async {
                (self.factory)()
                    .await
                    .map_err(|e| SsrError::DevServer(format!("{e:#}")))
            })
            .await
    }
}

#[async_trait]
impl ModuleResolver for DevResolver {
    async fn resolve(&self, url: &str) -> Result<ResolvedApp, SsrError> {
        let server = self.server().await?;

        let path = self.config.source_template();
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SsrError::Template { path, source })?;
        let template = server
            .transform_html(url, &raw)
            .await
            .map_err(|e| SsrError::DevServer(format!("{e:#}")))?;

        let renderer = server
            .load_renderer()
            .await
            .map_err(|e| SsrError::ModuleLoad(format!("{e:#}")))?;

        Ok(ResolvedApp { template, renderer })
    }

    async fn describe_failure(&self, err: &SsrError) -> String {
        match self.server.get() {
            Some(server) => server.remap_stack(&err.to_string()),
            None => err.to_string(),
        }
    }
}

/// Production-mode resolver.
///
/// Stateless per request: reads the prebuilt shell from the build output and
/// hands back the precompiled render entry point supplied at construction.
pub struct ProdResolver {
    config: SsrConfig,
    renderer: Arc<dyn Renderer>,
}

impl ProdResolver {
    /// Create a production resolver around the precompiled render entry.
    pub fn new(config: SsrConfig, renderer: Arc<dyn Renderer>) -> Self {
        Self { config, renderer }
    }
}

#[async_trait]
impl ModuleResolver for ProdResolver {
    async fn resolve(&self, _url: &str) -> Result<ResolvedApp, SsrError> {
        let path = self.config.client_template();
        let template = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SsrError::Template { path, source })?;

        Ok(ResolvedApp {
            template,
            renderer: Arc::clone(&self.renderer),
        })
    }
}
