//! The per-request orchestrator.

use std::sync::Arc;

use http::StatusCode;
use tokio::sync::OnceCell;

use prerender_cache::{page_key, PageStore};
use prerender_core::{
    Diagnostics, Manifest, PageRequest, PrefetchSource, SsrConfig, SsrError, TracingDiagnostics,
};

use crate::assemble::{assemble, client_only_shell};
use crate::resolver::ModuleResolver;

/// Route prefixes that bypass rendering entirely.
pub const BYPASS_PREFIXES: [&str; 2] = ["/api", "/service"];
/// Path segment that bypasses rendering entirely.
pub const BYPASS_SEGMENT: &str = "/assets";

/// Response produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Content type header value.
    pub content_type: &'static str,
    /// Response body.
    pub body: String,
}

impl PageResponse {
    /// A 200 `text/html` response.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "text/html",
            body: body.into(),
        }
    }
}

/// Outcome of running the pipeline for one request.
///
/// Mirrors the controls of an enclosing handler chain: respond here,
/// continue to the next handler, or signal a pipeline-level failure to it.
#[derive(Debug)]
pub enum Served {
    /// Respond with this page.
    Page(PageResponse),
    /// Delegate to the next handler unconditionally (bypassed route).
    Forward,
    /// Signal a resolution/loading failure to the enclosing chain.
    Abort(SsrError),
}

impl Served {
    /// The response, if this outcome carries one.
    pub fn page(&self) -> Option<&PageResponse> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }
}

/// Server-side rendering middleware.
///
/// Sequences the full decision pipeline per request: bypass check, cache
/// lookup, module resolution, manifest load, prefetch, render, assembly,
/// cache population, and failure degradation. Exactly one [`Served`] outcome
/// is produced per call.
pub struct SsrMiddleware {
    config: SsrConfig,
    resolver: Arc<dyn ModuleResolver>,
    prefetch: Arc<dyn PrefetchSource>,
    store: Arc<dyn PageStore>,
    diagnostics: Arc<dyn Diagnostics>,
    // Loaded once per process, invalidated only on redeploy.
    manifest: OnceCell<Manifest>,
}

impl SsrMiddleware {
    /// Create the middleware with the default `tracing` diagnostics sink.
    pub fn new(
        config: SsrConfig,
        resolver: Arc<dyn ModuleResolver>,
        prefetch: Arc<dyn PrefetchSource>,
        store: Arc<dyn PageStore>,
    ) -> Self {
        Self {
            config,
            resolver,
            prefetch,
            store,
            diagnostics: Arc::new(TracingDiagnostics),
            manifest: OnceCell::new(),
        }
    }

    /// Replace the diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Run the pipeline for one request.
    pub async fn handle(&self, req: &PageRequest) -> Served {
        if is_bypassed(&req.path) {
            return Served::Forward;
        }

        let key = page_key(&req.original_url);
        let prod = self.config.mode.is_production();

        if prod {
            match self.store.get(&key).await {
                Ok(Some(body)) => return Served::Page(PageResponse::html(body)),
                Ok(None) => {}
                Err(e) => self
                    .diagnostics
                    .warn("cache", &format!("page cache read failed for {key}: {e}")),
            }
        }

        let resolved = match self.resolver.resolve(&req.original_url).await {
            Ok(resolved) => resolved,
            Err(err) => return self.abort(err).await,
        };

        let manifest = if prod {
            match self.manifest().await {
                Ok(manifest) => manifest.clone(),
                Err(err) => return self.abort(err).await,
            }
        } else {
            Manifest::empty()
        };

        let preload = match self.prefetch.prefetch(&req.original_url).await {
            Ok(preload) => preload,
            Err(source) => {
                return self
                    .abort(SsrError::Prefetch {
                        url: req.original_url.clone(),
                        source,
                    })
                    .await;
            }
        };

        match resolved
            .renderer
            .render(&req.original_url, &preload, &manifest)
            .await
        {
            Ok(result) => {
                let body = assemble(&resolved.template, &result);

                if prod {
                    if let Err(e) = self
                        .store
                        .set(&key, body.clone(), self.config.page_ttl)
                        .await
                    {
                        // Best-effort: the response is already decided.
                        self.diagnostics
                            .warn("cache", &format!("page cache write failed for {key}: {e}"));
                    }
                }

                Served::Page(PageResponse::html(body))
            }
            Err(source) => {
                let err = SsrError::Render {
                    url: req.original_url.clone(),
                    source,
                };
                self.diagnostics.error("render", &err.to_string());

                // The render failure stays server-side: the client gets the
                // shell with status 200 and renders on its own.
                Served::Page(PageResponse::html(client_only_shell(&resolved.template)))
            }
        }
    }

    async fn abort(&self, err: SsrError) -> Served {
        let detail = self.resolver.describe_failure(&err).await;
        self.diagnostics.error("pipeline", &detail);
        Served::Abort(err)
    }

    async fn manifest(&self) -> Result<&Manifest, SsrError> {
        self.manifest
            .get_or_try_init(|| async {
                let path = self.config.manifest_path();
                let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
                    SsrError::Manifest(format!("{}: {e}", path.display()))
                })?;
                Manifest::from_json_str(&raw).map_err(|e| SsrError::Manifest(e.to_string()))
            })
            .await
    }
}

fn is_bypassed(path: &str) -> bool {
    BYPASS_PREFIXES.iter().any(|p| path.starts_with(p)) || path.contains(BYPASS_SEGMENT)
}
