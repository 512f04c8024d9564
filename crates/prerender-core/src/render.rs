//! Render collaborator contracts.

use async_trait::async_trait;
use serde_json::Value;

use crate::manifest::Manifest;

/// State the render call exposes for the client to pick up.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// JSON-serializable preload state embedded into the assembled page.
    pub preload_state: Value,
}

/// Output of one render invocation.
///
/// Owned exclusively by the current request's assembly step; never persisted.
#[derive(Debug, Clone, Default)]
pub struct RenderResult {
    /// Application markup spliced into the shell outlet.
    pub html: String,
    /// Tags appended to the document head.
    pub head_tags: String,
    /// Attributes for the `<html>` element.
    pub html_attrs: String,
    /// Attributes for the `<body>` element.
    pub body_attrs: String,
    /// Preload link tags.
    pub preload_links: String,
    /// Render context carrying the preload state.
    pub context: RenderContext,
}

impl RenderResult {
    /// Create a result with app markup only.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Default::default()
        }
    }

    /// Set the head tags.
    pub fn with_head_tags(mut self, tags: impl Into<String>) -> Self {
        self.head_tags = tags.into();
        self
    }

    /// Set the `<html>` element attributes.
    pub fn with_html_attrs(mut self, attrs: impl Into<String>) -> Self {
        self.html_attrs = attrs.into();
        self
    }

    /// Set the `<body>` element attributes.
    pub fn with_body_attrs(mut self, attrs: impl Into<String>) -> Self {
        self.body_attrs = attrs.into();
        self
    }

    /// Set the preload link tags.
    pub fn with_preload_links(mut self, links: impl Into<String>) -> Self {
        self.preload_links = links.into();
        self
    }

    /// Set the preload state.
    pub fn with_preload_state(mut self, state: Value) -> Self {
        self.context.preload_state = state;
        self
    }
}

/// The externally supplied page-rendering function.
///
/// Treated as a black box: the pipeline only depends on this contract, not
/// on how the markup is produced. A failure here degrades the response to a
/// client-rendered shell instead of surfacing an error to the end user.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render the page for `url` with prefetched data and the asset manifest.
    async fn render(
        &self,
        url: &str,
        preload: &Value,
        manifest: &Manifest,
    ) -> anyhow::Result<RenderResult>;
}

/// External service returning page-specific preload data.
///
/// Must complete before the render call so the render step can embed the
/// data into the initial markup.
#[async_trait]
pub trait PrefetchSource: Send + Sync {
    /// Fetch preload data for `url`.
    async fn prefetch(&self, url: &str) -> anyhow::Result<Value>;
}
