//! Render mode and filesystem layout configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long an assembled page stays in the cache: 24 hours.
pub const DEFAULT_PAGE_TTL: Duration = Duration::from_millis(86_400_000);

/// Execution mode, fixed for the lifetime of the process.
///
/// Passed in explicitly at construction rather than read from ambient
/// process environment, so the mode is an injectable, testable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Live rendering through a module-transformation dev server.
    Development,
    /// Precompiled rendering from the build output directory.
    Production,
}

impl RenderMode {
    /// Whether this is production mode.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone)]
pub struct SsrConfig {
    /// Execution mode.
    pub mode: RenderMode,
    /// Application source directory (development template and dev server root).
    pub root_dir: PathBuf,
    /// Build output directory (production template, manifest, render entry).
    pub build_dir: PathBuf,
    /// Time-to-live for cached pages.
    pub page_ttl: Duration,
}

impl SsrConfig {
    /// Create a configuration with default paths.
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            root_dir: PathBuf::from("."),
            build_dir: PathBuf::from("dist"),
            page_ttl: DEFAULT_PAGE_TTL,
        }
    }

    /// Set the application source directory.
    pub fn with_root_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root_dir = dir.into();
        self
    }

    /// Set the build output directory.
    pub fn with_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = dir.into();
        self
    }

    /// Set the page cache TTL.
    pub fn with_page_ttl(mut self, ttl: Duration) -> Self {
        self.page_ttl = ttl;
        self
    }

    /// Path to the raw HTML shell in the source tree (development).
    pub fn source_template(&self) -> PathBuf {
        self.root_dir.join("index.html")
    }

    /// Path to the prebuilt HTML shell in the build output (production).
    pub fn client_template(&self) -> PathBuf {
        self.build_dir.join("client").join("index.html")
    }

    /// Path to the build asset manifest (production).
    pub fn manifest_path(&self) -> PathBuf {
        self.build_dir.join("client").join(".vite").join("manifest.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SsrConfig::new(RenderMode::Production);

        assert!(config.mode.is_production());
        assert_eq!(config.page_ttl, DEFAULT_PAGE_TTL);
        assert_eq!(config.page_ttl.as_millis(), 86_400_000);
    }

    #[test]
    fn test_config_paths() {
        let config = SsrConfig::new(RenderMode::Production).with_build_dir("/srv/app/dist");

        assert_eq!(
            config.client_template(),
            PathBuf::from("/srv/app/dist/client/index.html")
        );
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/srv/app/dist/client/.vite/manifest.json")
        );
    }

    #[test]
    fn test_source_template_under_root() {
        let config = SsrConfig::new(RenderMode::Development).with_root_dir("/srv/app");

        assert_eq!(config.source_template(), PathBuf::from("/srv/app/index.html"));
    }
}
