//! Core abstractions for the prerender middleware.
//!
//! This crate provides the fundamental types and contracts:
//! - `PageRequest` - Per-request context (URL, bypass path)
//! - `SsrConfig` / `RenderMode` - Injected mode and filesystem layout
//! - `Renderer` / `PrefetchSource` traits - Black-box render collaborators
//! - `Manifest` - Build asset manifest
//! - `Diagnostics` - Injected failure-reporting interface
//! - `SsrError` - Pipeline error taxonomy

mod config;
mod context;
mod diagnostics;
mod error;
mod manifest;
mod render;

pub use config::*;
pub use context::*;
pub use diagnostics::*;
pub use error::*;
pub use manifest::*;
pub use render::*;
