//! Request pipeline for server-side page rendering.
//!
//! This crate provides:
//! - `assemble` / `client_only_shell` - HTML shell marker splicing
//! - `ModuleResolver` with `DevResolver` / `ProdResolver` strategies
//! - `SsrMiddleware` - The per-request orchestrator
//!
//! The middleware sequences cache lookup, route bypass, module resolution,
//! prefetch, render, assembly, and cache population for each request, and
//! guarantees that a rendering failure never becomes a hard error for the
//! end user: the render path degrades to a client-rendered shell with
//! status 200, while resolution and loading failures are signalled to the
//! enclosing handler chain.

mod assemble;
mod middleware;
mod resolver;

pub use assemble::*;
pub use middleware::*;
pub use resolver::*;
