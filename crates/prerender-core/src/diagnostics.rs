//! Injected failure-reporting interface.

/// Diagnostic reporting collaborator.
///
/// The pipeline swallows several failure classes on purpose (cache reads,
/// cache writes, render failures); this trait is where those failures stay
/// visible. Injected rather than hard-coded so failure visibility is
/// testable.
pub trait Diagnostics: Send + Sync {
    /// Report a non-fatal problem (e.g. a cache operation that failed).
    fn warn(&self, scope: &str, message: &str);

    /// Report a failure that changed the outcome of a request.
    fn error(&self, scope: &str, message: &str);
}

/// Default diagnostics sink forwarding to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, scope: &str, message: &str) {
        tracing::warn!(scope, "{message}");
    }

    fn error(&self, scope: &str, message: &str) {
        tracing::error!(scope, "{message}");
    }
}
