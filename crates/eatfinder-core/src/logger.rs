//! Logging capability consumed by the search engine.

/// Minimal logging surface injected into the engine. Calls are
/// fire-and-forget and must never fail.
pub trait Logger: Send + Sync {
    fn debug(&self, tag: &str, message: &str);
    fn error(&self, tag: &str, message: &str);
}

/// Production [`Logger`] forwarding to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, tag: &str, message: &str) {
        tracing::debug!(tag, "{message}");
    }

    fn error(&self, tag: &str, message: &str) {
        tracing::error!(tag, "{message}");
    }
}
