//! Logger capability used by the HTTP service.
//!
//! The service never calls `tracing` directly. It logs through the
//! [`Logger`] trait so tests can capture what was recorded.

/// Sink for diagnostic messages.
pub trait Logger: Send + Sync {
    /// Fine-grained detail, such as each outgoing request.
    fn debug(&self, message: &str);

    /// Normal outcomes.
    fn info(&self, message: &str);

    /// Unexpected but non-fatal outcomes, such as a non-2xx status.
    fn warn(&self, message: &str);

    /// Failures.
    fn error(&self, message: &str);
}

/// [`Logger`] backed by `tracing` events under the `http_usecase` target.
///
/// Output depends on the installed subscriber; with none installed the
/// messages are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates the logger. Takes no configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "http_usecase", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "http_usecase", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "http_usecase", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "http_usecase", "{message}");
    }
}
