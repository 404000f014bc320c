//! Logging capability
//!
//! Components that report user-facing progress take an `Arc<dyn Logger>`
//! instead of writing to a process-wide logger. The production
//! implementation forwards to `tracing`.

use std::sync::Arc;

/// User-facing log sink with four levels
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    /// A positive outcome, e.g. a confirmed AUTH
    fn success(&self, message: &str);
}

/// Logger backed by `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    /// Shared handle suitable for passing to a `Session` or `Repl`
    pub fn shared() -> Arc<dyn Logger> {
        Arc::new(Self)
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn success(&self, message: &str) {
        tracing::info!(outcome = "success", "{}", message);
    }
}
