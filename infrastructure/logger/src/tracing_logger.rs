use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const LOG_TARGET: &str = "catalog";

/// Forwards domain log messages to `tracing`, tagged with the component
/// that produced them.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("core")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, component = self.component, "{}", message);
    }
}
