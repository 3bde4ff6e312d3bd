use std::sync::Arc;

use shared::{CommentApi, EventContext};

/// Operator-facing log stream of a script.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Everything a script receives from the host besides its own arguments.
#[derive(Clone)]
pub struct ExecutionContext {
    pub logger: Arc<dyn Logger>,
    pub github: Arc<dyn CommentApi>,
    pub event: EventContext,
}

impl ExecutionContext {
    pub fn info(&self, message: impl AsRef<str>) {
        self.logger.info(message.as_ref());
    }
}
