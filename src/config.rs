//! Channel configuration

use crate::context::ExecutionContext;

/// Channel construction options
#[derive(Clone, Default)]
pub struct ChannelConfig {
    /// Serialize concurrent add/remove/notify instead of rejecting overlap
    pub thread_safe: bool,

    /// Context every notification is submitted to (None = run on the caller)
    pub default_context: Option<ExecutionContext>,
}

impl ChannelConfig {
    /// Create a config with the given default context
    pub fn with_context(context: ExecutionContext) -> Self {
        Self {
            default_context: Some(context),
            ..Default::default()
        }
    }

    /// Set thread safety
    pub fn thread_safe(mut self, thread_safe: bool) -> Self {
        self.thread_safe = thread_safe;
        self
    }

    /// Submit every notification to `context`
    pub fn dispatch_on(mut self, context: ExecutionContext) -> Self {
        self.default_context = Some(context);
        self
    }

    /// Run notifications on the calling context
    pub fn synchronous(mut self) -> Self {
        self.default_context = None;
        self
    }
}

impl std::fmt::Debug for ChannelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelConfig")
            .field("thread_safe", &self.thread_safe)
            .field("default_context", &self.default_context.is_some())
            .finish()
    }
}
