//! Executor capability

use std::sync::Arc;

/// A unit of work handed to an execution context
pub type Work = Box<dyn FnOnce() + Send + 'static>;

/// Something that accepts work for asynchronous execution
///
/// `submit` must not run `work` before returning unless the implementation
/// documents otherwise; channels rely on it to return to the notifying
/// caller without waiting.
pub trait Executor: Send + Sync {
    /// Queue `work` for execution
    fn submit(&self, work: Work);
}

/// Shared handle to an execution context
///
/// Channels and handler entries hold a clone of this handle; neither owns
/// the context behind it.
pub type ExecutionContext = Arc<dyn Executor>;
