//! Tokio-backed execution contexts
//!
//! Both contexts borrow a runtime the caller already owns through its
//! [`Handle`] and run their work on its blocking pool; neither creates
//! threads or runtimes of its own.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::error::{ChannelError, Result};

use super::executor::{Executor, Work};

/// Runs each unit on the runtime's blocking pool
///
/// Units may run in parallel and in any order.
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// Create an executor for the given runtime
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create an executor for the runtime the caller is running on
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| ChannelError::NoRuntime)
    }

    /// Runtime handle this executor submits to
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Executor for TokioExecutor {
    fn submit(&self, work: Work) {
        // Detached; the join handle is not needed.
        drop(self.handle.spawn_blocking(work));
    }
}

/// Strictly serial, FIFO execution context
///
/// One worker on the runtime's blocking pool drains an unbounded queue and
/// runs each unit to completion before starting the next. A unit that
/// panics is logged and the worker moves on. The worker exits once every
/// handle to the queue is dropped and the remaining units have run.
///
/// Units may block; they hold up later units on the same queue, never the
/// runtime's async workers. The runtime waits for blocking work on
/// shutdown, so drop every handle to the queue before shutting it down.
/// Submitting to a queue from a unit that is itself running on that queue
/// delays the new unit until the current one returns.
#[derive(Debug, Clone)]
pub struct SerialQueue {
    name: Arc<str>,
    tx: mpsc::UnboundedSender<Work>,
}

impl SerialQueue {
    /// Create a queue whose worker runs on `handle`
    pub fn new(name: impl Into<Arc<str>>, handle: &Handle) -> Self {
        let name = name.into();
        let (tx, mut rx) = mpsc::unbounded_channel::<Work>();
        let label = Arc::clone(&name);

        drop(handle.spawn_blocking(move || {
            while let Some(work) = rx.blocking_recv() {
                if let Err(payload) = std::panic::catch_unwind(AssertUnwindSafe(work)) {
                    tracing::error!(
                        queue = %label,
                        panic = panic_message(payload.as_ref()),
                        "Work unit panicked"
                    );
                }
            }
            tracing::debug!(queue = %label, "Serial queue closed");
        }));

        tracing::debug!(queue = %name, "Serial queue started");

        Self { name, tx }
    }

    /// Create a queue on the runtime the caller is running on
    pub fn current(name: impl Into<Arc<str>>) -> Result<Self> {
        let handle = Handle::try_current().map_err(|_| ChannelError::NoRuntime)?;
        Ok(Self::new(name, &handle))
    }

    /// Queue name used in log records
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Executor for SerialQueue {
    fn submit(&self, work: Work) {
        if self.tx.send(work).is_err() {
            tracing::warn!(queue = %self.name, "Serial queue worker gone, work dropped");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
