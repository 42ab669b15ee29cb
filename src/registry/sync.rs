//! Thread-safe handler registry
//!
//! Wraps [`HandlerRegistry`] in a single lock. The critical section covers
//! only the list and the id counter; handlers never run while it is held, so
//! a handler may add, remove or notify on its own channel.

use parking_lot::Mutex;

use crate::context::ExecutionContext;

use super::entry::{HandlerEntry, HandlerId};
use super::store::{HandlerRegistry, Snapshot};

/// Handler registry safe to share between threads
pub struct SyncHandlerRegistry<T> {
    inner: Mutex<HandlerRegistry<T>>,
}

impl<T: Clone> SyncHandlerRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HandlerRegistry::new()),
        }
    }

    /// Append a handler and return its id
    pub fn add(&self, callback: T, context: Option<ExecutionContext>) -> HandlerId {
        self.inner.lock().add(callback, context)
    }

    /// Remove the handler with `id`; returns `false` if it was not registered
    pub fn remove(&self, id: HandlerId) -> bool {
        self.inner.lock().remove(id)
    }

    /// Capture the current entries
    pub fn snapshot(&self) -> Snapshot<T> {
        self.inner.lock().snapshot()
    }

    /// Capture the current entries and visit each in order
    ///
    /// The lock is released before `f` is first called.
    pub fn for_each_snapshot<F>(&self, mut f: F)
    where
        F: FnMut(&HandlerEntry<T>),
    {
        let snapshot = self.snapshot();
        for entry in &snapshot {
            f(entry);
        }
    }

    /// True if a handler with `id` is registered
    pub fn contains(&self, id: HandlerId) -> bool {
        self.inner.lock().contains(id)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if no handler is registered
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` against the registry, waiting for the lock
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut HandlerRegistry<T>) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Run `f` against the registry if nobody else holds it
    ///
    /// Returns `None` instead of waiting when the lock is taken.
    pub(crate) fn try_with<R>(&self, f: impl FnOnce(&mut HandlerRegistry<T>) -> R) -> Option<R> {
        self.inner.try_lock().map(|mut guard| f(&mut *guard))
    }
}

impl<T: Clone> Default for SyncHandlerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SyncHandlerRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(inner) => f
                .debug_struct("SyncHandlerRegistry")
                .field("inner", &*inner)
                .finish(),
            None => f
                .debug_struct("SyncHandlerRegistry")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
