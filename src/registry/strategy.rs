//! Registry strategy selected by the thread-safety flag
//!
//! Both variants store their entries the same way; they differ in what
//! happens when a second caller arrives while the first is still inside:
//!
//! ```text
//!   Synchronized    second caller waits for the lock
//!   Unsynchronized  second caller gets ChannelError::ConcurrentAccess
//! ```
//!
//! The unsynchronized variant is for channels confined to one context. It
//! never waits, and misuse surfaces as an error instead of a corrupted list.

use crate::context::ExecutionContext;
use crate::error::{ChannelError, Result};

use super::entry::{HandlerEntry, HandlerId};
use super::store::{HandlerRegistry, Snapshot};
use super::sync::SyncHandlerRegistry;

/// Handler registry with a construction-time access strategy
pub enum Registry<T> {
    /// Shared between threads; callers serialize on one lock
    Synchronized(SyncHandlerRegistry<T>),
    /// Confined to a single context; overlapping access is reported
    Unsynchronized(SyncHandlerRegistry<T>),
}

impl<T: Clone> Registry<T> {
    /// Create an empty registry of the requested kind
    pub fn new(thread_safe: bool) -> Self {
        if thread_safe {
            Registry::Synchronized(SyncHandlerRegistry::new())
        } else {
            Registry::Unsynchronized(SyncHandlerRegistry::new())
        }
    }

    /// Whether concurrent callers are serialized rather than rejected
    pub fn is_thread_safe(&self) -> bool {
        matches!(self, Registry::Synchronized(_))
    }

    /// Append a handler and return its id
    pub fn add(&self, callback: T, context: Option<ExecutionContext>) -> Result<HandlerId> {
        self.access("add", |registry| registry.add(callback, context))
    }

    /// Remove the handler with `id`; `Ok(false)` if it was not registered
    pub fn remove(&self, id: HandlerId) -> Result<bool> {
        self.access("remove", |registry| registry.remove(id))
    }

    /// Capture the current entries
    pub fn snapshot(&self) -> Result<Snapshot<T>> {
        self.access("snapshot", |registry| registry.snapshot())
    }

    /// Capture the current entries, waiting for the lock in either variant
    ///
    /// Used by deferred dispatches, which may legitimately overlap each
    /// other on a parallel context.
    pub(crate) fn snapshot_blocking(&self) -> Snapshot<T> {
        match self {
            Registry::Synchronized(registry) | Registry::Unsynchronized(registry) => {
                registry.with(|registry| registry.snapshot())
            }
        }
    }

    /// Capture the current entries and visit each in order, outside the
    /// registry's critical section
    pub fn for_each_snapshot<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&HandlerEntry<T>),
    {
        let snapshot = self.snapshot()?;
        for entry in &snapshot {
            f(entry);
        }
        Ok(())
    }

    /// True if a handler with `id` is registered
    pub fn contains(&self, id: HandlerId) -> Result<bool> {
        self.access("contains", |registry| registry.contains(id))
    }

    /// Number of registered handlers
    pub fn len(&self) -> Result<usize> {
        self.access("len", |registry| registry.len())
    }

    /// True if no handler is registered
    pub fn is_empty(&self) -> Result<bool> {
        self.access("is_empty", |registry| registry.is_empty())
    }

    fn access<R>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut HandlerRegistry<T>) -> R,
    ) -> Result<R> {
        match self {
            Registry::Synchronized(registry) => Ok(registry.with(f)),
            Registry::Unsynchronized(registry) => registry.try_with(f).ok_or_else(|| {
                tracing::warn!(operation, "Concurrent access to unsynchronized registry");
                ChannelError::ConcurrentAccess { operation }
            }),
        }
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Registry::Synchronized(inner) => f.debug_tuple("Synchronized").field(inner).finish(),
            Registry::Unsynchronized(inner) => {
                f.debug_tuple("Unsynchronized").field(inner).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_selects_variant() {
        assert!(Registry::<u8>::new(true).is_thread_safe());
        assert!(!Registry::<u8>::new(false).is_thread_safe());
    }

    #[test]
    fn test_both_variants_share_contract() {
        for thread_safe in [false, true] {
            let registry = Registry::new(thread_safe);

            let a = registry.add('a', None).unwrap();
            let b = registry.add('b', None).unwrap();
            assert_eq!(a.as_u64(), 0);
            assert_eq!(b.as_u64(), 1);

            assert!(registry.remove(a).unwrap());
            assert!(!registry.remove(a).unwrap());
            assert!(registry.contains(b).unwrap());
            assert_eq!(registry.len().unwrap(), 1);
            assert!(!registry.is_empty().unwrap());

            let mut seen = Vec::new();
            registry
                .for_each_snapshot(|entry| seen.push(*entry.callback()))
                .unwrap();
            assert_eq!(seen, vec!['b']);
        }
    }

    #[test]
    fn test_unsynchronized_reports_overlap() {
        let registry = Registry::new(false);
        let Registry::Unsynchronized(inner) = &registry else {
            panic!("expected unsynchronized registry");
        };

        // Hold the registry as if another caller were inside it.
        let result = inner.with(|_held| registry.add(1_u8, None));

        assert_eq!(
            result,
            Err(ChannelError::ConcurrentAccess { operation: "add" })
        );
        assert_eq!(registry.len().unwrap(), 0);
    }

    #[test]
    fn test_blocking_snapshot_waits_on_unsynchronized_registry() {
        use std::sync::{mpsc, Arc};
        use std::thread;
        use std::time::Duration;

        let registry = Arc::new(Registry::new(false));
        registry.add(7_u8, None).unwrap();
        let Registry::Unsynchronized(inner) = registry.as_ref() else {
            panic!("expected unsynchronized registry");
        };

        let (tx, rx) = mpsc::channel();
        let waiter = inner.with(|held| {
            held.add(8, None);
            let r = Arc::clone(&registry);
            let waiter = thread::spawn(move || {
                let snapshot = r.snapshot_blocking();
                tx.send(snapshot.len()).unwrap();
            });
            assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
            waiter
        });

        waiter.join().unwrap();
        assert_eq!(rx.recv().unwrap(), 2);
    }

    #[test]
    fn test_visitor_may_reenter_unsynchronized_registry() {
        let registry = Registry::new(false);
        registry.add(1_u32, None).unwrap();

        registry
            .for_each_snapshot(|entry| {
                registry.add(entry.callback() + 1, None).unwrap();
            })
            .unwrap();

        assert_eq!(registry.len().unwrap(), 2);
    }
}
