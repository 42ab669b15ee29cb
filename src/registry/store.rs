//! Handler registry implementation
//!
//! The ordered, single-owner handler list. Entries live behind an `Arc` so a
//! snapshot is a reference-count bump; the next mutation after a snapshot
//! copies the list (copy-on-write), which leaves every outstanding snapshot
//! untouched.

use std::sync::Arc;

use crate::context::ExecutionContext;

use super::entry::{HandlerEntry, HandlerId};

/// Point-in-time copy of a registry's entries
///
/// Not linked to the live registry: later adds and removes are invisible
/// to it.
pub struct Snapshot<T> {
    entries: Arc<Vec<HandlerEntry<T>>>,
}

impl<T> Snapshot<T> {
    /// Number of entries captured
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no handler was registered at capture time
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, HandlerEntry<T>> {
        self.entries.iter()
    }

    /// Ids in registration order
    pub fn ids(&self) -> Vec<HandlerId> {
        self.entries.iter().map(HandlerEntry::id).collect()
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a HandlerEntry<T>;
    type IntoIter = std::slice::Iter<'a, HandlerEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

/// Ordered collection of handlers keyed by [`HandlerId`]
///
/// Not synchronized; exclusive access for mutation is enforced by `&mut
/// self`. See [`SyncHandlerRegistry`](super::SyncHandlerRegistry) for the
/// shared variant.
pub struct HandlerRegistry<T> {
    entries: Arc<Vec<HandlerEntry<T>>>,
    next_id: u64,
}

impl<T: Clone> HandlerRegistry<T> {
    /// Create an empty registry; the first id issued is 0
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
            next_id: 0,
        }
    }

    /// Append a handler and return its id
    pub fn add(&mut self, callback: T, context: Option<ExecutionContext>) -> HandlerId {
        let id = HandlerId::new(self.next_id);
        self.next_id += 1;

        Arc::make_mut(&mut self.entries).push(HandlerEntry::new(id, callback, context));
        id
    }

    /// Remove the handler with `id`
    ///
    /// Returns `false` if no such handler is registered. Order of the
    /// remaining handlers is preserved.
    pub fn remove(&mut self, id: HandlerId) -> bool {
        match self.entries.iter().position(|entry| entry.id() == id) {
            Some(index) => {
                Arc::make_mut(&mut self.entries).remove(index);
                true
            }
            None => false,
        }
    }

    /// Capture the current entries
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            entries: Arc::clone(&self.entries),
        }
    }

    /// Capture the current entries and visit each in order
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
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no handler is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for HandlerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for HandlerRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<HandlerId> {
        raw.iter().copied().map(HandlerId::new).collect()
    }

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut registry = HandlerRegistry::new();

        assert_eq!(registry.add("a", None), HandlerId::new(0));
        assert_eq!(registry.add("b", None), HandlerId::new(1));
        assert_eq!(registry.add("c", None), HandlerId::new(2));
    }

    #[test]
    fn test_ids_never_reused() {
        let mut registry = HandlerRegistry::new();
        let mut issued = Vec::new();

        for round in 0..50 {
            let id = registry.add(round, None);
            issued.push(id);
            if round % 3 == 0 {
                registry.remove(id);
            }
        }

        // Strictly increasing implies unique
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(registry.add(99, None), HandlerId::new(50));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut registry = HandlerRegistry::new();
        for name in ["a", "b", "c", "d"] {
            registry.add(name, None);
        }

        assert!(registry.remove(HandlerId::new(1)));

        let callbacks: Vec<&str> = registry.snapshot().iter().map(|e| *e.callback()).collect();
        assert_eq!(callbacks, vec!["a", "c", "d"]);
        assert_eq!(registry.snapshot().ids(), ids(&[0, 2, 3]));
    }

    #[test]
    fn test_remove_unknown_and_twice() {
        let mut registry = HandlerRegistry::new();
        let id = registry.add("a", None);
        registry.add("b", None);

        assert!(!registry.remove(HandlerId::new(42)));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(id));
    }

    #[test]
    fn test_snapshot_isolated_from_mutation() {
        let mut registry = HandlerRegistry::new();
        registry.add("a", None);
        registry.add("b", None);

        let snapshot = registry.snapshot();

        registry.remove(HandlerId::new(0));
        registry.add("c", None);

        assert_eq!(snapshot.ids(), ids(&[0, 1]));
        assert_eq!(registry.snapshot().ids(), ids(&[1, 2]));
    }

    #[test]
    fn test_for_each_snapshot_in_order() {
        let mut registry = HandlerRegistry::new();
        for n in 10..15 {
            registry.add(n, None);
        }

        let mut seen = Vec::new();
        registry.for_each_snapshot(|entry| seen.push(*entry.callback()));

        assert_eq!(seen, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_empty_registry() {
        let registry: HandlerRegistry<()> = HandlerRegistry::default();

        assert!(registry.is_empty());
        assert!(registry.snapshot().is_empty());
        assert_eq!(
            format!("{:?}", registry),
            "HandlerRegistry { handlers: 0, next_id: 0 }"
        );
    }
}
