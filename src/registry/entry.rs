//! Handler entry and id types

use crate::context::ExecutionContext;

/// Identifier issued by a registry for one registered handler
///
/// Ids start at 0 and increase by one per registration. A registry never
/// reuses an id, even after the handler is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One registered handler
///
/// Entries are never mutated after creation. Cloning an entry clones the
/// callback handle, which is expected to be cheap (an `Arc`).
#[derive(Clone)]
pub struct HandlerEntry<T> {
    id: HandlerId,
    callback: T,
    context: Option<ExecutionContext>,
}

impl<T> HandlerEntry<T> {
    pub(super) fn new(id: HandlerId, callback: T, context: Option<ExecutionContext>) -> Self {
        Self {
            id,
            callback,
            context,
        }
    }

    /// Id issued at registration
    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// The registered callback
    pub fn callback(&self) -> &T {
        &self.callback
    }

    /// Context this handler asked to be called on, if any
    pub fn context(&self) -> Option<&ExecutionContext> {
        self.context.as_ref()
    }

    /// Whether the handler runs on its own context
    pub fn is_deferred(&self) -> bool {
        self.context.is_some()
    }
}

impl<T> std::fmt::Debug for HandlerEntry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("id", &self.id)
            .field("deferred", &self.is_deferred())
            .finish()
    }
}
