//! Channel implementation

use std::sync::Arc;

use crate::config::ChannelConfig;
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::registry::{HandlerId, Registry, Snapshot};

/// A handler registry plus its dispatch policy
///
/// `T` is the stored callback type; the channel never calls it directly but
/// hands it to the applier passed to [`Channel::dispatch`].
pub struct Channel<T> {
    /// Shared with dispatch work in flight on the default context
    registry: Arc<Registry<T>>,

    /// Context whole dispatches are submitted to
    default_context: Option<ExecutionContext>,
}

impl<T> Channel<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a channel from a config
    pub fn new(config: ChannelConfig) -> Self {
        Self {
            registry: Arc::new(Registry::new(config.thread_safe)),
            default_context: config.default_context,
        }
    }

    /// Register a callback that runs wherever the dispatch runs
    pub fn add(&self, callback: T) -> Result<HandlerId> {
        self.register(callback, None)
    }

    /// Register a callback that is always submitted to `context`
    pub fn add_on(&self, callback: T, context: ExecutionContext) -> Result<HandlerId> {
        self.register(callback, Some(context))
    }

    fn register(&self, callback: T, context: Option<ExecutionContext>) -> Result<HandlerId> {
        let deferred = context.is_some();
        let id = self.registry.add(callback, context)?;

        tracing::debug!(handler = %id, deferred, "Handler added");

        Ok(id)
    }

    /// Unregister a callback
    ///
    /// Unknown ids are ignored (`Ok(false)`). Invocations already captured
    /// by a running or submitted dispatch still run.
    pub fn remove(&self, id: HandlerId) -> Result<bool> {
        let removed = self.registry.remove(id)?;

        if removed {
            tracing::debug!(handler = %id, "Handler removed");
        } else {
            tracing::trace!(handler = %id, "Remove of unknown handler ignored");
        }

        Ok(removed)
    }

    /// Deliver one notification by calling `apply` for every registered
    /// callback
    ///
    /// With a default context the whole dispatch, snapshot included, is
    /// submitted there and this returns immediately. Otherwise the snapshot
    /// is taken now and inline handlers have all run when this returns.
    /// Handlers with their own context are only submitted, never awaited.
    ///
    /// Inline dispatch on an unsynchronized channel fails with
    /// `ConcurrentAccess` if another caller is inside the registry. Deferred
    /// dispatches may overlap each other on a parallel context, so they wait
    /// for the registry instead and always deliver.
    pub fn dispatch<F>(&self, apply: F) -> Result<()>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let apply = Arc::new(apply);

        match &self.default_context {
            Some(context) => {
                let registry = Arc::clone(&self.registry);
                context.submit(Box::new(move || {
                    deliver(&registry.snapshot_blocking(), &apply);
                }));
                Ok(())
            }
            None => {
                let snapshot = self.registry.snapshot()?;
                deliver(&snapshot, &apply);
                Ok(())
            }
        }
    }

    /// Number of registered handlers
    pub fn len(&self) -> Result<usize> {
        self.registry.len()
    }

    /// True if no handler is registered
    pub fn is_empty(&self) -> Result<bool> {
        self.registry.is_empty()
    }

    /// True if a handler with `id` is registered
    pub fn contains(&self, id: HandlerId) -> Result<bool> {
        self.registry.contains(id)
    }

    /// Whether concurrent callers are serialized rather than rejected
    pub fn is_thread_safe(&self) -> bool {
        self.registry.is_thread_safe()
    }

    /// Context whole dispatches are submitted to, if any
    pub fn default_context(&self) -> Option<&ExecutionContext> {
        self.default_context.as_ref()
    }
}

impl<T> Default for Channel<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(ChannelConfig::default())
    }
}

impl<T> std::fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("registry", &self.registry)
            .field("default_context", &self.default_context.is_some())
            .finish()
    }
}

/// Run or submit every entry of one snapshot
fn deliver<T, F>(snapshot: &Snapshot<T>, apply: &Arc<F>)
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    let deferred = snapshot.iter().filter(|entry| entry.is_deferred()).count();

    tracing::trace!(
        handlers = snapshot.len(),
        inline = snapshot.len() - deferred,
        deferred,
        "Dispatching"
    );

    for entry in snapshot {
        match entry.context() {
            Some(context) => {
                let apply = Arc::clone(apply);
                let callback = entry.callback().clone();
                context.submit(Box::new(move || apply(&callback)));
            }
            None => apply(entry.callback()),
        }
    }
}
