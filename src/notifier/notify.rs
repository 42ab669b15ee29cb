//! Typed notifier

use std::sync::Arc;

use crate::channel::Channel;
use crate::config::ChannelConfig;
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::registry::HandlerId;

use super::handler::Handler;

/// Stored form of a handler
pub type BoxedHandler<Args> = Arc<dyn Handler<Args>>;

/// Typed event front end over a [`Channel`]
///
/// `Args` is the tuple of argument types every notification carries, e.g.
/// `Notifier<(String,)>` or `Notifier<(String, u32, f64)>`. Each handler
/// receives its own clone of the arguments.
pub struct Notifier<Args> {
    channel: Channel<BoxedHandler<Args>>,
}

impl<Args> Notifier<Args>
where
    Args: Clone + Send + Sync + 'static,
{
    /// Not thread safe; handlers run on the notifying caller
    pub fn new() -> Self {
        Self::with_config(ChannelConfig::default())
    }

    /// Thread safe; handlers run on the notifying caller
    pub fn thread_safe() -> Self {
        Self::with_config(ChannelConfig::default().thread_safe(true))
    }

    /// Not thread safe; every notification is submitted to `context`
    ///
    /// Do not notify from work running on `context` itself if that context
    /// is serial and the caller waits for the handlers.
    pub fn with_dispatch(context: ExecutionContext) -> Self {
        Self::with_config(ChannelConfig::with_context(context))
    }

    /// Create a notifier from a config
    pub fn with_config(config: ChannelConfig) -> Self {
        Self {
            channel: Channel::new(config),
        }
    }

    /// Register a handler called wherever the notification runs
    pub fn add<H>(&self, handler: H) -> Result<HandlerId>
    where
        H: Handler<Args>,
    {
        self.channel.add(Arc::new(handler))
    }

    /// Register a handler that is always called on `context`
    pub fn add_on<H>(&self, handler: H, context: ExecutionContext) -> Result<HandlerId>
    where
        H: Handler<Args>,
    {
        self.channel.add_on(Arc::new(handler), context)
    }

    /// Unregister a handler; unknown ids are ignored
    pub fn remove(&self, id: HandlerId) -> Result<bool> {
        self.channel.remove(id)
    }

    /// Call every registered handler with `args`
    ///
    /// Returns once inline handlers have run, or immediately when the
    /// notifier has a default context. See [`Channel::dispatch`].
    pub fn notify(&self, args: Args) -> Result<()> {
        self.channel.dispatch(move |handler| handler.call(args.clone()))
    }

    /// Number of registered handlers
    pub fn len(&self) -> Result<usize> {
        self.channel.len()
    }

    /// True if no handler is registered
    pub fn is_empty(&self) -> Result<bool> {
        self.channel.is_empty()
    }

    /// Underlying channel
    pub fn channel(&self) -> &Channel<BoxedHandler<Args>> {
        &self.channel
    }
}

impl<Args> Default for Notifier<Args>
where
    Args: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Notifier<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("channel", &self.channel)
            .finish()
    }
}
