//! In-process event channels
//!
//! A channel is something handlers register on and its owner notifies.
//! Notifications can run on the caller, be deferred as a whole onto an
//! execution context, or be deferred per handler.
//!
//! # Architecture
//!
//! ```text
//!   Notifier<(A1, .., An)>        typed front end, arity 1..=8
//!            │ add / remove / notify
//!            ▼
//!   Channel<T>                    dispatch policy (default context)
//!            │ add / remove / snapshot
//!            ▼
//!   Registry<T>                   Synchronized | Unsynchronized
//!            │
//!            ▼
//!   HandlerRegistry<T>            ordered entries, id counter
//!
//!   Executor::submit(work)        TokioExecutor | SerialQueue | DeferredQueue | yours
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use observe_rs::{DeferredQueue, Notifier};
//!
//! let queue = Arc::new(DeferredQueue::new());
//! let changed = Notifier::<(u32,)>::with_dispatch(queue.clone());
//!
//! changed.add(|value: u32| println!("changed to {value}")).unwrap();
//! changed.notify((7,)).unwrap();
//!
//! // Nothing has run yet; the whole notification waits on the queue.
//! assert_eq!(queue.pending(), 1);
//! queue.run_pending();
//! ```
//!
//! # Thread safety
//!
//! A thread-safe channel serializes registry access on one short lock. An
//! unsynchronized channel never waits: if two callers overlap, the second
//! gets [`ChannelError::ConcurrentAccess`]. Handlers never run while the
//! registry is locked, so they may add, remove or notify freely.

pub mod channel;
pub mod config;
pub mod context;
pub mod error;
pub mod notifier;
pub mod registry;

pub use channel::Channel;
pub use config::ChannelConfig;
pub use context::{DeferredQueue, ExecutionContext, Executor, SerialQueue, TokioExecutor, Work};
pub use error::{ChannelError, Result};
pub use notifier::{Handler, Notifier};
pub use registry::{HandlerEntry, HandlerId, HandlerRegistry, Snapshot, SyncHandlerRegistry};
