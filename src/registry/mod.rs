//! Handler registries
//!
//! A registry owns the ordered handler list of one channel and the counter
//! that issues handler ids. Notification never walks the live list; it
//! walks a [`Snapshot`] taken at one instant.
//!
//! # Architecture
//!
//! ```text
//!                       Registry<T>  (thread-safety flag)
//!                  ┌───────────────┴───────────────┐
//!                  ▼                               ▼
//!            Synchronized                   Unsynchronized
//!          (waits for lock)          (overlap → ConcurrentAccess)
//!                  └───────────────┬───────────────┘
//!                                  ▼
//!                       SyncHandlerRegistry<T>
//!                      Mutex<HandlerRegistry<T>>
//!                                  │
//!                                  ▼
//!                 entries: Arc<Vec<HandlerEntry<T>>>  ──snapshot()──► Snapshot<T>
//!                 next_id: u64                           (Arc clone, copy-on-write)
//! ```
//!
//! # Copy-on-write snapshots
//!
//! Taking a snapshot only clones an `Arc`. The first mutation after that
//! copies the list, so every snapshot keeps the membership it was taken
//! with and never sees a half-applied change.

pub mod entry;
pub mod store;
pub mod strategy;
pub mod sync;

pub use entry::{HandlerEntry, HandlerId};
pub use store::{HandlerRegistry, Snapshot};
pub use strategy::Registry;
pub use sync::SyncHandlerRegistry;
