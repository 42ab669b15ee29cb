//! Dispatch wrapper
//!
//! A [`Channel`] pairs a handler registry with a dispatch policy. The policy
//! has two independent deferral axes that compose:
//!
//! ```text
//!   dispatch(apply)
//!       │
//!       ├─ default_context = Some(C) ── submit whole dispatch to C, return now
//!       └─ default_context = None    ── run dispatch here
//!                 │
//!                 ▼
//!          snapshot of registry
//!                 │
//!      for each entry (registration order):
//!          ├─ entry.context = Some(E) ── submit apply(callback) to E
//!          └─ entry.context = None    ── apply(callback) inline
//! ```
//!
//! An entry's own context always wins over the channel's context for that
//! entry.
//!
//! # Serial context hazard
//!
//! Submitting to a strictly serial context from work that is already running
//! on that same context does not deadlock, but the submitted work cannot
//! start until the current unit returns. Pick distinct contexts for
//! notify-time and handler-time work when a handler waits on its own
//! notifications.

pub mod dispatch;

pub use dispatch::Channel;
