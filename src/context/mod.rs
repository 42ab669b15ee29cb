//! Execution contexts
//!
//! An execution context is anything work can be handed to for later
//! execution. Channels only ever call [`Executor::submit`]; they never
//! inspect or manage the context itself.
//!
//! # Bundled contexts
//!
//! ```text
//!   TokioExecutor   ── submit ──► runtime blocking pool   (no ordering)
//!   SerialQueue     ── submit ──► mpsc ──► single worker  (FIFO)
//!   DeferredQueue   ── submit ──► VecDeque ◄── run_pending() by caller (FIFO)
//! ```
//!
//! None of them own threads. `TokioExecutor` and `SerialQueue` run on a
//! runtime the caller already has; `DeferredQueue` runs wherever the caller
//! drains it.

pub mod deferred;
pub mod executor;
pub mod runtime;

pub use deferred::DeferredQueue;
pub use executor::{ExecutionContext, Executor, Work};
pub use runtime::{SerialQueue, TokioExecutor};
