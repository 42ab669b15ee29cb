//! Typed notifiers
//!
//! [`Notifier<Args>`] fixes the argument types of one event. `Args` is a
//! tuple of 1 to 8 types; handlers are closures taking that many
//! parameters, and `notify` takes the tuple.
//!
//! ```text
//!   Notifier<(A1, .., An)>::notify((a1, .., an))
//!       │
//!       ▼
//!   Channel::dispatch(|handler| handler.call((a1, .., an).clone()))
//!       │
//!       ▼
//!   Handler<(A1, .., An)> for Fn(A1, .., An)  ──►  handler(a1, .., an)
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use observe_rs::Notifier;
//!
//! let moved = Notifier::<(String, i32, i32)>::new();
//! let log = Arc::new(Mutex::new(Vec::new()));
//!
//! let l = Arc::clone(&log);
//! let id = moved
//!     .add(move |name: String, x: i32, y: i32| {
//!         l.lock().unwrap().push(format!("{name} -> ({x}, {y})"));
//!     })
//!     .unwrap();
//!
//! moved.notify(("player".to_string(), 3, 4)).unwrap();
//! moved.remove(id).unwrap();
//! moved.notify(("player".to_string(), 5, 6)).unwrap();
//!
//! assert_eq!(*log.lock().unwrap(), vec!["player -> (3, 4)"]);
//! ```

mod handler;
mod notify;

pub use handler::Handler;
pub use notify::{BoxedHandler, Notifier};
