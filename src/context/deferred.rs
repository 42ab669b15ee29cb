//! Manually drained work queue
//!
//! [`DeferredQueue`] collects submitted work and runs it only when the owner
//! calls [`DeferredQueue::run_pending`]. It fits event loops that drain a
//! queue once per tick, and makes deferral observable in tests.

use std::collections::VecDeque;

use parking_lot::Mutex;

use super::executor::{Executor, Work};

/// FIFO work queue drained by its owner
#[derive(Default)]
pub struct DeferredQueue {
    queue: Mutex<VecDeque<Work>>,
}

impl DeferredQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of units waiting to run
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// True if nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Run every unit that was queued when the call started, in
    /// submission order
    ///
    /// Work submitted while draining stays queued for the next call. The
    /// lock is released before any unit runs, so units may submit freely.
    /// Returns the number of units run.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.queue.lock());
        let count = batch.len();

        for work in batch {
            work();
        }

        count
    }

    /// Drain repeatedly until a pass finds the queue empty
    ///
    /// Returns the total number of units run.
    pub fn run_until_idle(&self) -> usize {
        let mut total = 0;
        loop {
            let ran = self.run_pending();
            if ran == 0 {
                return total;
            }
            total += ran;
        }
    }
}

impl Executor for DeferredQueue {
    fn submit(&self, work: Work) {
        self.queue.lock().push_back(work);
    }
}

impl std::fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_submit_does_not_run() {
        let queue = DeferredQueue::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let l = Arc::clone(&log);
        queue.submit(Box::new(move || l.lock().push(1)));

        assert_eq!(queue.pending(), 1);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_run_pending_fifo() {
        let queue = DeferredQueue::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let l = Arc::clone(&log);
            queue.submit(Box::new(move || l.lock().push(i)));
        }

        assert_eq!(queue.run_pending(), 5);
        assert_eq!(*log.lock(), vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_nested_submit_waits_for_next_drain() {
        let queue = Arc::new(DeferredQueue::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let q = Arc::clone(&queue);
        let l = Arc::clone(&log);
        queue.submit(Box::new(move || {
            l.lock().push("outer");
            let l = Arc::clone(&l);
            q.submit(Box::new(move || l.lock().push("inner")));
        }));

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*log.lock(), vec!["outer"]);
        assert_eq!(queue.pending(), 1);

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*log.lock(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_run_until_idle() {
        let queue = Arc::new(DeferredQueue::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let q = Arc::clone(&queue);
        let l = Arc::clone(&log);
        queue.submit(Box::new(move || {
            l.lock().push(1);
            let l = Arc::clone(&l);
            q.submit(Box::new(move || l.lock().push(2)));
        }));

        assert_eq!(queue.run_until_idle(), 2);
        assert_eq!(*log.lock(), vec![1, 2]);
        assert_eq!(queue.run_until_idle(), 0);
    }

    #[test]
    fn test_debug_shows_pending() {
        let queue = DeferredQueue::new();
        queue.submit(Box::new(|| {}));
        assert_eq!(format!("{:?}", queue), "DeferredQueue { pending: 1 }");
    }
}
