// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! FIFO queue shared by every worker of a batch.
//!
//! The same container carries pending tasks (orchestrator → workers) and
//! finished results (workers → orchestrator). Every operation takes the internal
//! lock for its whole duration, so callers never coordinate through locks of
//! their own, and `pop` never blocks waiting for items: an exhausted queue
//! answers `None` and the worker stops.
//!
//! # Examples
//!
//! ```rust
//! use the_workpool::engine::TaskQueue;
//!
//! let queue = TaskQueue::new();
//! queue.push_multiple(vec!["first", "second"]);
//! queue.push("third");
//!
//! assert_eq!(queue.pop(), Some("first"));
//! assert_eq!(queue.pop_all(), vec!["second", "third"]);
//! assert_eq!(queue.pop(), None);
//! assert!(queue.is_empty());
//! ```

use std::collections::VecDeque;

use parking_lot::Mutex;

#[derive(Debug)]
pub struct TaskQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> TaskQueue<T> {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    /// Append every item, preserving the iterator's order
    pub fn push_multiple<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.lock().extend(items);
    }

    /// Append a single item
    pub fn push(&self, item: T) {
        self.items.lock().push_back(item);
    }

    /// Remove the oldest item, or `None` when the queue is exhausted
    pub fn pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Drain every remaining item in insertion order
    pub fn pop_all(&self) -> Vec<T> {
        self.items.lock().drain(..).collect()
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
