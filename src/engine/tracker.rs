// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared success/error accounting and the cooperative termination flag.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::config::consts::DEFAULT_ERROR_LOG_CAPACITY;
use crate::traits::Progress;

/// Counters and flags describing a running batch.
///
/// Every method takes `&self` and is safe to call from any number of workers at
/// once. Readers get no snapshot isolation: a count read while workers are busy
/// may already include increments that a later read of another field does not.
///
/// The error log keeps at most `capacity` messages; once full, the oldest message
/// is evicted. The error *count* is never truncated.
#[derive(Debug)]
pub struct ExecutionTracker {
    success: AtomicUsize,
    errors: AtomicUsize,
    error_log: Mutex<ErrorLog>,
    terminate: AtomicBool,
}

#[derive(Debug)]
struct ErrorLog {
    messages: VecDeque<String>,
    capacity: usize,
    dropped: usize,
}

impl ErrorLog {
    fn record(&mut self, message: String) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
            self.dropped += 1;
        }
        self.messages.push_back(message);
    }
}

/// Copy of the tracker state taken at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSnapshot {
    pub success_count: usize,
    pub error_count: usize,
    /// Most recent error messages, oldest first
    pub error_messages: Vec<String>,
    /// Messages evicted from the bounded log
    pub dropped_error_messages: usize,
    pub terminated: bool,
}

impl ExecutionTracker {
    pub fn new() -> Self {
        Self::with_error_capacity(DEFAULT_ERROR_LOG_CAPACITY)
    }

    /// Create a tracker that keeps at most `capacity` error messages
    pub fn with_error_capacity(capacity: usize) -> Self {
        Self {
            success: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            error_log: Mutex::new(ErrorLog {
                messages: VecDeque::new(),
                capacity,
                dropped: 0,
            }),
            terminate: AtomicBool::new(false),
        }
    }

    pub fn increment_success(&self) {
        self.success.fetch_add(1, Ordering::AcqRel);
    }

    /// Count one failed task and keep its message
    pub fn increment_error(&self, message: impl Into<String>) {
        self.error_log.lock().record(message.into());
        self.errors.fetch_add(1, Ordering::AcqRel);
    }

    /// Ask every worker to stop before taking its next task.
    ///
    /// Nothing in the engine calls this on its own; it is the hook for callers that
    /// want to abandon a batch early. Tasks already executing are never interrupted.
    /// Once set the flag stays set.
    pub fn signal_terminate(&self) {
        self.terminate.store(true, Ordering::Release);
    }

    pub fn should_terminate(&self) -> bool {
        self.terminate.load(Ordering::Acquire)
    }

    pub fn success_count(&self) -> usize {
        self.success.load(Ordering::Acquire)
    }

    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Acquire)
    }

    /// Error count together with the retained messages
    pub fn errors(&self) -> (usize, Vec<String>) {
        let messages = self.error_log.lock().messages.iter().cloned().collect();
        (self.error_count(), messages)
    }

    /// Progress of a batch of `total` tasks as seen right now
    pub fn progress(&self, total: usize) -> Progress {
        Progress::new(self.success_count(), self.error_count(), total)
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        let (error_messages, dropped_error_messages) = {
            let log = self.error_log.lock();
            (log.messages.iter().cloned().collect(), log.dropped)
        };
        TrackerSnapshot {
            success_count: self.success_count(),
            error_count: self.error_count(),
            error_messages,
            dropped_error_messages,
            terminated: self.should_terminate(),
        }
    }
}

impl Default for ExecutionTracker {
    fn default() -> Self {
        Self::new()
    }
}
