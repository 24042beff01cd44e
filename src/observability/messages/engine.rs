// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for batch lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Batch validation and strategy selection
//! * Batch execution lifecycle (start, completion, failure)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Batch execution started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_workpool::observability::messages::engine::BatchStarted;
///
/// let msg = BatchStarted {
///     strategy: "parallel",
///     task_count: 5,
///     worker_count: 4,
/// };
///
/// assert_eq!(msg.to_string(), "Starting batch with parallel strategy: 5 tasks, 4 workers");
/// ```
pub struct BatchStarted<'a> {
    pub strategy: &'a str,
    pub task_count: usize,
    pub worker_count: usize,
}

impl Display for BatchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting batch with {} strategy: {} tasks, {} workers",
            self.strategy, self.task_count, self.worker_count
        )
    }
}

impl StructuredLog for BatchStarted<'_> {
    fn log(&self) {
        tracing::info!(
            strategy = self.strategy,
            task_count = self.task_count,
            worker_count = self.worker_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch",
            span_name = name,
            strategy = self.strategy,
            task_count = self.task_count,
            worker_count = self.worker_count,
        )
    }
}

/// Batch execution completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BatchCompleted<'a> {
    pub strategy: &'a str,
    pub success_count: usize,
    pub error_count: usize,
    pub skipped: usize,
    pub duration: std::time::Duration,
}

impl Display for BatchCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Batch completed with {} strategy: {} succeeded, {} failed, {} skipped in {:?}",
            self.strategy, self.success_count, self.error_count, self.skipped, self.duration
        )
    }
}

impl StructuredLog for BatchCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            strategy = self.strategy,
            success_count = self.success_count,
            error_count = self.error_count,
            skipped = self.skipped,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch_completed",
            span_name = name,
            strategy = self.strategy,
            success_count = self.success_count,
            error_count = self.error_count,
            duration = ?self.duration,
        )
    }
}

/// Batch execution aborted before producing results.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_workpool::observability::messages::engine::BatchFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "no runtime");
/// let msg = BatchFailed {
///     strategy: "parallel",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct BatchFailed<'a> {
    pub strategy: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for BatchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Batch failed with {} strategy: {}",
            self.strategy, self.error
        )
    }
}

impl StructuredLog for BatchFailed<'_> {
    fn log(&self) {
        tracing::error!(
            strategy = self.strategy,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "batch_failed",
            span_name = name,
            strategy = self.strategy,
            error = %self.error,
        )
    }
}

/// Batch rejected during validation; nothing was executed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct BatchRejected<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for BatchRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Batch rejected before execution: {}", self.error)
    }
}

impl StructuredLog for BatchRejected<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("batch_rejected", span_name = name, error = %self.error)
    }
}

/// Multi-worker execution was requested but the environment cannot provide it.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct ParallelUnavailable<'a> {
    pub reason: &'a str,
}

impl Display for ParallelUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parallel execution unavailable, falling back to sequential: {}",
            self.reason
        )
    }
}

impl StructuredLog for ParallelUnavailable<'_> {
    fn log(&self) {
        tracing::warn!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("parallel_unavailable", span_name = name, reason = self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn batch_completed_mentions_every_count() {
        let msg = BatchCompleted {
            strategy: "sequential",
            success_count: 3,
            error_count: 1,
            skipped: 2,
            duration: Duration::from_millis(5),
        };
        assert_eq!(
            msg.to_string(),
            "Batch completed with sequential strategy: 3 succeeded, 1 failed, 2 skipped in 5ms"
        );
    }

    #[test]
    fn parallel_unavailable_reads_as_fallback() {
        let msg = ParallelUnavailable {
            reason: "current-thread runtime",
        };
        assert!(msg.to_string().contains("falling back to sequential"));
    }
}
