// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for worker lifecycle and per-task events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Worker entered its pop-execute-record loop.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct WorkerStarted {
    pub worker_id: usize,
}

impl Display for WorkerStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Worker {} started", self.worker_id)
    }
}

impl StructuredLog for WorkerStarted {
    fn log(&self) {
        tracing::debug!(worker_id = self.worker_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("worker", span_name = name, worker_id = self.worker_id)
    }
}

/// Worker left its loop.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct WorkerStopped<'a> {
    pub worker_id: usize,
    pub processed: usize,
    pub reason: &'a str,
}

impl Display for WorkerStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker {} stopped after {} tasks: {}",
            self.worker_id, self.processed, self.reason
        )
    }
}

impl StructuredLog for WorkerStopped<'_> {
    fn log(&self) {
        tracing::debug!(
            worker_id = self.worker_id,
            processed = self.processed,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "worker_stopped",
            span_name = name,
            worker_id = self.worker_id,
            processed = self.processed,
            reason = self.reason,
        )
    }
}

/// A task's processor returned an error; the worker records it and moves on.
///
/// The `Display` form is also the message stored in the execution tracker, so it
/// carries both the error and the offending task's parameters.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_workpool::observability::messages::worker::TaskFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "division by zero");
/// let msg = TaskFailed {
///     worker_id: 0,
///     processor: "divider",
///     error: &error,
///     task: &r#"{"id":2}"#,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     r#"Execution error in 'divider': division by zero | params: {"id":2}"#
/// );
/// ```
pub struct TaskFailed<'a> {
    pub worker_id: usize,
    pub processor: &'a str,
    pub error: &'a dyn std::error::Error,
    pub task: &'a dyn Display,
}

impl Display for TaskFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Execution error in '{}': {} | params: {}",
            self.processor, self.error, self.task
        )
    }
}

impl StructuredLog for TaskFailed<'_> {
    fn log(&self) {
        tracing::error!(
            worker_id = self.worker_id,
            processor = self.processor,
            error = %self.error,
            task = %self.task,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "task_failed",
            span_name = name,
            worker_id = self.worker_id,
            processor = self.processor,
            error = %self.error,
        )
    }
}
