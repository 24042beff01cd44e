// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for batch execution and for individual task failures.

use std::any::Any;

use thiserror::Error;
use tokio::task::JoinError;

use super::ValidationError;

/// Fatal errors that abort a whole batch run.
///
/// Per-task failures never show up here; they are recorded by the
/// [`ExecutionTracker`](crate::engine::ExecutionTracker) and the batch carries on.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The submitted batch failed validation; no task was executed
    #[error("batch validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The shared context that workers coordinate through could not be set up
    #[error("unable to establish shared execution context: {reason}")]
    CoordinationBootstrap { reason: String },

    /// A worker stopped without finishing its loop (e.g. a panicking processor)
    #[error("worker {worker_id} crashed: {message}")]
    WorkerCrashed { worker_id: usize, message: String },
}

/// Failure of a single task, produced by a [`TaskProcessor`](crate::traits::TaskProcessor).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskError {
    /// The processor reported a failure
    #[error("{0}")]
    Failed(String),

    /// The processor panicked while handling the task
    #[error("task panicked: {0}")]
    Panicked(String),

    /// The blocking call backing the task was cancelled before it finished
    #[error("task was cancelled before completion")]
    Cancelled,
}

impl TaskError {
    /// Shorthand for [`TaskError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        TaskError::Failed(message.into())
    }

    pub(crate) fn from_join_error(error: JoinError) -> Self {
        if error.is_cancelled() {
            return TaskError::Cancelled;
        }
        match error.try_into_panic() {
            Ok(payload) => TaskError::Panicked(panic_message(payload.as_ref())),
            Err(error) => TaskError::Failed(error.to_string()),
        }
    }
}

impl From<String> for TaskError {
    fn from(message: String) -> Self {
        TaskError::Failed(message)
    }
}

impl From<&str> for TaskError {
    fn from(message: &str) -> Self {
        TaskError::Failed(message.to_string())
    }
}

/// Extract the human readable part of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
