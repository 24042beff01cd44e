// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The pop-execute-record loop run by every worker.

use std::fmt;
use std::sync::Arc;

use crate::engine::{ExecutionTracker, Task, TaskQueue};
use crate::observability::messages::worker::{TaskFailed, WorkerStarted, WorkerStopped};
use crate::observability::messages::StructuredLog;
use crate::traits::TaskProcessor;

/// Why a worker left its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The task queue answered `None`; the normal completion path
    QueueExhausted,
    /// The tracker's termination flag was set before the next task was taken
    Terminated,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::QueueExhausted => f.write_str("queue exhausted"),
            StopReason::Terminated => f.write_str("termination requested"),
        }
    }
}

/// Summary returned when a worker's loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Tasks taken from the queue, successful or not
    pub processed: usize,
    pub stop_reason: StopReason,
}

/// Consumes tasks from a shared queue until it is exhausted or termination is requested.
///
/// Every task taken produces exactly one tracker mutation: a success (and one
/// result pushed) or an error (and no result). A failing task never ends the loop.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use the_workpool::engine::{ExecutionTracker, StopReason, Task, TaskQueue, Worker};
/// use the_workpool::traits::FnProcessor;
///
/// # #[tokio::main]
/// # async fn main() {
/// let queue = Arc::new(TaskQueue::new());
/// queue.push_multiple(Task::from_values(vec![json!({"id": 1}), json!({"id": 2})]).unwrap());
/// let results = Arc::new(TaskQueue::new());
/// let tracker = Arc::new(ExecutionTracker::new());
/// let processor = FnProcessor::shared(|task: &Task| {
///     task.get("id").and_then(|v| v.as_i64()).ok_or("missing id")
/// });
///
/// let worker = Worker::new(0, queue, Arc::clone(&results), processor, Arc::clone(&tracker));
/// let report = worker.run().await;
///
/// assert_eq!(report.processed, 2);
/// assert_eq!(report.stop_reason, StopReason::QueueExhausted);
/// assert_eq!(results.pop_all(), vec![1, 2]);
/// assert_eq!(tracker.success_count(), 2);
/// # }
/// ```
pub struct Worker<R> {
    id: usize,
    tasks: Arc<TaskQueue<Task>>,
    results: Arc<TaskQueue<R>>,
    processor: Arc<dyn TaskProcessor<Output = R>>,
    tracker: Arc<ExecutionTracker>,
}

impl<R: Send + 'static> Worker<R> {
    pub fn new(
        id: usize,
        tasks: Arc<TaskQueue<Task>>,
        results: Arc<TaskQueue<R>>,
        processor: Arc<dyn TaskProcessor<Output = R>>,
        tracker: Arc<ExecutionTracker>,
    ) -> Self {
        Self {
            id,
            tasks,
            results,
            processor,
            tracker,
        }
    }

    /// Run the loop to completion, consuming the worker.
    pub async fn run(self) -> WorkerReport {
        WorkerStarted { worker_id: self.id }.log();

        let mut processed = 0;
        let stop_reason = loop {
            if self.tracker.should_terminate() {
                break StopReason::Terminated;
            }
            let task = match self.tasks.pop() {
                Some(task) => task,
                None => break StopReason::QueueExhausted,
            };

            processed += 1;
            match self.processor.process(&task).await {
                Ok(result) => {
                    self.results.push(result);
                    self.tracker.increment_success();
                }
                Err(error) => {
                    let failure = TaskFailed {
                        worker_id: self.id,
                        processor: self.processor.name(),
                        error: &error,
                        task: &task,
                    };
                    failure.log();
                    self.tracker.increment_error(failure.to_string());
                }
            }
        };

        WorkerStopped {
            worker_id: self.id,
            processed,
            reason: &stop_reason.to_string(),
        }
        .log();

        WorkerReport {
            worker_id: self.id,
            processed,
            stop_reason,
        }
    }
}
