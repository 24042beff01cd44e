// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Parallel batch executor: a fixed pool of workers sharing one task queue.
//!
//! # Architecture Overview
//!
//! ```text
//!            push_multiple                 pop
//! tasks ───────────────────▶ TaskQueue ◀──────────── Worker 0..n
//!                                                       │
//!                            results ◀── push ──────────┤
//!                            tracker ◀── increment ─────┘
//! ```
//!
//! The orchestrating future fills the queue, spawns `worker_count` workers on the
//! current tokio runtime, then polls: every `poll_interval` it hands the tracker's
//! counts to the progress reporter and checks whether every worker has finished.
//! Once they all have, it reports one last time and drains the result queue.
//!
//! # Characteristics
//!
//! - **Ordering**: tasks leave the queue in FIFO order, but results are collected
//!   in completion order
//! - **Failure isolation**: a task error is recorded by its worker and the worker
//!   carries on; only a worker that panics aborts the batch
//! - **Termination**: polling keys on worker liveness, so a batch whose workers
//!   stopped on the termination flag returns even with tasks left in the queue
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use the_workpool::engine::{ExecutionTracker, ParallelExecutor, Task};
//! use the_workpool::traits::{BatchExecutor, FnProcessor};
//!
//! # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = ParallelExecutor::new(2);
//! let tasks = Task::from_values(vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})])?;
//! let processor = FnProcessor::shared(|task: &Task| {
//!     task.get("id").and_then(|v| v.as_i64()).map(|id| id * 2).ok_or("missing id")
//! });
//! let tracker = Arc::new(ExecutionTracker::new());
//!
//! let mut results = executor.execute(tasks, processor, Arc::clone(&tracker), None).await?;
//! results.sort();
//!
//! assert_eq!(results, vec![2, 4, 6]);
//! assert_eq!(tracker.success_count(), 3);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::consts::DEFAULT_POLL_INTERVAL_MS;
use crate::engine::{ExecutionTracker, Task, TaskQueue, Worker, WorkerReport};
use crate::errors::{panic_message, ExecutionError};
use crate::traits::{BatchExecutor, ProgressReporter, Strategy, TaskProcessor};

/// Runs a batch on `worker_count` concurrently scheduled workers.
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    worker_count: usize,
    poll_interval: Duration,
}

impl ParallelExecutor {
    /// Create an executor with `worker_count` workers (at least one).
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[async_trait]
impl<R: Send + 'static> BatchExecutor<R> for ParallelExecutor {
    fn strategy(&self) -> Strategy {
        Strategy::Parallel
    }

    fn worker_count(&self) -> usize {
        self.worker_count
    }

    async fn execute(
        &self,
        tasks: Vec<Task>,
        processor: Arc<dyn TaskProcessor<Output = R>>,
        tracker: Arc<ExecutionTracker>,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Vec<R>, ExecutionError> {
        // Workers must be able to observe the shared queue from other threads
        let runtime = Handle::try_current().map_err(|e| ExecutionError::CoordinationBootstrap {
            reason: e.to_string(),
        })?;

        let total = tasks.len();
        let queue = Arc::new(TaskQueue::new());
        queue.push_multiple(tasks);
        let results = Arc::new(TaskQueue::new());

        let handles: Vec<JoinHandle<WorkerReport>> = (0..self.worker_count)
            .map(|worker_id| {
                let worker = Worker::new(
                    worker_id,
                    Arc::clone(&queue),
                    Arc::clone(&results),
                    Arc::clone(&processor),
                    Arc::clone(&tracker),
                );
                runtime.spawn(worker.run())
            })
            .collect();

        loop {
            if let Some(reporter) = progress {
                reporter.report(tracker.progress(total));
            }
            if handles.iter().all(|handle| handle.is_finished()) {
                break;
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        let mut crashed = None;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(report) => {
                    tracing::trace!(
                        worker_id = report.worker_id,
                        processed = report.processed,
                        "Worker joined"
                    );
                }
                Err(join_error) => {
                    let message = match join_error.try_into_panic() {
                        Ok(payload) => panic_message(payload.as_ref()),
                        Err(join_error) => join_error.to_string(),
                    };
                    tracing::error!(worker_id, message = %message, "Worker crashed");
                    crashed.get_or_insert(ExecutionError::WorkerCrashed { worker_id, message });
                }
            }
        }

        if let Some(reporter) = progress {
            reporter.report(tracker.progress(total));
        }

        match crashed {
            Some(error) => Err(error),
            None => Ok(results.pop_all()),
        }
    }
}
