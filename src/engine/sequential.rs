// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential batch executor: one task at a time, in input order.
//!
//! Each task gets a fresh single-item queue and a fresh worker, and the worker
//! is awaited before the next task is looked at. This is the reference
//! semantics for ordering and the fallback when parallel execution is
//! unavailable or disabled.
//!
//! No tokio runtime is needed: inside one, each worker is spawned and awaited
//! so a panicking processor is reported as a crash; outside one, the worker
//! runs inline on the caller's executor.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;

use crate::engine::{ExecutionTracker, Task, TaskQueue, Worker};
use crate::errors::{panic_message, ExecutionError};
use crate::traits::{BatchExecutor, ProgressReporter, Strategy, TaskProcessor};

#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl<R: Send + 'static> BatchExecutor<R> for SequentialExecutor {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    fn worker_count(&self) -> usize {
        1
    }

    async fn execute(
        &self,
        tasks: Vec<Task>,
        processor: Arc<dyn TaskProcessor<Output = R>>,
        tracker: Arc<ExecutionTracker>,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Vec<R>, ExecutionError> {
        let total = tasks.len();
        let results = Arc::new(TaskQueue::new());
        let runtime = Handle::try_current().ok();

        for task in tasks {
            if tracker.should_terminate() {
                break;
            }

            let queue = Arc::new(TaskQueue::new());
            queue.push(task);
            let worker = Worker::new(
                0,
                queue,
                Arc::clone(&results),
                Arc::clone(&processor),
                Arc::clone(&tracker),
            );

            match &runtime {
                Some(handle) => {
                    // Awaited immediately; spawning only isolates a panicking processor
                    if let Err(join_error) = handle.spawn(worker.run()).await {
                        let message = match join_error.try_into_panic() {
                            Ok(payload) => panic_message(payload.as_ref()),
                            Err(join_error) => join_error.to_string(),
                        };
                        tracing::error!(worker_id = 0, message = %message, "Worker crashed");
                        return Err(ExecutionError::WorkerCrashed {
                            worker_id: 0,
                            message,
                        });
                    }
                }
                None => {
                    worker.run().await;
                }
            }

            if let Some(reporter) = progress {
                reporter.report(tracker.progress(total));
            }
        }

        if let Some(reporter) = progress {
            reporter.report(tracker.progress(total));
        }

        Ok(results.pop_all())
    }
}
