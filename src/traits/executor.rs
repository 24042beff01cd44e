// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::engine::{ExecutionTracker, Task};
use crate::errors::ExecutionError;
use crate::traits::{ProgressReporter, TaskProcessor};

/// How a batch is spread over workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A fixed pool of concurrent workers sharing one queue; results arrive in completion order
    Parallel,
    /// One task at a time in input order; results keep input order
    Sequential,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Parallel => "parallel",
            Strategy::Sequential => "sequential",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait BatchExecutor<R: Send + 'static>: Send + Sync {
    /// Strategy implemented by this executor
    fn strategy(&self) -> Strategy;

    /// Number of workers the executor runs the batch with
    fn worker_count(&self) -> usize;

    /// Run every task through `processor`, recording outcomes in `tracker`.
    ///
    /// - `tasks`: already validated batch
    /// - `processor`: execution function shared by all workers
    /// - `tracker`: fresh tracker for this batch; callers may hold a clone to
    ///   request cooperative termination
    /// - `progress`: optional reporter polled while the batch runs and once more
    ///   after the last worker stops
    ///
    /// Returns the results of successful tasks. Task failures are recorded in the
    /// tracker and never turn into an `Err`.
    async fn execute(
        &self,
        tasks: Vec<Task>,
        processor: Arc<dyn TaskProcessor<Output = R>>,
        tracker: Arc<ExecutionTracker>,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Vec<R>, ExecutionError>;
}
