// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Batch entry point: validate, pick a strategy, execute, report.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::Instrument;

use crate::config::{ExecutionCapabilities, ExecutorOptions, HostCapabilities};
use crate::engine::{ExecutionTracker, ExecutorFactory, Task};
use crate::errors::ExecutionError;
use crate::observability::messages::engine::{
    BatchCompleted, BatchFailed, BatchRejected, BatchStarted,
};
use crate::observability::messages::StructuredLog;
use crate::observability::ConsoleProgressReporter;
use crate::traits::{ProgressReporter, Strategy, TaskProcessor};

/// Outcome of one batch run.
#[derive(Debug, Clone)]
pub struct BatchReport<R> {
    /// Results of successful tasks; input order for sequential runs,
    /// completion order for parallel runs
    pub results: Vec<R>,
    pub elapsed: Duration,
    pub strategy: Strategy,
    pub worker_count: usize,
    pub total_tasks: usize,
    pub success_count: usize,
    pub error_count: usize,
    /// Most recent error messages, oldest first
    pub error_messages: Vec<String>,
    /// Error messages evicted from the bounded log
    pub dropped_error_messages: usize,
    /// Tasks never taken from the queue because termination was requested
    pub skipped: usize,
}

impl<R> BatchReport<R> {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Whether every task either succeeded or recorded an error
    pub fn is_complete(&self) -> bool {
        self.success_count + self.error_count == self.total_tasks
    }
}

/// Runs batches of tasks through a processor.
///
/// A runner holds no per-batch state: every call builds its own queue and
/// tracker, so one runner can serve any number of batches.
///
/// # Example
/// ```
/// use serde_json::json;
/// use the_workpool::config::ExecutorOptions;
/// use the_workpool::engine::{BatchRunner, Task};
/// use the_workpool::traits::FnProcessor;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let runner = BatchRunner::new(ExecutorOptions::default());
/// let processor = FnProcessor::shared(|task: &Task| {
///     match task.get("id").and_then(|v| v.as_i64()) {
///         Some(2) => Err("id 2 is not allowed".to_string()),
///         Some(id) => Ok(id * 2),
///         None => Err("missing id".to_string()),
///     }
/// });
///
/// let report = runner.run(vec![json!({"id": 1}), json!({"id": 2})], processor, None).await?;
///
/// assert_eq!(report.results, vec![2]);
/// assert_eq!((report.success_count, report.error_count), (1, 1));
/// assert!(report.error_messages[0].contains(r#"{"id":2}"#));
/// # Ok(())
/// # }
/// ```
pub struct BatchRunner {
    options: ExecutorOptions,
    capabilities: Arc<dyn ExecutionCapabilities>,
}

impl BatchRunner {
    /// Create a runner that asks the ambient tokio runtime what it supports
    pub fn new(options: ExecutorOptions) -> Self {
        Self {
            options,
            capabilities: Arc::new(HostCapabilities),
        }
    }

    /// Replace the capability check used for strategy selection
    pub fn with_capabilities<C>(mut self, capabilities: C) -> Self
    where
        C: ExecutionCapabilities + 'static,
    {
        self.capabilities = Arc::new(capabilities);
        self
    }

    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }

    /// Strategy the next run would use in the current environment
    pub fn strategy(&self) -> Strategy {
        ExecutorFactory::select_strategy(&self.options, self.capabilities.as_ref())
    }

    /// Validate `tasks` and run each of them through `processor`.
    ///
    /// Fails with [`ExecutionError::Validation`] before any task runs when an
    /// element is not a mapping. Task failures are counted in the report and
    /// never fail the call.
    pub async fn run<R: Send + 'static>(
        &self,
        tasks: Vec<Value>,
        processor: Arc<dyn TaskProcessor<Output = R>>,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<BatchReport<R>, ExecutionError> {
        let tracker = Arc::new(ExecutionTracker::with_error_capacity(
            self.options.error_log_capacity(),
        ));
        self.run_with_tracker(tasks, processor, tracker, progress).await
    }

    /// Like [`run`](Self::run), recording into a tracker the caller keeps.
    ///
    /// Holding the tracker lets another task, or the processor itself, call
    /// [`ExecutionTracker::signal_terminate`]. Workers finish the task they are on
    /// and take no more; untouched tasks are reported as `skipped`. The tracker
    /// should be fresh: counts already in it are carried into the report.
    pub async fn run_with_tracker<R: Send + 'static>(
        &self,
        tasks: Vec<Value>,
        processor: Arc<dyn TaskProcessor<Output = R>>,
        tracker: Arc<ExecutionTracker>,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<BatchReport<R>, ExecutionError> {
        let started = Instant::now();

        let tasks = Task::from_values(tasks).map_err(|error| {
            BatchRejected { error: &error }.log();
            ExecutionError::from(error)
        })?;

        let executor = ExecutorFactory::from_options::<R>(&self.options, self.capabilities.as_ref());
        let strategy = executor.strategy();
        let worker_count = executor.worker_count();
        let total_tasks = tasks.len();

        let start_msg = BatchStarted {
            strategy: strategy.as_str(),
            task_count: total_tasks,
            worker_count,
        };
        start_msg.log();

        let results = match executor
            .execute(tasks, processor, Arc::clone(&tracker), progress)
            .instrument(start_msg.span("run"))
            .await
        {
            Ok(results) => results,
            Err(error) => {
                BatchFailed {
                    strategy: strategy.as_str(),
                    error: &error,
                }
                .log();
                return Err(error);
            }
        };

        let elapsed = started.elapsed();
        let snapshot = tracker.snapshot();
        let skipped = total_tasks.saturating_sub(snapshot.success_count + snapshot.error_count);

        BatchCompleted {
            strategy: strategy.as_str(),
            success_count: snapshot.success_count,
            error_count: snapshot.error_count,
            skipped,
            duration: elapsed,
        }
        .log();

        Ok(BatchReport {
            results,
            elapsed,
            strategy,
            worker_count,
            total_tasks,
            success_count: snapshot.success_count,
            error_count: snapshot.error_count,
            error_messages: snapshot.error_messages,
            dropped_error_messages: snapshot.dropped_error_messages,
            skipped,
        })
    }

    /// [`run`](Self::run) with a [`ConsoleProgressReporter`] on stdout.
    ///
    /// The progress line is always terminated, including when the run fails.
    pub async fn run_with_progress<R: Send + 'static>(
        &self,
        tasks: Vec<Value>,
        processor: Arc<dyn TaskProcessor<Output = R>>,
    ) -> Result<BatchReport<R>, ExecutionError> {
        let reporter = ConsoleProgressReporter::new();
        reporter.start();
        let outcome = self.run(tasks, processor, Some(&reporter)).await;
        reporter.stop();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::DoublingProcessor;
    use crate::config::FixedCapabilities;
    use serde_json::json;
    use std::time::Duration;

    fn report(success: usize, errors: usize, total: usize) -> BatchReport<()> {
        BatchReport {
            results: vec![(); success],
            elapsed: Duration::from_millis(1500),
            strategy: Strategy::Sequential,
            worker_count: 1,
            total_tasks: total,
            success_count: success,
            error_count: errors,
            error_messages: Vec::new(),
            dropped_error_messages: 0,
            skipped: total - success - errors,
        }
    }

    #[test]
    fn report_completeness() {
        assert!(report(2, 1, 3).is_complete());
        assert!(!report(1, 0, 3).is_complete());
        assert_eq!(report(0, 0, 0).elapsed_secs(), 1.5);
    }

    #[test]
    fn strategy_follows_capabilities() {
        let runner = BatchRunner::new(ExecutorOptions::default())
            .with_capabilities(FixedCapabilities::sequential_only());
        assert_eq!(runner.strategy(), Strategy::Sequential);

        let runner = BatchRunner::new(ExecutorOptions::default())
            .with_capabilities(FixedCapabilities::new(true, 2));
        assert_eq!(runner.strategy(), Strategy::Parallel);
    }

    #[test]
    fn host_capabilities_without_runtime_pick_sequential() {
        let runner = BatchRunner::new(ExecutorOptions::default());
        assert_eq!(runner.strategy(), Strategy::Sequential);
        assert!(runner.options().multithreaded_if_possible);
    }

    #[test]
    fn parallel_without_runtime_fails_before_any_task() {
        let doubling = Arc::new(DoublingProcessor::new());
        let processor: Arc<dyn TaskProcessor<Output = Value>> = doubling.clone();
        let runner = BatchRunner::new(ExecutorOptions::default())
            .with_capabilities(FixedCapabilities::new(true, 2));

        let outcome = futures::executor::block_on(runner.run(
            vec![json!({"id": 1}), json!({"id": 2})],
            processor,
            None,
        ));

        assert!(matches!(
            outcome,
            Err(ExecutionError::CoordinationBootstrap { .. })
        ));
        assert_eq!(doubling.calls(), 0);
    }

    #[test]
    fn sequential_without_runtime_runs_inline() {
        let runner = BatchRunner::new(ExecutorOptions::default());
        assert_eq!(runner.strategy(), Strategy::Sequential);
        let processor = crate::traits::FnProcessor::shared(|task: &Task| {
            task.get("id").and_then(Value::as_i64).map(|id| id * 2).ok_or("missing id")
        });

        let report = futures::executor::block_on(runner.run(
            vec![json!({"id": 1}), json!({}), json!({"id": 3})],
            processor,
            None,
        ))
        .unwrap();

        assert_eq!(report.strategy, Strategy::Sequential);
        assert_eq!(report.results, vec![2, 6]);
        assert_eq!((report.success_count, report.error_count), (2, 1));
    }
}
