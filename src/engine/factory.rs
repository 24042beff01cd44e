// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{ExecutionCapabilities, ExecutorOptions};
use crate::engine::parallel::ParallelExecutor;
use crate::engine::sequential::SequentialExecutor;
use crate::observability::messages::engine::ParallelUnavailable;
use crate::observability::messages::StructuredLog;
use crate::traits::{BatchExecutor, Strategy};

/// Factory for creating batch executors from executor options
pub struct ExecutorFactory;

impl ExecutorFactory {
    /// Parallel when requested and supported, sequential otherwise
    pub fn select_strategy(
        options: &ExecutorOptions,
        capabilities: &dyn ExecutionCapabilities,
    ) -> Strategy {
        if options.multithreaded_if_possible && capabilities.supports_parallel() {
            Strategy::Parallel
        } else {
            Strategy::Sequential
        }
    }

    /// Configured worker count, else the environment's default, never below one
    pub fn worker_count(options: &ExecutorOptions, capabilities: &dyn ExecutionCapabilities) -> usize {
        options
            .n_workers
            .unwrap_or_else(|| capabilities.available_workers())
            .max(1)
    }

    /// Create a batch executor for the given options and environment
    pub fn from_options<R: Send + 'static>(
        options: &ExecutorOptions,
        capabilities: &dyn ExecutionCapabilities,
    ) -> Box<dyn BatchExecutor<R>> {
        match Self::select_strategy(options, capabilities) {
            Strategy::Parallel => Box::new(
                ParallelExecutor::new(Self::worker_count(options, capabilities))
                    .with_poll_interval(options.poll_interval()),
            ),
            Strategy::Sequential => {
                if options.multithreaded_if_possible {
                    ParallelUnavailable {
                        reason: "the execution environment cannot run workers concurrently",
                    }
                    .log();
                }
                Box::new(SequentialExecutor::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixedCapabilities;
    use serde_json::Value;
    use std::time::Duration;

    #[test]
    fn parallel_requires_request_and_support() {
        let parallel_host = FixedCapabilities::new(true, 8);
        let serial_host = FixedCapabilities::sequential_only();
        let requested = ExecutorOptions::default();
        let declined = ExecutorOptions::default().multithreaded(false);

        assert_eq!(ExecutorFactory::select_strategy(&requested, &parallel_host), Strategy::Parallel);
        assert_eq!(ExecutorFactory::select_strategy(&requested, &serial_host), Strategy::Sequential);
        assert_eq!(ExecutorFactory::select_strategy(&declined, &parallel_host), Strategy::Sequential);
    }

    #[test]
    fn worker_count_defaults_to_capabilities() {
        let host = FixedCapabilities::new(true, 6);
        assert_eq!(ExecutorFactory::worker_count(&ExecutorOptions::default(), &host), 6);
        assert_eq!(
            ExecutorFactory::worker_count(&ExecutorOptions::default().with_workers(2), &host),
            2
        );
        assert_eq!(
            ExecutorFactory::worker_count(&ExecutorOptions::default(), &FixedCapabilities::new(true, 0)),
            1
        );
    }

    #[test]
    fn builds_executor_matching_strategy() {
        let options = ExecutorOptions::default().with_workers(3).with_poll_interval_ms(10);

        let parallel = ExecutorFactory::from_options::<Value>(&options, &FixedCapabilities::new(true, 8));
        assert_eq!(parallel.strategy(), Strategy::Parallel);
        assert_eq!(parallel.worker_count(), 3);

        let sequential =
            ExecutorFactory::from_options::<Value>(&options, &FixedCapabilities::sequential_only());
        assert_eq!(sequential.strategy(), Strategy::Sequential);
        assert_eq!(sequential.worker_count(), 1);
    }

    #[test]
    fn poll_interval_flows_into_parallel_executor() {
        let options = ExecutorOptions::default().with_poll_interval_ms(25);
        let executor = ParallelExecutor::new(2).with_poll_interval(options.poll_interval());
        assert_eq!(executor.poll_interval(), Duration::from_millis(25));
    }
}
