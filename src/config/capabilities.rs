// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! What the surrounding environment can offer the engine.
//!
//! Strategy selection asks an [`ExecutionCapabilities`] value instead of
//! inspecting the platform itself, so embedders and tests can pin the answer.

use tokio::runtime::{Handle, RuntimeFlavor};

use crate::config::consts::FALLBACK_CONCURRENCY;

pub trait ExecutionCapabilities: Send + Sync {
    /// Whether workers can run concurrently in this environment
    fn supports_parallel(&self) -> bool;

    /// Default worker count when the configuration does not name one
    fn available_workers(&self) -> usize;
}

/// Capabilities of the running process, derived from the ambient tokio runtime.
///
/// Parallel execution needs a multi-threaded runtime; on a current-thread
/// runtime (or with no runtime at all) workers could never overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCapabilities;

impl ExecutionCapabilities for HostCapabilities {
    fn supports_parallel(&self) -> bool {
        Handle::try_current()
            .map(|handle| handle.runtime_flavor() == RuntimeFlavor::MultiThread)
            .unwrap_or(false)
    }

    fn available_workers(&self) -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(FALLBACK_CONCURRENCY)
    }
}

/// Capabilities fixed up front.
///
/// # Example
/// ```
/// use the_workpool::config::{ExecutionCapabilities, FixedCapabilities};
///
/// let caps = FixedCapabilities::sequential_only();
/// assert!(!caps.supports_parallel());
/// assert_eq!(caps.available_workers(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCapabilities {
    pub parallel: bool,
    pub workers: usize,
}

impl FixedCapabilities {
    pub fn new(parallel: bool, workers: usize) -> Self {
        Self { parallel, workers }
    }

    pub fn sequential_only() -> Self {
        Self::new(false, 1)
    }
}

impl ExecutionCapabilities for FixedCapabilities {
    fn supports_parallel(&self) -> bool {
        self.parallel
    }

    fn available_workers(&self) -> usize {
        self.workers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_runtime_means_no_parallelism() {
        assert!(!HostCapabilities.supports_parallel());
        assert!(HostCapabilities.available_workers() >= 1);
    }

    #[tokio::test]
    async fn current_thread_runtime_is_not_parallel() {
        assert!(!HostCapabilities.supports_parallel());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn multi_thread_runtime_is_parallel() {
        assert!(HostCapabilities.supports_parallel());
    }
}
