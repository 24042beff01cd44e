// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Display;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;

use crate::engine::Task;
use crate::errors::{panic_message, TaskError};

/// The caller-supplied execution function: turns one task into one result.
///
/// Implementations must not rely on side effects shared with other tasks; a
/// processor instance is called concurrently from every worker in parallel mode.
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    type Output: Send + 'static;

    async fn process(&self, task: &Task) -> Result<Self::Output, TaskError>;

    fn name(&self) -> &'static str {
        "anonymous"
    }
}

/// Adapts a plain synchronous closure into a [`TaskProcessor`].
///
/// Inside a tokio runtime each call runs on the blocking pool, so CPU-heavy
/// closures do not stall the workers; without a runtime the closure runs inline.
/// Either way a panic inside the closure becomes [`TaskError::Panicked`]
/// instead of taking the worker down.
///
/// # Example
/// ```
/// use the_workpool::engine::Task;
/// use the_workpool::errors::TaskError;
/// use the_workpool::traits::{FnProcessor, TaskProcessor};
///
/// let processor = FnProcessor::shared(|task: &Task| {
///     task.get("id")
///         .and_then(|id| id.as_i64())
///         .map(|id| id * 2)
///         .ok_or_else(|| TaskError::failed("task has no integer 'id'"))
/// });
/// assert_eq!(processor.name(), "fn");
/// ```
pub struct FnProcessor<F, R, E> {
    f: Arc<F>,
    name: &'static str,
    _marker: PhantomData<fn() -> (R, E)>,
}

impl<F, R, E> FnProcessor<F, R, E>
where
    F: Fn(&Task) -> Result<R, E> + Send + Sync + 'static,
    R: Send + 'static,
    E: Display + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self {
            f: Arc::new(f),
            name: "fn",
            _marker: PhantomData,
        }
    }

    /// Give the processor a name that shows up in logs.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Build the processor already erased behind an `Arc`, ready for a runner.
    pub fn shared(f: F) -> Arc<dyn TaskProcessor<Output = R>> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, R, E> TaskProcessor for FnProcessor<F, R, E>
where
    F: Fn(&Task) -> Result<R, E> + Send + Sync + 'static,
    R: Send + 'static,
    E: Display + Send + 'static,
{
    type Output = R;

    async fn process(&self, task: &Task) -> Result<R, TaskError> {
        let outcome = match Handle::try_current() {
            Ok(runtime) => {
                let f = Arc::clone(&self.f);
                let task = task.clone();
                runtime
                    .spawn_blocking(move || f(&task))
                    .await
                    .map_err(TaskError::from_join_error)?
            }
            Err(_) => panic::catch_unwind(AssertUnwindSafe(|| (self.f)(task)))
                .map_err(|payload| TaskError::Panicked(panic_message(payload.as_ref())))?,
        };
        outcome.map_err(|e| TaskError::Failed(e.to_string()))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
