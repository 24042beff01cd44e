// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use crate::engine::{ExecutionTracker, Task};
use crate::errors::TaskError;
use crate::traits::TaskProcessor;

/// Doubles the integer `id` parameter; fails for the ids it is told to
pub struct DoublingProcessor {
    fail_ids: Vec<i64>,
    calls: AtomicUsize,
}

impl DoublingProcessor {
    pub fn new() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(ids: &[i64]) -> Self {
        Self {
            fail_ids: ids.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TaskProcessor for DoublingProcessor {
    type Output = Value;

    async fn process(&self, task: &Task) -> Result<Value, TaskError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = task
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| TaskError::failed("task has no integer 'id'"))?;

        if self.fail_ids.contains(&id) {
            return Err(TaskError::failed(format!("refusing id {}", id)));
        }
        Ok(json!(id * 2))
    }

    fn name(&self) -> &'static str {
        "doubling"
    }
}

/// A processor whose future panics, taking its worker down
pub struct PanickingProcessor;

#[async_trait::async_trait]
impl TaskProcessor for PanickingProcessor {
    type Output = Value;

    async fn process(&self, _task: &Task) -> Result<Value, TaskError> {
        panic!("processor exploded");
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

/// Signals termination on the tracker it holds, then succeeds
pub struct TerminatingProcessor {
    tracker: Arc<ExecutionTracker>,
}

impl TerminatingProcessor {
    pub fn new(tracker: Arc<ExecutionTracker>) -> Self {
        Self { tracker }
    }
}

#[async_trait::async_trait]
impl TaskProcessor for TerminatingProcessor {
    type Output = Value;

    async fn process(&self, task: &Task) -> Result<Value, TaskError> {
        self.tracker.signal_terminate();
        Ok(Value::Object(task.params().clone()))
    }

    fn name(&self) -> &'static str {
        "terminating"
    }
}

/// Sleeps per task and records how many tasks were in flight at once
pub struct SlowProcessor {
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl SlowProcessor {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TaskProcessor for SlowProcessor {
    type Output = Value;

    async fn process(&self, task: &Task) -> Result<Value, TaskError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(Value::Object(task.params().clone()))
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}
