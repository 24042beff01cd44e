// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use crate::engine::Task;
use crate::errors::TaskError;
use crate::traits::TaskProcessor;

/// Echo processor - returns each task's parameters unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoProcessor;

impl EchoProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TaskProcessor for EchoProcessor {
    type Output = Value;

    async fn process(&self, task: &Task) -> Result<Value, TaskError> {
        Ok(Value::Object(task.params().clone()))
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}
