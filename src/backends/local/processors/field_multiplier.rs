// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Number, Value};

use super::invalid_option;
use crate::engine::Task;
use crate::errors::{ProcessorFactoryError, TaskError};
use crate::traits::TaskProcessor;

const NAME: &str = "field_multiplier";

/// Multiplies one numeric parameter of each task by a constant factor.
///
/// Options: `field` (defaults to `id`) and `factor` (defaults to `2`). An
/// integer field times an integer factor stays an integer; anything else is
/// computed as a float.
///
/// # Example
/// ```
/// use serde_json::json;
/// use the_workpool::backends::local::FieldMultiplierProcessor;
/// use the_workpool::engine::Task;
/// use the_workpool::traits::TaskProcessor;
///
/// # #[tokio::main]
/// # async fn main() {
/// let processor = FieldMultiplierProcessor::new("id", serde_json::Number::from(2));
/// let task = Task::from_values(vec![json!({"id": 21})]).unwrap().remove(0);
///
/// assert_eq!(processor.process(&task).await.unwrap(), json!(42));
/// # }
/// ```
pub struct FieldMultiplierProcessor {
    field: String,
    factor: Number,
}

impl FieldMultiplierProcessor {
    pub fn new(field: impl Into<String>, factor: Number) -> Self {
        Self {
            field: field.into(),
            factor,
        }
    }

    pub fn from_options(options: &HashMap<String, Value>) -> Result<Self, ProcessorFactoryError> {
        let field = match options.get("field") {
            None => "id".to_string(),
            Some(Value::String(field)) => field.clone(),
            Some(_) => return Err(invalid_option(NAME, "field", "must be a string")),
        };
        let factor = match options.get("factor") {
            None => Number::from(2),
            Some(Value::Number(factor)) => factor.clone(),
            Some(_) => return Err(invalid_option(NAME, "factor", "must be a number")),
        };
        Ok(Self::new(field, factor))
    }

    fn multiply(&self, value: &Number) -> Result<Value, TaskError> {
        if let (Some(lhs), Some(rhs)) = (value.as_i64(), self.factor.as_i64()) {
            return lhs
                .checked_mul(rhs)
                .map(Value::from)
                .ok_or_else(|| TaskError::Failed(format!("{} * {} overflows", lhs, rhs)));
        }

        let lhs = value.as_f64().unwrap_or_default();
        let rhs = self.factor.as_f64().unwrap_or_default();
        Number::from_f64(lhs * rhs)
            .map(Value::Number)
            .ok_or_else(|| TaskError::Failed(format!("{} * {} is not a finite number", lhs, rhs)))
    }
}

#[async_trait]
impl TaskProcessor for FieldMultiplierProcessor {
    type Output = Value;

    async fn process(&self, task: &Task) -> Result<Value, TaskError> {
        match task.get(&self.field) {
            Some(Value::Number(value)) => self.multiply(value),
            Some(_) => Err(TaskError::Failed(format!(
                "field '{}' is not a number",
                self.field
            ))),
            None => Err(TaskError::Failed(format!("missing field '{}'", self.field))),
        }
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
