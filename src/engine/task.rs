// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// One unit of work: an opaque mapping of named parameters.
///
/// The engine never looks inside a task; it only guarantees that every task it
/// hands to a processor is a mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(Map<String, Value>);

impl Task {
    pub fn new(params: Map<String, Value>) -> Self {
        Self(params)
    }

    /// Validate a raw batch, converting every element into a [`Task`].
    ///
    /// The whole batch is checked before anything is returned, so a single
    /// non-mapping element rejects the batch without partial execution.
    ///
    /// ```
    /// use serde_json::json;
    /// use the_workpool::engine::Task;
    ///
    /// let tasks = Task::from_values(vec![json!({"id": 1}), json!({"id": 2})]).unwrap();
    /// assert_eq!(tasks.len(), 2);
    ///
    /// let rejected = Task::from_values(vec![json!({"id": 1}), json!([1, 2])]);
    /// assert!(rejected.is_err());
    /// ```
    pub fn from_values<I>(values: I) -> Result<Vec<Task>, ValidationError>
    where
        I: IntoIterator<Item = Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(params) => Ok(Task(params)),
                other => Err(ValidationError::NotAMapping {
                    index,
                    found: json_kind(&other),
                }),
            })
            .collect()
    }

    /// Look up a single parameter
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_params(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Task {
    fn from(params: Map<String, Value>) -> Self {
        Self(params)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
