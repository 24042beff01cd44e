// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::invalid_option;
use crate::engine::Task;
use crate::errors::{ProcessorFactoryError, TaskError};
use crate::traits::TaskProcessor;

const NAME: &str = "change_text_case";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Upper,
    Lower,
    /// First letter of each word capitalized
    Proper,
    /// Like proper, but short articles and prepositions stay lowercase after the first word
    Title,
}

impl TextCase {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "upper" => Some(TextCase::Upper),
            "lower" => Some(TextCase::Lower),
            "proper" => Some(TextCase::Proper),
            "title" => Some(TextCase::Title),
            _ => None,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            TextCase::Upper => input.to_uppercase(),
            TextCase::Lower => input.to_lowercase(),
            TextCase::Proper => input
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            TextCase::Title => input
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let lower_word = word.to_lowercase();
                    if i == 0 || !is_minor_word(&lower_word) {
                        capitalize(word)
                    } else {
                        lower_word
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn is_minor_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an" | "the" | "and" | "or" | "but" | "in" | "on" | "at" | "to" | "for" | "of" | "with" | "by"
    )
}

/// Change Text Case processor - rewrites one string parameter of each task.
///
/// Options: `field` (required) and `case` (`upper`, `lower`, `proper` or
/// `title`; defaults to `upper`). The result is the task's parameters with the
/// field replaced.
pub struct ChangeTextCaseProcessor {
    field: String,
    case: TextCase,
}

impl ChangeTextCaseProcessor {
    pub fn new(field: impl Into<String>, case: TextCase) -> Self {
        Self {
            field: field.into(),
            case,
        }
    }

    pub fn from_options(options: &HashMap<String, Value>) -> Result<Self, ProcessorFactoryError> {
        let field = match options.get("field") {
            Some(Value::String(field)) => field.clone(),
            Some(_) => return Err(invalid_option(NAME, "field", "must be a string")),
            None => return Err(invalid_option(NAME, "field", "is required")),
        };
        let case = match options.get("case") {
            None => TextCase::Upper,
            Some(Value::String(name)) => TextCase::parse(name).ok_or_else(|| {
                invalid_option(
                    NAME,
                    "case",
                    format!("unknown case '{}', expected upper, lower, proper or title", name),
                )
            })?,
            Some(_) => return Err(invalid_option(NAME, "case", "must be a string")),
        };
        Ok(Self::new(field, case))
    }
}

#[async_trait]
impl TaskProcessor for ChangeTextCaseProcessor {
    type Output = Value;

    async fn process(&self, task: &Task) -> Result<Value, TaskError> {
        let text = match task.get(&self.field) {
            Some(Value::String(text)) => text,
            Some(_) => {
                return Err(TaskError::Failed(format!(
                    "field '{}' is not a string",
                    self.field
                )))
            }
            None => return Err(TaskError::Failed(format!("missing field '{}'", self.field))),
        };

        let mut params = task.params().clone();
        params.insert(self.field.clone(), Value::String(self.case.apply(text)));
        Ok(Value::Object(params))
    }

    fn name(&self) -> &'static str {
        NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(value: Value) -> Task {
        Task::from_values(vec![value]).unwrap().remove(0)
    }

    #[test]
    fn case_conversions() {
        assert_eq!(TextCase::Upper.apply("hello world"), "HELLO WORLD");
        assert_eq!(TextCase::Lower.apply("HeLLo"), "hello");
        assert_eq!(TextCase::Proper.apply("the lord OF the rings"), "The Lord Of The Rings");
        assert_eq!(TextCase::Title.apply("the lord OF the rings"), "The Lord of the Rings");
    }

    #[tokio::test]
    async fn rewrites_only_the_configured_field() {
        let processor = ChangeTextCaseProcessor::new("name", TextCase::Upper);
        let output = processor
            .process(&task(json!({"name": "ada", "id": 1})))
            .await
            .unwrap();
        assert_eq!(output, json!({"name": "ADA", "id": 1}));
    }

    #[tokio::test]
    async fn non_string_field_fails_the_task() {
        let processor = ChangeTextCaseProcessor::new("id", TextCase::Lower);
        let err = processor.process(&task(json!({"id": 1}))).await.unwrap_err();
        assert_eq!(err, TaskError::Failed("field 'id' is not a string".into()));
    }

    #[test]
    fn options_require_field_and_known_case() {
        let mut options = HashMap::new();
        assert!(ChangeTextCaseProcessor::from_options(&options).is_err());

        options.insert("field".to_string(), json!("name"));
        options.insert("case".to_string(), json!("shouting"));
        let err = ChangeTextCaseProcessor::from_options(&options).err().unwrap();
        assert!(err.to_string().contains("unknown case 'shouting'"));

        options.insert("case".to_string(), json!("title"));
        let processor = ChangeTextCaseProcessor::from_options(&options).unwrap();
        assert_eq!(processor.case, TextCase::Title);
    }
}
