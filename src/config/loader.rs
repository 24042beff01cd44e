// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_ERROR_LOG_CAPACITY, DEFAULT_POLL_INTERVAL_MS};
use crate::errors::ConfigError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for a batch run.
///
/// # Fields
/// * `executor_options` - How the batch is spread over workers (optional)
/// * `processor` - Which built-in processor handles every task
///
/// # Example
/// ```yaml
/// executor_options:
///   multithreaded_if_possible: true
///   n_workers: 4
///   poll_interval_ms: 100
/// processor:
///   processor: field_multiplier
///   options:
///     field: id
///     factor: 2
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub executor_options: ExecutorOptions,
    pub processor: ProcessorConfig,
}

/// Executor configuration options.
///
/// # Fields
/// * `multithreaded_if_possible` - Use the parallel strategy when the environment supports it (defaults to true)
/// * `n_workers` - Number of concurrent workers (defaults to hardware concurrency)
/// * `poll_interval_ms` - Delay between progress polls in parallel mode (defaults to 100)
/// * `error_log_capacity` - Error messages retained per batch (defaults to 1024)
///
/// # Example
/// ```
/// use the_workpool::config::ExecutorOptions;
///
/// let options = ExecutorOptions::default().with_workers(8).multithreaded(false);
/// assert_eq!(options.n_workers, Some(8));
/// assert!(!options.multithreaded_if_possible);
/// assert_eq!(options.poll_interval().as_millis(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExecutorOptions {
    #[serde(default = "default_multithreaded")]
    pub multithreaded_if_possible: bool,
    pub n_workers: Option<usize>,
    pub poll_interval_ms: Option<u64>,
    pub error_log_capacity: Option<usize>,
}

fn default_multithreaded() -> bool {
    true
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            multithreaded_if_possible: true,
            n_workers: None,
            poll_interval_ms: None,
            error_log_capacity: None,
        }
    }
}

impl ExecutorOptions {
    pub fn with_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = Some(n_workers);
        self
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = Some(poll_interval_ms);
        self
    }

    pub fn with_error_log_capacity(mut self, capacity: usize) -> Self {
        self.error_log_capacity = Some(capacity);
        self
    }

    pub fn multithreaded(mut self, enabled: bool) -> Self {
        self.multithreaded_if_possible = enabled;
        self
    }

    /// Poll interval, using the built-in default if not configured.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }

    /// Error log capacity, using the built-in default if not configured.
    pub fn error_log_capacity(&self) -> usize {
        self.error_log_capacity.unwrap_or(DEFAULT_ERROR_LOG_CAPACITY)
    }
}

/// Configuration for the processor applied to each task.
///
/// # Fields
/// * `processor` - Built-in processor name (e.g. `field_multiplier`)
/// * `options` - Processor-specific options
///
/// # Example
/// ```yaml
/// processor: change_text_case
/// options:
///   field: name
///   case: upper
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessorConfig {
    pub processor: String,
    #[serde(default)]
    pub options: HashMap<String, Value>,
}

impl ProcessorConfig {
    pub fn new(processor: impl Into<String>) -> Self {
        Self {
            processor: processor.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// Load a config from a YAML file, or TOML when the extension is `.toml`
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = read(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let cfg: Config = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(cfg)
}

/// Load and validate a config file
///
/// Every invalid executor option is reported at once.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_executor_options(&cfg.executor_options).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

/// Load a batch of tasks from a JSON array file.
///
/// Elements are returned untouched; checking that each one is a mapping is left
/// to the runner so that validation happens in one place.
pub fn load_task_file<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, ConfigError> {
    let content = read(path.as_ref())?;
    let tasks: Vec<Value> = serde_json::from_str(&content)?;
    Ok(tasks)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_yaml_config() {
        let yaml = r#"
executor_options:
  n_workers: 3
processor:
  processor: field_multiplier
  options:
    field: id
    factor: 3
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.executor_options.multithreaded_if_possible);
        assert_eq!(cfg.executor_options.n_workers, Some(3));
        assert_eq!(cfg.processor.processor, "field_multiplier");
        assert_eq!(cfg.processor.options.get("factor"), Some(&json!(3)));
    }

    #[test]
    fn executor_options_are_optional() {
        let cfg: Config = serde_yaml::from_str("processor:\n  processor: echo\n").unwrap();
        assert_eq!(cfg.executor_options, ExecutorOptions::default());
        assert!(cfg.processor.options.is_empty());
        assert_eq!(cfg.executor_options.error_log_capacity(), DEFAULT_ERROR_LOG_CAPACITY);
    }

    #[test]
    fn load_toml_by_extension() {
        let file = write_temp(
            ".toml",
            r#"
[executor_options]
multithreaded_if_possible = false
poll_interval_ms = 20

[processor]
processor = "change_text_case"
options = { field = "name", case = "upper" }
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert!(!cfg.executor_options.multithreaded_if_possible);
        assert_eq!(cfg.executor_options.poll_interval(), Duration::from_millis(20));
        assert_eq!(cfg.processor.options.get("case"), Some(&json!("upper")));
    }

    #[test]
    fn load_and_validate_rejects_zero_workers() {
        let file = write_temp(
            ".yaml",
            "executor_options:\n  n_workers: 0\n  poll_interval_ms: 0\nprocessor:\n  processor: echo\n",
        );

        match load_and_validate_config(file.path()) {
            Err(ConfigError::Invalid(issues)) => assert_eq!(issues.len(), 2),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("not/here.yaml"));
    }

    #[test]
    fn load_task_file_keeps_elements_untouched() {
        let file = write_temp(".json", r#"[{"id": 1}, {"id": 2}, "stray"]"#);

        let tasks = load_task_file(file.path()).unwrap();
        assert_eq!(tasks, vec![json!({"id": 1}), json!({"id": 2}), json!("stray")]);
    }

    #[test]
    fn task_file_must_be_an_array() {
        let file = write_temp(".json", r#"{"id": 1}"#);
        assert!(matches!(
            load_task_file(file.path()),
            Err(ConfigError::TaskFile(_))
        ));
    }
}
