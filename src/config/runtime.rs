// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde_json::Value;

use crate::backends::local::LocalProcessorFactory;
use crate::config::{validate_executor_options, Config};
use crate::engine::BatchRunner;
use crate::errors::ConfigError;
use crate::traits::TaskProcessor;

/// Batch runtime builder - wires the configured processor and runner together.
///
/// # Examples
///
/// ## Building runtime from configuration
/// ```
/// use the_workpool::config::{Config, ExecutorOptions, ProcessorConfig, RuntimeBuilder};
/// use the_workpool::traits::TaskProcessor;
///
/// let config = Config {
///     executor_options: ExecutorOptions::default().with_workers(2),
///     processor: ProcessorConfig::new("echo"),
/// };
///
/// let (runner, processor) = RuntimeBuilder::from_config(&config).unwrap();
///
/// assert_eq!(runner.options().n_workers, Some(2));
/// assert_eq!(processor.name(), "echo");
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a complete batch runtime from configuration.
    ///
    /// Creates and returns:
    /// - `BatchRunner`: Runner carrying the executor options
    /// - `Arc<dyn TaskProcessor>`: The built-in processor named in the config
    ///
    /// Executor options are validated first; every invalid option is reported.
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(BatchRunner, Arc<dyn TaskProcessor<Output = Value>>), ConfigError> {
        validate_executor_options(&cfg.executor_options).map_err(ConfigError::Invalid)?;
        let processor = LocalProcessorFactory::create_processor(&cfg.processor)?;
        let runner = BatchRunner::new(cfg.executor_options.clone());
        Ok((runner, processor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExecutorOptions, ProcessorConfig};
    use crate::errors::ProcessorFactoryError;

    #[test]
    fn invalid_options_are_reported_before_processor_lookup() {
        let config = Config {
            executor_options: ExecutorOptions::default().with_workers(0),
            processor: ProcessorConfig::new("no_such_processor"),
        };

        assert!(matches!(
            RuntimeBuilder::from_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn unknown_processor_is_rejected() {
        let config = Config {
            executor_options: ExecutorOptions::default(),
            processor: ProcessorConfig::new("no_such_processor"),
        };

        match RuntimeBuilder::from_config(&config) {
            Err(ConfigError::Processor(ProcessorFactoryError::UnknownProcessor { name })) => {
                assert_eq!(name, "no_such_processor")
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected an unknown processor error"),
        }
    }
}
