// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde_json::Value;

use super::processors::*;
use crate::config::ProcessorConfig;
use crate::errors::ProcessorFactoryError;
use crate::traits::TaskProcessor;

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from configuration
    ///
    /// The `processor` field in the config determines which processor to create:
    /// - "field_multiplier" -> FieldMultiplierProcessor (options: field, factor)
    /// - "change_text_case" -> ChangeTextCaseProcessor (options: field, case)
    /// - "echo" -> EchoProcessor
    pub fn create_processor(
        config: &ProcessorConfig,
    ) -> Result<Arc<dyn TaskProcessor<Output = Value>>, ProcessorFactoryError> {
        match config.processor.as_str() {
            "field_multiplier" => Ok(Arc::new(FieldMultiplierProcessor::from_options(
                &config.options,
            )?)),
            "change_text_case" => Ok(Arc::new(ChangeTextCaseProcessor::from_options(
                &config.options,
            )?)),
            "echo" => Ok(Arc::new(EchoProcessor::new())),
            other => Err(ProcessorFactoryError::UnknownProcessor {
                name: other.to_string(),
            }),
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["field_multiplier", "change_text_case", "echo"]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_listed_implementation_can_be_created() {
        for name in LocalProcessorFactory::list_available_implementations() {
            let config = match name {
                "change_text_case" => ProcessorConfig::new(name).with_option("field", json!("name")),
                _ => ProcessorConfig::new(name),
            };
            let processor = LocalProcessorFactory::create_processor(&config).unwrap();
            assert_eq!(processor.name(), name);
        }
    }

    #[test]
    fn unknown_implementation_is_an_error() {
        assert!(!LocalProcessorFactory::is_implementation_available("reverse_text"));
        let err = LocalProcessorFactory::create_processor(&ProcessorConfig::new("reverse_text"))
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Unknown local processor implementation: 'reverse_text'"
        );
    }

    #[test]
    fn bad_options_surface_from_the_processor() {
        let config = ProcessorConfig::new("change_text_case").with_option("field", json!(5));
        assert!(matches!(
            LocalProcessorFactory::create_processor(&config),
            Err(ProcessorFactoryError::InvalidOption { .. })
        ));
    }
}
