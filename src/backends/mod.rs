// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor backend implementations.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process Rust processors selected by name from configuration:
//! - **field_multiplier**: Multiplies a numeric task parameter
//! - **change_text_case**: Rewrites a string parameter (upper, lower, proper, title)
//! - **echo**: Returns the task parameters unchanged
//!
//! ## Stub Backend (Test-Only)
//! Processors for exercising the engine (only available in test builds):
//! - **DoublingProcessor**: Doubles `id`, fails on chosen ids
//! - **PanickingProcessor**: Crashes its worker
//! - **TerminatingProcessor**: Requests cooperative termination
//! - **SlowProcessor**: Measures how many tasks overlap
//!
//! # Architecture
//!
//! ```text
//! Configuration → LocalProcessorFactory → Arc<dyn TaskProcessor> → BatchRunner
//! ```
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use the_workpool::backends::local::LocalProcessorFactory;
//! use the_workpool::config::ProcessorConfig;
//! use the_workpool::traits::TaskProcessor;
//!
//! let config = ProcessorConfig::new("change_text_case")
//!     .with_option("field", json!("name"))
//!     .with_option("case", json!("upper"));
//!
//! let processor = LocalProcessorFactory::create_processor(&config)?;
//! assert_eq!(processor.name(), "change_text_case");
//! # Ok::<(), the_workpool::errors::ProcessorFactoryError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
