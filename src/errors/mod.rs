// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod processor;
mod validation;

pub use config::ConfigError;
pub use execution::{ExecutionError, TaskError};
pub(crate) use execution::panic_message;
pub use processor::ProcessorFactoryError;
pub use validation::ValidationError;
