// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for resolving a configured processor into a runnable instance.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building a processor from configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessorFactoryError {
    /// No built-in processor is registered under this name
    UnknownProcessor { name: String },

    /// A processor option is missing or has the wrong shape
    InvalidOption {
        processor: String,
        option: String,
        reason: String,
    },
}

impl fmt::Display for ProcessorFactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorFactoryError::UnknownProcessor { name } => {
                write!(f, "Unknown local processor implementation: '{}'", name)
            }
            ProcessorFactoryError::InvalidOption {
                processor,
                option,
                reason,
            } => {
                write!(
                    f,
                    "Processor '{}' has an invalid '{}' option: {}",
                    processor, option, reason
                )
            }
        }
    }
}

impl Error for ProcessorFactoryError {}
