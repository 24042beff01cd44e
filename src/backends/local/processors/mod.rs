// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod change_text_case;
pub mod echo;
pub mod field_multiplier;

pub use change_text_case::*;
pub use echo::*;
pub use field_multiplier::*;

use crate::errors::ProcessorFactoryError;

fn invalid_option(
    processor: &str,
    option: &str,
    reason: impl Into<String>,
) -> ProcessorFactoryError {
    ProcessorFactoryError::InvalidOption {
        processor: processor.to_string(),
        option: option.to_string(),
        reason: reason.into(),
    }
}
