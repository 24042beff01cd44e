// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors raised while checking a batch or its configuration before any work starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A task in the batch is not a parameter mapping (JSON object)
    NotAMapping {
        /// Position of the offending element in the submitted batch
        index: usize,
        /// JSON kind that was found instead of an object
        found: &'static str,
    },
    /// An executor option holds a value the engine cannot run with
    InvalidOption {
        /// Option name as it appears in the configuration file
        option: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAMapping { index, found } => {
                write!(
                    f,
                    "Task at index {} must be a mapping of named parameters, e.g. {{\"id\": 1, \"path\": \"file1\"}}; found {}",
                    index, found
                )
            }
            ValidationError::InvalidOption { option, reason } => {
                write!(f, "Invalid executor option '{}': {}", option, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_mapping_names_index_and_kind() {
        let err = ValidationError::NotAMapping {
            index: 3,
            found: "number",
        };
        let text = err.to_string();
        assert!(text.contains("index 3"));
        assert!(text.ends_with("found number"));
    }

    #[test]
    fn invalid_option_names_option() {
        let err = ValidationError::InvalidOption {
            option: "n_workers",
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid executor option 'n_workers': must be at least 1"
        );
    }
}
