// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Executor option validation.
//!
//! Checks run before a batch starts and collect every problem instead of
//! stopping at the first one, so a config file can be fixed in one pass.
//!
//! # Example
//! ```rust
//! use the_workpool::config::{validate_executor_options, ExecutorOptions};
//!
//! let options = ExecutorOptions::default().with_workers(0);
//! let errors = validate_executor_options(&options).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! ```

use crate::config::ExecutorOptions;
use crate::errors::ValidationError;

/// Validate executor options, returning every issue found
pub fn validate_executor_options(options: &ExecutorOptions) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if options.n_workers == Some(0) {
        errors.push(ValidationError::InvalidOption {
            option: "n_workers",
            reason: "must be at least 1".to_string(),
        });
    }

    if options.poll_interval_ms == Some(0) {
        errors.push(ValidationError::InvalidOption {
            option: "poll_interval_ms",
            reason: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_executor_options(&ExecutorOptions::default()).is_ok());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let options = ExecutorOptions::default().with_poll_interval_ms(0);
        let errors = validate_executor_options(&options).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidOption {
                option: "poll_interval_ms",
                reason: "must be greater than zero".to_string(),
            }]
        );
    }

    #[test]
    fn error_log_capacity_zero_is_allowed() {
        let options = ExecutorOptions::default().with_error_log_capacity(0);
        assert!(validate_executor_options(&options).is_ok());
    }
}
