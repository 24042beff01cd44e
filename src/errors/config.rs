// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

use super::{ProcessorFactoryError, ValidationError};

/// Errors raised while loading configuration or task files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid task file: {0}")]
    TaskFile(#[from] serde_json::Error),

    #[error("configuration validation failed:\n{}", format_issues(.0))]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Processor(#[from] ProcessorFactoryError),
}

fn format_issues(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}
