// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod capabilities;
mod loader;
mod runtime;
mod validation;

pub mod consts;

pub use capabilities::{ExecutionCapabilities, FixedCapabilities, HostCapabilities};
pub use loader::{
    load_and_validate_config, load_config, load_task_file, Config, ExecutorOptions,
    ProcessorConfig,
};
pub use runtime::RuntimeBuilder;
pub use validation::validate_executor_options;
