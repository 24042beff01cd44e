// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod executor;
pub mod processor;
pub mod progress;

pub use executor::{BatchExecutor, Strategy};
pub use processor::{FnProcessor, TaskProcessor};
pub use progress::{Progress, ProgressReporter};
