// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Batch task execution over a bounded pool of workers.
//!
//! A batch is a list of independent tasks (JSON objects of named parameters)
//! and one [`TaskProcessor`](traits::TaskProcessor) applied to each. The
//! [`BatchRunner`](engine::BatchRunner) validates the batch, chooses between the
//! parallel and sequential strategies, drives the workers while reporting
//! progress, and returns the results with success and error tallies.
//!
//! ```rust
//! use serde_json::json;
//! use the_workpool::config::ExecutorOptions;
//! use the_workpool::engine::{BatchRunner, Task};
//! use the_workpool::traits::FnProcessor;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), the_workpool::errors::ExecutionError> {
//! let runner = BatchRunner::new(ExecutorOptions::default().with_workers(4));
//! let double = FnProcessor::shared(|task: &Task| {
//!     task.get("id").and_then(|id| id.as_i64()).map(|id| id * 2).ok_or("missing id")
//! });
//!
//! let tasks = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];
//! let mut report = runner.run(tasks, double, None).await?;
//! report.results.sort();
//!
//! assert_eq!(report.results, vec![2, 4, 6]);
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

pub mod backends;      // built-in processors
pub mod config;        // options, loading, capabilities
pub mod engine;        // queue, tracker, workers, executors
pub mod errors;        // error handling
pub mod observability; // log messages and progress printer
pub mod traits;        // processor / executor / progress seams
