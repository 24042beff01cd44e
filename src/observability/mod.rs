// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module: structured log messages and the console progress printer.
//!
//! Log output goes through `tracing` using the message types in [`messages`].
//! Each message is a small struct with a `Display` implementation, so the
//! wording of an event lives in exactly one place, plus a [`messages::StructuredLog`]
//! implementation that emits the same event with its fields attached.
//!
//! # Usage
//!
//! ```rust
//! use the_workpool::observability::messages::StructuredLog;
//! use the_workpool::observability::messages::worker::WorkerStarted;
//!
//! WorkerStarted { worker_id: 3 }.log();
//! ```
//!
//! [`ConsoleProgressReporter`] is the interactive progress line used by
//! [`BatchRunner::run_with_progress`](crate::engine::BatchRunner::run_with_progress).

pub mod console;
pub mod messages;

pub use console::ConsoleProgressReporter;
