// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `engine` - batch lifecycle and strategy selection
//! * `worker` - worker lifecycle and per-task failures
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_workpool::observability::messages::engine::BatchStarted;
//!
//! let msg = BatchStarted {
//!     strategy: "parallel",
//!     task_count: 5,
//!     worker_count: 4,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod engine;
pub mod worker;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level with its fields attached
    fn log(&self);

    /// Open a span carrying the message fields
    fn span(&self, name: &str) -> Span;
}
