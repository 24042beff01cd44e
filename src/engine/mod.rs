// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod parallel;
pub mod queue;
pub mod runner;
pub mod sequential;
pub mod task;
pub mod tracker;
pub mod worker;

pub use factory::ExecutorFactory;
pub use parallel::ParallelExecutor;
pub use queue::TaskQueue;
pub use runner::{BatchReport, BatchRunner};
pub use sequential::SequentialExecutor;
pub use task::Task;
pub use tracker::{ExecutionTracker, TrackerSnapshot};
pub use worker::{StopReason, Worker, WorkerReport};
