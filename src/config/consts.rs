// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default number of error messages retained by an execution tracker
pub const DEFAULT_ERROR_LOG_CAPACITY: usize = 1024;
/// Default delay between progress polls while parallel workers run (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
/// Worker count used when the hardware concurrency cannot be determined
pub const FALLBACK_CONCURRENCY: usize = 4;
/// Default redraw period of the console progress line (milliseconds)
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 1000;
/// Column width the console progress line is padded to
pub const PROGRESS_LINE_WIDTH: usize = 100;
