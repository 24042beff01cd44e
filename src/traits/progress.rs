// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A point-in-time view of batch progress handed to a [`ProgressReporter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Share of tasks that finished (successfully or not), 0.0 to 100.0
    pub percent: f64,
    pub success_count: usize,
    pub error_count: usize,
    pub total: usize,
}

impl Progress {
    /// Build a progress value; an empty batch reports 0% rather than dividing by zero.
    pub fn new(success_count: usize, error_count: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            100.0 * (success_count + error_count) as f64 / total as f64
        };
        Self {
            percent,
            success_count,
            error_count,
            total,
        }
    }

    pub fn completed(&self) -> usize {
        self.success_count + self.error_count
    }

    pub fn is_complete(&self) -> bool {
        self.completed() == self.total
    }
}

/// Receives progress updates from the orchestrator's polling loop.
///
/// Called from the engine's wait loop, so implementations must return quickly and
/// must tolerate being handed the same values several times in a row.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, progress: Progress);
}

impl<F> ProgressReporter for F
where
    F: Fn(Progress) + Send + Sync,
{
    fn report(&self, progress: Progress) {
        self(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn empty_batch_reports_zero_percent() {
        let progress = Progress::new(0, 0, 0);
        assert_eq!(progress.percent, 0.0);
        assert!(progress.is_complete());
    }

    #[test]
    fn percent_counts_errors_as_finished() {
        let progress = Progress::new(1, 1, 4);
        assert_eq!(progress.percent, 50.0);
        assert_eq!(progress.completed(), 2);
        assert!(!progress.is_complete());
    }

    #[test]
    fn closures_are_reporters() {
        let seen = Mutex::new(Vec::new());
        let reporter = |progress: Progress| seen.lock().push(progress.percent);

        reporter.report(Progress::new(1, 0, 2));
        reporter.report(Progress::new(2, 0, 2));

        assert_eq!(*seen.lock(), vec![50.0, 100.0]);
    }
}
