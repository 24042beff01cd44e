// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Interactive progress line for terminal use.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::config::consts::{DEFAULT_PROGRESS_INTERVAL_MS, PROGRESS_LINE_WIDTH};
use crate::traits::{Progress, ProgressReporter};

/// Rewrites a single console line with the current batch progress.
///
/// The line has the form `"\r42.0% | 40 completed | 2 errors"` padded to a fixed
/// width so a shorter update fully overwrites a longer one. Reports whose counts
/// match the previous report are ignored.
///
/// [`start`](Self::start) launches a background ticker that re-prints the last
/// line at a fixed interval so the terminal stays current even when the caller
/// reports rarely. [`stop`](Self::stop) ends the ticker and terminates the line.
///
/// # Example
/// ```
/// use the_workpool::observability::ConsoleProgressReporter;
/// use the_workpool::traits::{Progress, ProgressReporter};
///
/// let reporter = ConsoleProgressReporter::with_writer(std::io::sink());
/// reporter.report(Progress::new(1, 0, 2));
/// reporter.stop();
/// ```
pub struct ConsoleProgressReporter {
    line: Arc<Mutex<ProgressLine>>,
    tick_interval: Duration,
    ticker: Mutex<Option<CancellationToken>>,
}

struct ProgressLine {
    writer: Box<dyn Write + Send>,
    last_counts: Option<(usize, usize)>,
    rendered: String,
}

impl ProgressLine {
    fn update(&mut self, progress: &Progress) {
        let counts = (progress.success_count, progress.error_count);
        if self.last_counts == Some(counts) {
            return;
        }
        self.last_counts = Some(counts);
        self.rendered = render(progress);
        self.redraw();
    }

    fn redraw(&mut self) {
        if self.last_counts.is_none() {
            return;
        }
        let written = self
            .writer
            .write_all(self.rendered.as_bytes())
            .and_then(|_| self.writer.flush());
        if let Err(e) = written {
            tracing::debug!(error = %e, "Failed to write progress line");
        }
    }

    fn finish(&mut self) {
        if self.last_counts.is_none() {
            return;
        }
        if let Err(e) = self.writer.write_all(b"\n").and_then(|_| self.writer.flush()) {
            tracing::debug!(error = %e, "Failed to terminate progress line");
        }
        self.last_counts = None;
    }
}

fn render(progress: &Progress) -> String {
    let text = format!(
        "\r{:.1}% | {} completed | {} errors",
        progress.percent, progress.success_count, progress.error_count
    );
    format!("{:<width$}", text, width = PROGRESS_LINE_WIDTH)
}

impl ConsoleProgressReporter {
    /// Printer writing to standard output
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    /// Printer writing to an arbitrary sink
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            line: Arc::new(Mutex::new(ProgressLine {
                writer: Box::new(writer),
                last_counts: None,
                rendered: String::new(),
            })),
            tick_interval: Duration::from_millis(DEFAULT_PROGRESS_INTERVAL_MS),
            ticker: Mutex::new(None),
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Start the periodic redraw.
    ///
    /// Does nothing when called outside a tokio runtime or when the ticker is
    /// already running.
    pub fn start(&self) {
        let mut ticker = self.ticker.lock();
        if ticker.is_some() {
            return;
        }
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!("No tokio runtime available, progress ticker not started");
                return;
            }
        };

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let line = Arc::clone(&self.line);
        let period = self.tick_interval;

        handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => line.lock().redraw(),
                }
            }
        });
        *ticker = Some(token);
    }

    /// Stop the ticker and move the cursor past the progress line.
    pub fn stop(&self) {
        if let Some(token) = self.ticker.lock().take() {
            token.cancel();
        }
        self.line.lock().finish();
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, progress: Progress) {
        self.line.lock().update(&progress);
    }
}

impl Drop for ConsoleProgressReporter {
    fn drop(&mut self) {
        if let Some(token) = self.ticker.get_mut().take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn renders_padded_line() {
        let line = render(&Progress::new(1, 1, 4));
        assert!(line.starts_with("\r50.0% | 1 completed | 1 errors"));
        assert_eq!(line.len(), PROGRESS_LINE_WIDTH);
    }

    #[test]
    fn identical_counts_are_written_once() {
        let buffer = SharedBuffer::default();
        let reporter = ConsoleProgressReporter::with_writer(buffer.clone());

        reporter.report(Progress::new(1, 0, 3));
        reporter.report(Progress::new(1, 0, 3));
        reporter.report(Progress::new(2, 0, 3));

        let output = buffer.contents();
        assert_eq!(output.matches('\r').count(), 2);
        assert!(output.contains("66.7% | 2 completed | 0 errors"));
    }

    #[test]
    fn stop_terminates_line_only_after_output() {
        let silent = SharedBuffer::default();
        ConsoleProgressReporter::with_writer(silent.clone()).stop();
        assert!(silent.contents().is_empty());

        let buffer = SharedBuffer::default();
        let reporter = ConsoleProgressReporter::with_writer(buffer.clone());
        reporter.report(Progress::new(0, 1, 1));
        reporter.stop();
        assert!(buffer.contents().ends_with('\n'));
    }

    #[test]
    fn start_without_runtime_is_a_no_op() {
        let reporter = ConsoleProgressReporter::with_writer(std::io::sink());
        reporter.start();
        assert!(reporter.ticker.lock().is_none());
    }

    #[tokio::test]
    async fn ticker_redraws_last_line() {
        let buffer = SharedBuffer::default();
        let reporter = ConsoleProgressReporter::with_writer(buffer.clone())
            .with_tick_interval(Duration::from_millis(5));

        reporter.report(Progress::new(1, 0, 2));
        reporter.start();
        tokio::time::sleep(Duration::from_millis(40)).await;
        reporter.stop();

        let redraws = buffer.contents().matches("50.0% | 1 completed").count();
        assert!(redraws > 1, "expected ticker redraws, got {}", redraws);
    }
}
