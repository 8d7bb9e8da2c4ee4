//! Plain-text console reporter.
//!
//! Output format (one block per test function):
//!
//! ```text
//! running <F> tests with <C> expr slots
//!
//! [failed expression ids: <i0> <i1> ...]
//! [aborted before expression: <N>]
//! expressions: <P> passed, <F> failed
//! test #<i> passed|failed|aborted|encountered a fail overflow
//!
//! tests: <P> passed, <F> failed
//! ```

use std::fmt;
use std::io::{self, Stderr, Write};

use crate::config::ConsoleConfig;
use crate::report::{ExpressionReport, FunctionOutcome, Reporter, RunSummary, Verdict};

/// Reporter that writes the human-readable transcript to a writer (stderr by default).
///
/// Writes are streamed as the run progresses; nothing is buffered by the reporter itself. A write error never
/// interrupts the run: the first one is kept (see [`ConsoleReporter::take_error`]) and further output is skipped.
#[derive(Debug)]
pub struct ConsoleReporter<W = Stderr> {
    writer: W,
    config: ConsoleConfig,
    error: Option<io::Error>,
}

impl ConsoleReporter<Stderr> {
    /// Report to the process's standard error stream.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, ConsoleConfig::default())
    }

    pub fn with_config(writer: W, config: ConsoleConfig) -> Self {
        Self {
            writer,
            config,
            error: None,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Take the first write error encountered, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_fmt(args) {
            self.keep_error(err);
        }
    }

    fn flush(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.flush() {
            self.keep_error(err);
        }
    }

    fn keep_error(&mut self, err: io::Error) {
        tracing::debug!(error = %err, "console report write failed");
        self.error = Some(err);
    }

    fn verdict_colors(&self, verdict: Verdict) -> (&'static str, &'static str) {
        if !self.config.color {
            return ("", "");
        }
        let color = match verdict {
            Verdict::Passed => "\x1b[32m",
            Verdict::Failed | Verdict::Overflow => "\x1b[31m",
            Verdict::Aborted => "\x1b[33m",
        };
        (color, "\x1b[0m")
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_run_start(&mut self, function_count: u16, capacity: u8) {
        self.emit(format_args!(
            "running {function_count} tests with {capacity} expr slots\n\n"
        ));
    }

    fn on_expressions(&mut self, report: &ExpressionReport<'_>) {
        let mut failed_ids = report.failed_ids().peekable();
        if failed_ids.peek().is_some() {
            self.emit(format_args!("failed expression ids:"));
            for id in failed_ids {
                self.emit(format_args!(" {id}"));
            }
            self.emit(format_args!("\n"));
        }

        if let Some(expected) = report.aborted_before() {
            self.emit(format_args!("aborted before expression: {expected}\n"));
        }

        self.emit(format_args!(
            "expressions: {} passed, {} failed\n",
            report.passed(),
            report.failed()
        ));
    }

    fn on_function_complete(&mut self, outcome: &FunctionOutcome) {
        let (color, reset) = self.verdict_colors(outcome.verdict);
        self.emit(format_args!(
            "test #{} {color}{}{reset}\n\n",
            outcome.index, outcome.verdict
        ));
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.emit(format_args!(
            "tests: {} passed, {} failed\n",
            summary.passed, summary.failed
        ));

        self.flush();
    }
}
