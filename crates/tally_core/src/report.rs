//! Reporting types and the `Reporter` seam.
//!
//! The harness never formats output itself. It hands borrowed, allocation-free views of its state to a [`Reporter`]
//! at four points of a run, so embedders can choose between the console transcript ([`ConsoleReporter`]), silence
//! ([`SilentReporter`]), or their own sink.
//!
//! [`ConsoleReporter`]: crate::ConsoleReporter

// ============================================================================
// Reporter Trait
// ============================================================================

/// Receives the results of a harness run.
///
/// Hooks are called in this order: `on_run_start` once, then for each test function `on_expressions` followed by
/// `on_function_complete`, then `on_run_complete` once. `on_expressions` also fires when [`Harness::report`] is
/// called directly.
///
/// [`Harness::report`]: crate::Harness::report
pub trait Reporter {
    /// Called before the first test function runs.
    fn on_run_start(&mut self, function_count: u16, capacity: u8);

    /// Called with the assertion tally of the function that just returned.
    fn on_expressions(&mut self, report: &ExpressionReport<'_>);

    /// Called with the verdict of the function that just returned.
    fn on_function_complete(&mut self, outcome: &FunctionOutcome);

    /// Called after the last test function.
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn on_run_start(&mut self, _function_count: u16, _capacity: u8) {}

    fn on_expressions(&mut self, _report: &ExpressionReport<'_>) {}

    fn on_function_complete(&mut self, _outcome: &FunctionOutcome) {}

    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

// ============================================================================
// Report values
// ============================================================================

/// Assertion tally for one test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionReport<'a> {
    results: &'a [bool],
    aborted_before: Option<u16>,
}

impl<'a> ExpressionReport<'a> {
    /// Build a report over the recorded slots.
    ///
    /// `aborted_before` is the clamped expected count left behind by [`Harness::abort`], or `None` when the function
    /// ran to completion.
    ///
    /// [`Harness::abort`]: crate::Harness::abort
    pub fn new(results: &'a [bool], aborted_before: Option<u16>) -> Self {
        Self {
            results,
            aborted_before,
        }
    }

    /// The recorded outcomes, in recording order.
    pub fn results(&self) -> &'a [bool] {
        self.results
    }

    /// Number of assertions recorded (overflowed ones excluded).
    pub fn recorded(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|&&passed| passed).count()
    }

    pub fn failed(&self) -> usize {
        self.recorded() - self.passed()
    }

    /// 0-based indices of the failed assertions, ascending.
    pub fn failed_ids(self) -> impl Iterator<Item = usize> + 'a {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, passed)| !**passed)
            .map(|(id, _)| id)
    }

    pub fn aborted_before(&self) -> Option<u16> {
        self.aborted_before
    }

    /// True iff every recorded assertion passed (vacuously true when none were recorded).
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|&passed| passed)
    }
}

/// One-line verdict printed for a test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    /// The function called [`Harness::abort`](crate::Harness::abort).
    Aborted,
    /// The function recorded more assertions than the buffer holds.
    Overflow,
}

impl Verdict {
    /// Pick the verdict for a finished function. Overflow wins over abort, abort wins over the tally.
    pub fn select(overflowed: bool, aborted: bool, passed: bool) -> Self {
        if overflowed {
            Verdict::Overflow
        } else if aborted {
            Verdict::Aborted
        } else if passed {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Failed => "failed",
            Verdict::Aborted => "aborted",
            Verdict::Overflow => "encountered a fail overflow",
        }
    }
}

impl core::fmt::Display for Verdict {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running a single test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionOutcome {
    /// Position of the function in the run's function list.
    pub index: u16,
    /// Whether the function counts towards the pass total.
    ///
    /// This is `report() && !overflowed` and does not look at the abort flag, so an aborted function whose recorded
    /// slots all passed still counts as passed even though its verdict reads `aborted`.
    pub passed: bool,
    pub verdict: Verdict,
}

/// Summary of a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub passed: u16,
    pub failed: u16,
}

impl RunSummary {
    pub fn total(&self) -> u16 {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
