//! The harness engine.
//!
//! A [`Harness`] borrows a fixed-size result buffer, an ordered list of test functions, and a [`Reporter`]. Each test
//! function records its assertions into the buffer through [`Harness::record`]; after it returns the harness tallies
//! the buffer, reports it, and resets it for the next function.
//!
//! ## Failure kinds
//!
//! None of these ever stop a run:
//!
//! - **Assertion failure**: `record(false)`; tallied and listed by index.
//! - **Overflow**: more records than slots. The excess is dropped and the whole function is judged failed.
//! - **Execution abort**: [`Harness::abort`] backfills the assertions a function declared but never reached as
//!   failures and marks the function `aborted`.
//! - **Reentrancy**: calling [`Harness::run`] from inside a test function returns `false` and touches nothing.
//!
//! ## Allocation
//!
//! The harness owns no heap memory. The buffer, the function list, and the reporter all belong to the caller and
//! may live on the stack or in statics.

use core::fmt;

use crate::errors::{HarnessError, HarnessResult};
use crate::report::{ExpressionReport, FunctionOutcome, Reporter, RunSummary, Verdict};

/// A test function: receives the shared harness and records its assertions into it.
pub type TestFn = fn(&mut Harness<'_>);

/// Result buffer, function list, and per-function failure flags for one run.
pub struct Harness<'a> {
    /// True only while `run` is executing.
    testing: bool,

    /// Assertion outcomes of the current function. Its length is the capacity.
    results: &'a mut [bool],
    /// Next slot to write; always `<= results.len()`.
    cursor: usize,

    /// The current function tried to record more assertions than `results` holds.
    fail_overflow: bool,
    /// The current function called `abort`.
    fail_exec: bool,
    /// Last count passed to `declare_count`; after `abort`, the number of assertions actually recorded.
    expected_count: u16,

    functions: &'a [TestFn],
    function_index: u16,
    function_count: u16,

    reporter: &'a mut dyn Reporter,
}

impl<'a> Harness<'a> {
    /// Bind a harness to a result buffer, using every slot of it.
    ///
    /// ## Errors
    /// - [`HarnessError::CapacityTooLarge`] if the buffer has more than 255 slots.
    /// - [`HarnessError::TooManyFunctions`] if more than `u16::MAX` functions are supplied.
    pub fn new(
        results: &'a mut [bool],
        functions: &'a [TestFn],
        reporter: &'a mut dyn Reporter,
    ) -> HarnessResult<Self> {
        let capacity = u8::try_from(results.len()).map_err(|_| HarnessError::CapacityTooLarge(results.len()))?;
        Self::with_capacity(results, capacity, functions, reporter)
    }

    /// Bind a harness to the first `capacity` slots of a result buffer.
    ///
    /// `capacity` bounds the assertions a single test function may record, not the run as a whole.
    ///
    /// ## Errors
    /// - [`HarnessError::BufferTooSmall`] if the buffer has fewer than `capacity` slots.
    /// - [`HarnessError::TooManyFunctions`] if more than `u16::MAX` functions are supplied.
    pub fn with_capacity(
        results: &'a mut [bool],
        capacity: u8,
        functions: &'a [TestFn],
        reporter: &'a mut dyn Reporter,
    ) -> HarnessResult<Self> {
        let len = results.len();
        let results = results
            .get_mut(..usize::from(capacity))
            .ok_or(HarnessError::BufferTooSmall { capacity, len })?;
        let function_count =
            u16::try_from(functions.len()).map_err(|_| HarnessError::TooManyFunctions(functions.len()))?;

        Ok(Self {
            testing: false,
            results,
            cursor: 0,
            fail_overflow: false,
            fail_exec: false,
            expected_count: 0,
            functions,
            function_index: 0,
            function_count,
            reporter,
        })
    }

    // ========================================================================
    // Operations called by test functions
    // ========================================================================

    /// Record the outcome of one assertion and hand it back unchanged.
    ///
    /// When the buffer is full the outcome is dropped and the current function is flagged as overflowed; the call
    /// site sees no difference, so `if h.record(x == y) { ... }` keeps working past capacity.
    pub fn record(&mut self, expr: bool) -> bool {
        if let Some(slot) = self.results.get_mut(self.cursor) {
            *slot = expr;
            self.cursor += 1;
        } else {
            self.fail_overflow = true;
            tracing::trace!(
                function = self.function_index,
                capacity = self.results.len(),
                "result buffer full, record dropped"
            );
        }

        expr
    }

    /// Declare how many assertions the current function performs in total.
    ///
    /// Only consulted by [`Harness::abort`]. The last declaration wins.
    pub fn declare_count(&mut self, count: u16) {
        self.expected_count = count;
    }

    /// Give up on the current function.
    ///
    /// Every declared assertion that was not recorded yet is recorded as a failure (overflowing like any other
    /// record if it does not fit). The expected count is then clamped to the number recorded before the abort. The
    /// caller is expected to return right after.
    pub fn abort(&mut self) {
        let recorded = self.recorded_u16();

        for _ in recorded..self.expected_count {
            self.record(false);
        }

        tracing::debug!(
            function = self.function_index,
            recorded,
            declared = self.expected_count,
            "test function aborted"
        );

        self.expected_count = recorded;
        self.fail_exec = true;
    }

    // ========================================================================
    // Orchestration
    // ========================================================================

    /// Report the assertions recorded for the current function.
    ///
    /// ## Returns
    /// - (`bool`): true iff every recorded assertion passed. Overflow is not considered here; [`Harness::run`]
    ///   combines the two.
    pub fn report(&mut self) -> bool {
        let aborted_before = self.fail_exec.then_some(self.expected_count);
        let report = ExpressionReport::new(&self.results[..self.cursor], aborted_before);
        self.reporter.on_expressions(&report);
        report.all_passed()
    }

    /// Run every test function in order and report the results.
    ///
    /// ## Returns
    /// - (`bool`): true iff every function passed. Always `false` when called from inside a running test function;
    ///   such a nested call runs nothing and leaves the outer run untouched.
    ///
    /// ## Panics
    /// Panics from a test function are not caught and propagate to the caller. If the caller catches the unwind, the
    /// harness is left mid-run: [`Harness::is_testing`] stays true and every later `run` returns `false`. Bind a
    /// fresh harness after a caught panic.
    pub fn run(&mut self) -> bool {
        // don't run tests in tests
        if self.testing {
            tracing::warn!(function = self.function_index, "nested run ignored");
            return false;
        }
        self.testing = true;

        let capacity = self.capacity();
        tracing::debug!(function_count = self.function_count, capacity, "starting run");
        self.reporter.on_run_start(self.function_count, capacity);

        let mut summary = RunSummary::default();
        let functions = self.functions;

        for (index, &function) in (0..self.function_count).zip(functions.iter()) {
            let _span = tracing::debug_span!("test_function", index).entered();

            self.reset_function_state();
            self.function_index = index;
            function(self);

            // a fail overflow is considered a fail
            let passed = self.report() && !self.fail_overflow;
            let verdict = Verdict::select(self.fail_overflow, self.fail_exec, passed);
            if passed {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }

            tracing::debug!(verdict = verdict.as_str(), "test function finished");
            self.reporter.on_function_complete(&FunctionOutcome { index, passed, verdict });
        }

        self.testing = false;

        tracing::debug!(passed = summary.passed, failed = summary.failed, "run complete");
        self.reporter.on_run_complete(&summary);

        summary.all_passed()
    }

    fn reset_function_state(&mut self) {
        self.cursor = 0;
        self.fail_overflow = false;
        self.fail_exec = false;
        self.expected_count = 0;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of assertion slots available to each test function.
    pub fn capacity(&self) -> u8 {
        // Checked at construction.
        self.results.len() as u8
    }

    /// Number of assertions recorded by the current function so far (overflowed records excluded).
    pub fn recorded(&self) -> u8 {
        self.cursor as u8
    }

    /// The outcomes recorded by the current (or last) function.
    pub fn results(&self) -> &[bool] {
        &self.results[..self.cursor]
    }

    pub fn function_index(&self) -> u16 {
        self.function_index
    }

    pub fn function_count(&self) -> u16 {
        self.function_count
    }

    /// True while [`Harness::run`] is executing.
    pub fn is_testing(&self) -> bool {
        self.testing
    }

    pub fn overflowed(&self) -> bool {
        self.fail_overflow
    }

    pub fn aborted(&self) -> bool {
        self.fail_exec
    }

    pub fn expected_count(&self) -> u16 {
        self.expected_count
    }

    fn recorded_u16(&self) -> u16 {
        u16::from(self.recorded())
    }
}

impl fmt::Debug for Harness<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("testing", &self.testing)
            .field("capacity", &self.results.len())
            .field("recorded", &self.cursor)
            .field("fail_overflow", &self.fail_overflow)
            .field("fail_exec", &self.fail_exec)
            .field("expected_count", &self.expected_count)
            .field("function_index", &self.function_index)
            .field("function_count", &self.function_count)
            .finish_non_exhaustive()
    }
}
