#![forbid(unsafe_code)]
//! Harness engine for tally.
//!
//! A minimal, embeddable unit-test harness: test functions record boolean assertion outcomes into a caller-owned,
//! fixed-capacity buffer; the harness tallies and reports them after each function and summarizes the run.
//!
//! ## Notes
//!
//! - **No allocation**: the buffer, the function list, and the reporter are all borrowed from the caller.
//! - **Nothing is fatal**: assertion failures, buffer overflow, execution aborts, and nested runs are tallied and
//!   reported; `run` always returns.
//! - **Single-threaded**: test functions run sequentially in list order.
//!
//! ## Examples
//! ```rust
//! use tally_core::{Harness, SilentReporter, TestFn};
//!
//! fn arithmetic(h: &mut Harness<'_>) {
//!     h.record(1 + 1 == 2);
//!     h.record(2 * 2 == 4);
//! }
//!
//! let functions: [TestFn; 1] = [arithmetic];
//! let mut results = [false; 4];
//! let mut reporter = SilentReporter;
//! let mut harness = Harness::new(&mut results, &functions, &mut reporter).unwrap();
//! assert!(harness.run());
//! ```

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod console;
pub mod errors;
pub mod harness;
pub mod report;

pub use config::ConsoleConfig;
pub use console::ConsoleReporter;
pub use errors::{HarnessError, HarnessResult};
pub use harness::{Harness, TestFn};
pub use report::{ExpressionReport, FunctionOutcome, Reporter, RunSummary, SilentReporter, Verdict};
