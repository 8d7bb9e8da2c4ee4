#![forbid(unsafe_code)]
//! tally: a minimal, embeddable unit-test harness.
//!
//! The harness engine lives in `tally_core` and is re-exported here. This crate adds the built-in demo suites and
//! the `tally` command-line front end that runs them.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Test functions**: nothing a test function does through the harness can panic; failures are recorded.

pub mod cli;
pub mod suites;
pub mod version;

pub use tally_core::{
    ConsoleConfig, ConsoleReporter, ExpressionReport, FunctionOutcome, Harness, HarnessError, HarnessResult,
    Reporter, RunSummary, SilentReporter, TestFn, Verdict,
};
