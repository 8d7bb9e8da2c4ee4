//! Built-in demo suites.
//!
//! Each suite is a static list of test functions plus the buffer capacity it is meant to run with. They exercise
//! every outcome the harness can report and back the `tally` binary.

use tally_core::{Harness, TestFn};

/// A named, ready-to-run list of test functions.
#[derive(Debug, Clone, Copy)]
pub struct Suite {
    pub name: &'static str,
    pub description: &'static str,
    /// Default result buffer capacity.
    pub slots: u8,
    pub functions: &'static [TestFn],
}

/// All built-in suites, in listing order. The first one is the default.
pub const SUITES: &[Suite] = &[
    Suite {
        name: "overview",
        description: "one passing, one failing and one overflowing test function",
        slots: 2,
        functions: &[passes_twice, fails_second, records_past_capacity],
    },
    Suite {
        name: "abort",
        description: "a test function that aborts after a failed resource acquisition",
        slots: 5,
        functions: &[aborts_on_missing_resource],
    },
    Suite {
        name: "nested",
        description: "a test function that tries to start a run from inside a run",
        slots: 4,
        functions: &[passes_twice, runs_reentrantly],
    },
];

/// Look up a suite by name.
pub fn find(name: &str) -> Option<&'static Suite> {
    SUITES.iter().find(|suite| suite.name == name)
}

/// The suite run when none is named.
pub fn default_suite() -> &'static Suite {
    &SUITES[0]
}

// ============================================================================
// Test functions
// ============================================================================

fn passes_twice(h: &mut Harness<'_>) {
    h.record(1 + 1 == 2);
    h.record("tally".len() == 5);
}

fn fails_second(h: &mut Harness<'_>) {
    h.record(u8::MAX.checked_add(1).is_none());
    h.record(i32::MIN.checked_abs().is_some());
}

// Three records against two slots: the third is dropped and the function fails.
fn records_past_capacity(h: &mut Harness<'_>) {
    let words = ["alpha", "beta", "gamma"];
    for word in words {
        h.record(!word.is_empty());
    }
}

fn aborts_on_missing_resource(h: &mut Harness<'_>) {
    h.declare_count(4);

    let port = "not-a-port".parse::<u16>().ok();
    h.record(port.is_none());

    let Some(port) = port.and_then(|p| p.checked_add(1)) else {
        h.abort();
        return;
    };

    h.record(port > 1);
    h.record(port != 0);
    h.record(port < u16::MAX);
}

fn runs_reentrantly(h: &mut Harness<'_>) {
    let nested = h.run();
    h.record(!nested);
    h.record(h.is_testing());
}
