//! Console transcript tests for complete harness runs.
//!
//! These lock in the exact text the console reporter prints for whole runs.
//!
//! Run with: `cargo test -p tally_core --test transcripts`
//! Review changes: `cargo insta review`

use tally_core::{ConsoleConfig, ConsoleReporter, Harness, TestFn};

/// Run `functions` over a buffer of `capacity` slots and return (run result, transcript).
fn transcript(functions: &[TestFn], capacity: u8) -> (bool, String) {
    transcript_with(functions, capacity, ConsoleConfig::default())
}

fn transcript_with(functions: &[TestFn], capacity: u8, config: ConsoleConfig) -> (bool, String) {
    let mut results = [false; 255];
    let mut reporter = ConsoleReporter::with_config(Vec::new(), config);

    let all_passed = Harness::with_capacity(&mut results, capacity, functions, &mut reporter)
        .expect("harness construction failed")
        .run();

    assert!(reporter.take_error().is_none());
    let out = String::from_utf8(reporter.into_inner()).expect("transcript is not UTF-8");
    (all_passed, out)
}

fn passes_twice(h: &mut Harness<'_>) {
    h.record(true);
    h.record(true);
}

fn fails_second(h: &mut Harness<'_>) {
    h.record(true);
    h.record(false);
}

fn records_three(h: &mut Harness<'_>) {
    h.record(true);
    h.record(true);
    h.record(true);
}

fn aborts_after_one(h: &mut Harness<'_>) {
    h.declare_count(4);
    h.record(true);
    h.abort();
}

#[test]
fn test_pass_fail_overflow_run() {
    let (all_passed, out) = transcript(&[passes_twice, fails_second, records_three], 2);

    assert!(!all_passed);
    insta::assert_snapshot!(out, @r"
running 3 tests with 2 expr slots

expressions: 2 passed, 0 failed
test #0 passed

failed expression ids: 1
expressions: 1 passed, 1 failed
test #1 failed

expressions: 2 passed, 0 failed
test #2 encountered a fail overflow

tests: 1 passed, 2 failed
");
}

#[test]
fn test_abort_run() {
    let (all_passed, out) = transcript(&[aborts_after_one], 5);

    assert!(!all_passed);
    insta::assert_snapshot!(out, @r"
running 1 tests with 5 expr slots

failed expression ids: 1 2 3
aborted before expression: 1
expressions: 1 passed, 3 failed
test #0 aborted

tests: 0 passed, 1 failed
");
}

#[test]
fn test_abort_overflow_reports_overflow() {
    // declares 4 but only 2 slots exist: backfill overflows
    let (all_passed, out) = transcript(&[aborts_after_one], 2);

    assert!(!all_passed);
    insta::assert_snapshot!(out, @r"
running 1 tests with 2 expr slots

failed expression ids: 1
aborted before expression: 1
expressions: 1 passed, 1 failed
test #0 encountered a fail overflow

tests: 0 passed, 1 failed
");
}

#[test]
fn test_empty_function_passes() {
    fn does_nothing(_h: &mut Harness<'_>) {}

    let (all_passed, out) = transcript(&[does_nothing], 0);

    assert!(all_passed);
    insta::assert_snapshot!(out, @r"
running 1 tests with 0 expr slots

expressions: 0 passed, 0 failed
test #0 passed

tests: 1 passed, 0 failed
");
}

#[test]
fn test_nested_run_leaves_outer_transcript_intact() {
    fn nests(h: &mut Harness<'_>) {
        let nested = h.run();
        h.record(!nested);
    }

    let (all_passed, out) = transcript(&[nests, passes_twice], 2);

    assert!(all_passed);
    insta::assert_snapshot!(out, @r"
running 2 tests with 2 expr slots

expressions: 1 passed, 0 failed
test #0 passed

expressions: 2 passed, 0 failed
test #1 passed

tests: 2 passed, 0 failed
");
}

#[test]
fn test_colored_transcript_only_colors_verdicts() {
    let (_, out) = transcript_with(&[passes_twice, fails_second], 2, ConsoleConfig::new().with_color(true));

    assert!(out.contains("test #0 \x1b[32mpassed\x1b[0m\n"));
    assert!(out.contains("test #1 \x1b[31mfailed\x1b[0m\n"));
    assert!(out.starts_with("running 2 tests with 2 expr slots\n\n"));
    assert!(out.ends_with("tests: 1 passed, 1 failed\n"));
}
