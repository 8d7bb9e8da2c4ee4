//! Embedding tests: driving the harness through the `tally` re-exports the way an integrator would.

use proptest::prelude::*;
use tally::{ConsoleReporter, Harness, HarnessError, SilentReporter, TestFn};

fn two_checks(h: &mut Harness<'_>) {
    h.record(true);
    h.record(true);
}

#[test]
fn test_stack_buffer_and_static_function_table() {
    static FUNCTIONS: [TestFn; 2] = [two_checks, two_checks];

    let mut results = [false; 2];
    let mut reporter = SilentReporter;
    let mut harness = Harness::new(&mut results, &FUNCTIONS, &mut reporter).unwrap();

    assert!(harness.run());
    assert_eq!(harness.function_index(), 1);
    assert_eq!(harness.function_count(), 2);
}

#[test]
fn test_undersized_buffer_degrades_to_overflow_not_a_crash() {
    let functions: [TestFn; 1] = [two_checks];
    let mut results = [false; 1];
    let mut reporter = ConsoleReporter::new(Vec::new());

    let all_passed = Harness::new(&mut results, &functions, &mut reporter).unwrap().run();

    assert!(!all_passed);
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(out.contains("test #0 encountered a fail overflow\n"));
}

#[test]
fn test_construction_errors_propagate() {
    fn build(results: &mut [bool], capacity: u8) -> Result<u8, HarnessError> {
        let mut reporter = SilentReporter;
        let harness = Harness::with_capacity(results, capacity, &[], &mut reporter)?;
        Ok(harness.capacity())
    }

    let mut results = [false; 4];
    assert_eq!(build(&mut results, 4), Ok(4));
    assert_eq!(
        build(&mut results, 5),
        Err(HarnessError::BufferTooSmall { capacity: 5, len: 4 })
    );
}

proptest! {
    /// Property: a run of functions that never record anything always passes, whatever the capacity.
    #[test]
    fn silent_functions_always_pass(count in 0usize..16, capacity in 0u8..=255) {
        fn silent(_h: &mut Harness<'_>) {}

        let functions = vec![silent as TestFn; count];
        let mut results = [false; 255];
        let mut reporter = SilentReporter;
        let mut harness = Harness::with_capacity(&mut results, capacity, &functions, &mut reporter).unwrap();

        prop_assert!(harness.run());
        prop_assert!(!harness.is_testing());
    }
}
