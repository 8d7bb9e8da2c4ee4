#![no_main]

use libfuzzer_sys::fuzz_target;
use tally::{Harness, SilentReporter};

fuzz_target!(|data: &[u8]| {
    let Some((&capacity, ops)) = data.split_first() else {
        return;
    };

    let mut results = [false; 255];
    let mut reporter = SilentReporter;
    let Ok(mut harness) = Harness::with_capacity(&mut results, capacity, &[], &mut reporter) else {
        return;
    };

    // Each byte is one operation; the low two bits pick it, the rest is its argument.
    for &op in ops {
        match op & 0b11 {
            0 => {
                harness.record(op & 0b100 != 0);
            }
            1 => harness.declare_count(u16::from(op >> 2)),
            2 => harness.abort(),
            _ => {
                harness.report();
            }
        }
        assert!(harness.recorded() <= harness.capacity());
        assert_eq!(harness.results().len(), usize::from(harness.recorded()));
    }
});
