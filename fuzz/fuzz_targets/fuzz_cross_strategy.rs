#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdec_core::{compute_fibonacci, FibError, Strategy, MAX_INDEX};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Whole capacity plus a margin past it.
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2_000;

    let fast = compute_fibonacci(n, Strategy::FastDoubling);
    let iter = compute_fibonacci(n, Strategy::Iterative);

    match (fast, iter) {
        (Ok(f), Ok(i)) => {
            assert!(n <= MAX_INDEX);
            assert_eq!(f, i, "FastDoubling != Iterative at n={n}");
        }
        (Err(FibError::CapacityExceeded { .. }), Err(FibError::CapacityExceeded { .. })) => {
            assert!(n > MAX_INDEX);
        }
        (f, i) => panic!("strategies disagree at n={n}: {f:?} vs {i:?}"),
    }
});
