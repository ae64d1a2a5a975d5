#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdec_core::arith::{add, multiply, subtract};
use fibdec_core::{DigitSeq, FibError, MAX_DIGITS};

fn operand(bytes: &[u8]) -> Option<(DigitSeq, BigUint)> {
    let text: String = bytes.iter().map(|b| char::from(b'0' + b % 10)).collect();
    let seq = DigitSeq::parse(&text).ok()?;
    let big = BigUint::parse_bytes(text.as_bytes(), 10)?;
    Some((seq, big))
}

fuzz_target!(|data: &[u8]| {
    let Some((&head, rest)) = data.split_first() else {
        return;
    };
    let (left, right) = rest.split_at(usize::from(head).min(rest.len()));
    let (Some((a, big_a)), Some((b, big_b))) = (operand(left), operand(right)) else {
        return;
    };

    match add(&a, &b) {
        Ok(sum) => assert_eq!(sum.to_string(), (&big_a + &big_b).to_string()),
        Err(FibError::CapacityExceeded { .. }) => {
            assert!((&big_a + &big_b).to_string().len() > MAX_DIGITS);
        }
        Err(e) => panic!("add failed: {e}"),
    }

    match subtract(&a, &b) {
        Ok(diff) => assert_eq!(diff.to_string(), (&big_a - &big_b).to_string()),
        Err(FibError::SubtractUnderflow) => assert!(big_a < big_b),
        Err(e) => panic!("subtract failed: {e}"),
    }

    match multiply(&a, &b) {
        Ok(product) => assert_eq!(product.to_string(), (&big_a * &big_b).to_string()),
        Err(FibError::CapacityExceeded { .. }) => {
            assert!((&big_a * &big_b).to_string().len() > MAX_DIGITS);
        }
        Err(e) => panic!("multiply failed: {e}"),
    }
});
