//! Fuzz target for skew computation and minimum localization.
//!
//! Tests the curve shape invariants and that `find_minima` agrees with the
//! true minimum for every sanitized input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use oriscan::{find_minima, skew_curve, Genome};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let genome = Genome::from_fasta_text(&raw);
    let curve = skew_curve(&genome);

    assert_eq!(curve.len(), genome.len() + 1);
    assert_eq!(curve[0], 0);

    let minima = find_minima(&curve).unwrap();
    assert_eq!(Some(minima.value), curve.iter().copied().min());
    assert!(minima.positions.windows(2).all(|w| w[0] < w[1]));
});
