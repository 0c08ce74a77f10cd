//! Fuzz target for k-mer frequency counting.
//!
//! Tests that counting never panics and that the out-of-range sentinel and
//! the exact-count contract both hold.

#![no_main]

use libfuzzer_sys::fuzz_target;
use oriscan::most_frequent_kmers;

fuzz_target!(|input: (&str, u8)| {
    let (seq, k) = input;
    let k = usize::from(k % 16);

    // Byte windows only correspond to substrings for ASCII input.
    if !seq.is_ascii() {
        return;
    }

    let result = most_frequent_kmers(seq, k);

    if k == 0 || k > seq.len() {
        assert!(result.is_empty());
        assert_eq!(result.count, 0);
    } else {
        for kmer in &result.kmers {
            let occurrences = seq
                .as_bytes()
                .windows(k)
                .filter(|w| *w == kmer.as_bytes())
                .count() as u64;
            assert_eq!(occurrences, result.count);
        }
    }
});
