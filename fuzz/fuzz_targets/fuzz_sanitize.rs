//! Fuzz target for FASTA sanitization.
//!
//! Tests that sanitization never panics on arbitrary text and that its
//! output stays inside the `{A, C, G, T, N}` alphabet.

#![no_main]

use libfuzzer_sys::fuzz_target;
use oriscan::Genome;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let genome = Genome::from_fasta_text(&raw);

    assert!(genome
        .as_str()
        .chars()
        .all(|c| matches!(c, 'A' | 'C' | 'G' | 'T' | 'N')));
});
