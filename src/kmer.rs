//! Windowed k-mer frequency counting.
//!
//! Given a sequence window around an origin candidate, this module finds the
//! length-`k` substrings occurring with maximal frequency. Counting uses an
//! `FxHashMap` keyed on byte slices of the window, so no per-window `String`
//! is allocated until the maximal set is materialized.
//!
//! # Example
//!
//! ```rust
//! use oriscan::kmer::most_frequent_kmers;
//!
//! let result = most_frequent_kmers("AAAA", 2);
//! assert_eq!(result.kmers, vec!["AA".to_string()]);
//! assert_eq!(result.count, 3);
//! ```

use rustc_hash::FxHashMap;
use serde::Serialize;

/// The set of maximally frequent k-mers in a window, plus their shared count.
///
/// All members have identical length and identical occurrence count. Empty
/// with count 0 when `k` is out of `[1, window length]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KmerResult {
    /// The maximally frequent k-mers, lexicographically sorted.
    pub kmers: Vec<String>,
    /// Number of times each returned k-mer occurs in the window.
    pub count: u64,
}

impl KmerResult {
    /// Returns `true` if no k-mers were found (out-of-range `k`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }
}

/// Finds the most frequent length-`k` substrings of `seq`.
///
/// Every overlapping window of length `k` (stride 1) is counted in one pass,
/// then all k-mers achieving the maximum count are returned. Ties are broken
/// to a stable order by lexicographic sort; the set and the count are the
/// contract, not the ordering.
///
/// `k == 0` or `k > seq.len()` yields an empty result with count 0. This is a
/// deliberate "no answer" sentinel, not an error.
#[must_use]
pub fn most_frequent_kmers(seq: &str, k: usize) -> KmerResult {
    if k == 0 || k > seq.len() {
        return KmerResult::default();
    }

    let mut counts: FxHashMap<&[u8], u64> = FxHashMap::default();
    for kmer in seq.as_bytes().windows(k) {
        *counts.entry(kmer).or_insert(0) += 1;
    }

    let count = counts.values().copied().max().unwrap_or_default();
    let mut kmers: Vec<String> = counts
        .into_iter()
        .filter(|&(_, c)| c == count)
        .map(|(kmer, _)| String::from_utf8_lossy(kmer).into_owned())
        .collect();
    kmers.sort_unstable();

    KmerResult { kmers, count }
}
