//! FASTA sanitization and the sanitized genome type.
//!
//! This module turns raw FASTA-like text into a [`Genome`]: an immutable
//! nucleotide sequence over the alphabet `{A, C, G, T, N}`. Header lines and
//! any characters outside the alphabet are silently discarded — this is a
//! deliberate lossy-sanitization policy, not validation. Emptiness after
//! sanitization is the caller's responsibility to detect.
//!
//! # Example
//!
//! ```rust
//! use oriscan::genome::Genome;
//!
//! let genome = Genome::from_fasta_text(">seq1\nacgt acgtn\n123\n");
//! assert_eq!(genome.as_str(), "ACGTACGTN");
//! ```

use std::fmt;

/// A sanitized, immutable nucleotide sequence.
///
/// Holds only uppercase characters from `{A, C, G, T, N}`, in the order they
/// appeared in the input. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Genome(String);

impl Genome {
    /// Sanitizes raw FASTA-like text into a genome.
    ///
    /// - Lines are trimmed; blank lines are dropped.
    /// - Any line beginning with the FASTA header marker `>` is dropped in
    ///   full, even if sequence-like characters follow the marker.
    /// - Remaining lines are concatenated in order and uppercased, then
    ///   filtered to `{A, C, G, T, N}`; everything else is discarded.
    ///
    /// Never errors: an input with no usable sequence data produces an empty
    /// genome.
    #[must_use]
    pub fn from_fasta_text(raw: &str) -> Self {
        let sequence = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('>'))
            .flat_map(str::chars)
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T' | 'N'))
            .collect();

        Self(sequence)
    }

    /// Returns the genome as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the genome as raw bytes (always ASCII).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the number of bases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the genome holds no bases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Computes a half-open window `[start, end)` of `width` bases centered
    /// (best-effort) on `center`, clamped to the genome bounds.
    ///
    /// The half-width uses truncating integer division, so the window is
    /// asymmetric by one base for odd `width`. This arithmetic is part of the
    /// documented behavior and must not be "corrected".
    ///
    /// The returned bounds always satisfy `start <= end <= self.len()`.
    #[must_use]
    pub fn window(&self, center: usize, width: usize) -> (usize, usize) {
        let half = width / 2;
        let start = center.saturating_sub(half);
        let end = self.len().min(center.saturating_add(half));
        (start.min(end), end)
    }

    /// Returns the slice of the genome covered by a half-open window.
    ///
    /// Bounds outside the genome are clamped rather than panicking.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.0[start..end]
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Genome {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lines_contribute_nothing() {
        let genome = Genome::from_fasta_text(">seq1 ACGTACGT\nACGT\n");
        assert_eq!(genome.as_str(), "ACGT");
    }

    #[test]
    fn lowercase_is_normalized() {
        let genome = Genome::from_fasta_text("acgtn\n");
        assert_eq!(genome.as_str(), "ACGTN");
    }

    #[test]
    fn non_alphabet_characters_are_dropped() {
        let genome = Genome::from_fasta_text("AC-GT 123\nU*X\n");
        assert_eq!(genome.as_str(), "ACGT");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let genome = Genome::from_fasta_text("AC\n\n   \nGT\n");
        assert_eq!(genome.as_str(), "ACGT");
    }

    #[test]
    fn multiline_sequence_preserves_order() {
        let genome = Genome::from_fasta_text(">chr1\nAAAC\nCCGG\nGTTT\n");
        assert_eq!(genome.as_str(), "AAACCCGGGTTT");
    }

    #[test]
    fn header_only_input_is_empty() {
        let genome = Genome::from_fasta_text(">only a header\n");
        assert!(genome.is_empty());
        assert_eq!(genome.len(), 0);
    }

    #[test]
    fn window_is_clamped_to_bounds() {
        let genome = Genome::from_fasta_text("ACGTACGTAC\n");

        // Center near the left edge: start clamps to 0.
        assert_eq!(genome.window(1, 6), (0, 4));
        // Center near the right edge: end clamps to len.
        assert_eq!(genome.window(9, 6), (6, 10));
        // Window wider than the genome covers everything.
        assert_eq!(genome.window(5, 100), (0, 10));
    }

    #[test]
    fn odd_width_window_is_asymmetric() {
        let genome = Genome::from_fasta_text("ACGTACGTAC\n");

        // width 5 -> half-width 2 on each side, covering 4 bases.
        assert_eq!(genome.window(5, 5), (3, 7));
    }

    #[test]
    fn slice_clamps_out_of_range_bounds() {
        let genome = Genome::from_fasta_text("ACGT\n");
        assert_eq!(genome.slice(2, 100), "GT");
        assert_eq!(genome.slice(10, 20), "");
    }
}
