//! The end-to-end analysis pipeline.
//!
//! One call to [`analyze`] owns every intermediate it creates: the sanitized
//! genome, the skew curve, the minima set, the window slice, and the rendered
//! plot. Nothing is shared across invocations and nothing is mutated after
//! construction, so concurrent callers need no synchronization.
//!
//! # Example
//!
//! ```rust,no_run
//! use oriscan::{analyze, AnalysisOptions};
//!
//! let report = analyze(">seq1\nACGTACGTN\n", &AnalysisOptions::new())?;
//! println!("origin candidate at {}", report.oric_center);
//! # Ok::<(), oriscan::OriscanError>(())
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::AnalysisOptions,
    error::OriscanError,
    genome::Genome,
    kmer::most_frequent_kmers,
    plot::render_skew_base64,
    skew::{find_minima, skew_curve},
};

/// The assembled result of one analysis invocation.
///
/// Field names match the wire format boundary layers expose. Created once per
/// request and discarded after the response is produced; nothing persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Length of the sanitized genome in bases.
    pub genome_length: usize,
    /// Index into the skew curve of the chosen origin candidate (earliest
    /// global minimum).
    pub oric_center: usize,
    /// The global minimum skew value (may be negative).
    pub min_skew_value: i64,
    /// Start of the scanned window (inclusive).
    pub window_start: usize,
    /// End of the scanned window (exclusive).
    pub window_end: usize,
    /// The k-mer length used, echoed back.
    pub k: usize,
    /// The window width requested, echoed back.
    pub window_size: usize,
    /// The maximally frequent k-mers inside the window.
    pub most_frequent_kmers: Vec<String>,
    /// Occurrence count shared by every returned k-mer.
    pub kmer_count: u64,
    /// Base64-encoded PNG of the (truncated) skew curve.
    pub skew_plot: String,
}

/// Runs the full origin-of-replication analysis on raw FASTA-like text.
///
/// Steps, in order: sanitize → compute the skew curve → find its minima →
/// take the earliest minimum as the origin candidate → clamp a window of
/// `options.window_size` bases around it → count k-mers in that window →
/// render the skew curve (capped at `options.max_plot_points` samples) →
/// assemble the report.
///
/// Deterministic: identical input and options yield an identical report.
///
/// # Errors
///
/// Returns [`OriscanError::NoValidSequence`] when the sanitized sequence is
/// empty, and [`OriscanError::Plot`] if the rendering backend fails. No
/// partial result is ever returned alongside an error.
pub fn analyze(raw_text: &str, options: &AnalysisOptions) -> Result<AnalysisReport, OriscanError> {
    let genome = Genome::from_fasta_text(raw_text);
    if genome.is_empty() {
        return Err(OriscanError::NoValidSequence);
    }
    debug!(genome_length = genome.len(), "sanitized input");

    let curve = skew_curve(&genome);
    let minima = find_minima(&curve)?;
    let oric_center = minima.first();

    let (window_start, window_end) = genome.window(oric_center, options.window_size);
    let region = genome.slice(window_start, window_end);
    let kmers = most_frequent_kmers(region, options.k);

    let skew_plot = render_skew_base64(&curve, options.max_plot_points)?;

    info!(
        genome_length = genome.len(),
        oric_center,
        min_skew_value = minima.value,
        window_start,
        window_end,
        kmer_count = kmers.count,
        "analysis complete"
    );

    Ok(AnalysisReport {
        genome_length: genome.len(),
        oric_center,
        min_skew_value: minima.value,
        window_start,
        window_end,
        k: options.k,
        window_size: options.window_size,
        most_frequent_kmers: kmers.kmers,
        kmer_count: kmers.count,
        skew_plot,
    })
}
