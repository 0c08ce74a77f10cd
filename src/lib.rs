//! oriscan: locate a probable origin of replication in a bacterial genome.
//!
//! The cumulative GC-skew curve of a circular bacterial genome tends to reach
//! its global minimum near the origin of replication. `oriscan` sanitizes
//! FASTA-like text, computes that curve, picks the earliest minimum as the
//! origin candidate, reports the most frequent k-mers in a window around it,
//! and renders the curve as a base64-encoded PNG.
//!
//! # Example
//!
//! ```rust
//! use oriscan::genome::Genome;
//! use oriscan::skew::{find_minima, skew_curve};
//!
//! let genome = Genome::from_fasta_text(">seq1\nACGTACGTN\n");
//! let curve = skew_curve(&genome);
//! assert_eq!(curve.len(), genome.len() + 1);
//!
//! let minima = find_minima(&curve)?;
//! assert_eq!(minima.first(), 2);
//! # Ok::<(), oriscan::error::EmptyCurveError>(())
//! ```
//!
//! The full pipeline, including plot rendering:
//!
//! ```rust,no_run
//! use oriscan::{analyze, AnalysisOptions};
//!
//! let report = analyze(">seq1\nACGTACGTN\n", &AnalysisOptions::new())?;
//! assert_eq!(report.genome_length, 9);
//! # Ok::<(), oriscan::OriscanError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod genome;
pub mod input;
pub mod kmer;
pub mod pipeline;
pub mod plot;
pub mod skew;

pub use config::AnalysisOptions;
pub use error::{EmptyCurveError, OriscanError};
pub use genome::Genome;
pub use kmer::{most_frequent_kmers, KmerResult};
pub use pipeline::{analyze, AnalysisReport};
pub use skew::{find_minima, skew_curve, MinimaSet};
