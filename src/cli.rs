//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_K, DEFAULT_WINDOW_SIZE};

/// Locate a bacterial origin-of-replication candidate via the GC-skew minimum
/// and report the most frequent k-mers around it.
#[derive(Parser, Debug)]
#[command(name = "oriscan")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file ("-" or omitted reads stdin)
    pub path: Option<PathBuf>,

    /// K-mer length for the origin-region scan
    #[arg(short, long = "kmer-len", default_value_t = DEFAULT_K)]
    pub k: usize,

    /// Width of the window centered on the skew minimum
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Also write the skew plot PNG to this path
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Suppress informational output (only emit the report)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the analysis report.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable summary (the base64 plot payload is elided)
    #[default]
    Text,
    /// The full report as a JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_flags_are_omitted() {
        let args = Args::parse_from(["oriscan", "genome.fa"]);
        assert_eq!(args.k, 9);
        assert_eq!(args.window_size, 500);
        assert_eq!(args.format, ReportFormat::Text);
        assert!(!args.quiet);
        assert!(args.plot.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "oriscan",
            "-k",
            "7",
            "-w",
            "300",
            "--format",
            "json",
            "--plot",
            "skew.png",
            "genome.fa",
        ]);
        assert_eq!(args.k, 7);
        assert_eq!(args.window_size, 300);
        assert_eq!(args.format, ReportFormat::Json);
        assert_eq!(args.plot, Some(PathBuf::from("skew.png")));
    }

    #[test]
    fn path_may_be_omitted_for_stdin() {
        let args = Args::parse_from(["oriscan"]);
        assert!(args.path.is_none());
    }
}
