//! Error types for oriscan.
//!
//! This module provides exhaustive, strongly-typed errors for all operations
//! in the library, enabling precise error handling and informative messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::plot::PlotError;

/// Errors that can occur in oriscan operations.
#[derive(Debug, Error)]
pub enum OriscanError {
    /// The sanitized sequence was empty after FASTA parsing and filtering.
    ///
    /// This is the client-facing failure for empty, header-only, or
    /// all-garbage input. No partial result accompanies it.
    #[error("no valid sequence provided")]
    NoValidSequence,

    /// A skew curve minimum was requested on an empty curve.
    #[error(transparent)]
    EmptyCurve(#[from] EmptyCurveError),

    /// The skew plot could not be drawn or encoded.
    #[error(transparent)]
    Plot(#[from] PlotError),

    /// Failed to read an input file.
    #[error("failed to read input '{path}': {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to read from standard input.
    #[error("failed to read standard input: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the analysis report as JSON.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },

    /// The base64 plot payload could not be decoded back to PNG bytes.
    #[error("failed to decode plot payload: {source}")]
    PlotPayload {
        #[source]
        source: base64::DecodeError,
    },
}

impl From<std::io::Error> for OriscanError {
    fn from(source: std::io::Error) -> Self {
        OriscanError::WriteError { source }
    }
}

impl From<serde_json::Error> for OriscanError {
    fn from(source: serde_json::Error) -> Self {
        OriscanError::JsonError { source }
    }
}

impl From<base64::DecodeError> for OriscanError {
    fn from(source: base64::DecodeError) -> Self {
        OriscanError::PlotPayload { source }
    }
}

/// Error for locating the minimum of an empty skew curve.
///
/// Unreachable through the analysis pipeline, which always computes curves of
/// length at least 1, but [`crate::skew::find_minima`] defends against direct
/// misuse.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cannot locate the minimum of an empty skew curve")]
pub struct EmptyCurveError;
