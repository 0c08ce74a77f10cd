//! Input source abstraction for file and stdin.
//!
//! This module provides the [`Input`] enum for abstracting over different
//! input sources, enabling seamless Unix pipeline integration.
//!
//! # Example
//!
//! ```rust
//! use oriscan::input::Input;
//! use std::path::Path;
//!
//! // From a file path
//! let input = Input::from_path(Path::new("genome.fa"));
//! assert!(input.is_file());
//!
//! // From stdin marker
//! let input = Input::from_path(Path::new("-"));
//! assert!(input.is_stdin());
//! ```

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use crate::error::OriscanError;

/// Input source for the analysis boundary.
///
/// Represents either a file path or standard input, allowing the same
/// reading logic to work with both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    /// Read from a file at the specified path.
    File(PathBuf),
    /// Read from standard input.
    #[default]
    Stdin,
}

impl Input {
    /// Creates an `Input` from a path.
    ///
    /// If the path is "-", returns [`Self::Stdin`]. Otherwise, returns
    /// [`Self::File`] with the given path.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Creates an `Input` from an optional path.
    ///
    /// If `None` or "-", returns [`Self::Stdin`].
    #[must_use]
    pub fn from_option(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdin, Self::from_path)
    }

    /// Returns `true` if this input reads from stdin.
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Returns `true` if this input reads from a file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Reads the entire input as text.
    ///
    /// Bytes are decoded lossily: invalid UTF-8 sequences are replaced rather
    /// than failing, and the replacement characters fall out during
    /// sanitization anyway.
    ///
    /// # Errors
    ///
    /// Returns [`OriscanError::InputRead`] or [`OriscanError::StdinRead`] if
    /// the underlying read fails.
    pub fn read_text(&self) -> Result<String, OriscanError> {
        let bytes = match self {
            Self::File(path) => fs::read(path).map_err(|source| OriscanError::InputRead {
                source,
                path: path.clone(),
            })?,
            Self::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buffer)
                    .map_err(|source| OriscanError::StdinRead { source })?;
                buffer
            }
        };

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn dash_means_stdin() {
        assert!(Input::from_path(Path::new("-")).is_stdin());
        assert!(Input::from_path(Path::new("genome.fa")).is_file());
    }

    #[test]
    fn from_option_defaults_to_stdin() {
        assert!(Input::from_option(None).is_stdin());
        assert!(Input::from_option(Some(Path::new("x.fa"))).is_file());
    }

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b">seq\nACGT\n").unwrap();
        file.flush().unwrap();

        let text = Input::from_path(file.path()).read_text().unwrap();
        assert_eq!(text, ">seq\nACGT\n");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"AC\xff\xfeGT\n").unwrap();
        file.flush().unwrap();

        let text = Input::from_path(file.path()).read_text().unwrap();
        assert!(text.contains("AC"));
        assert!(text.contains("GT"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Input::from_path(Path::new("/nonexistent/genome.fa"))
            .read_text()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/genome.fa"));
    }
}
