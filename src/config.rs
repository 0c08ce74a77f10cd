//! Analysis configuration.
//!
//! Boundary layers collect loosely-typed parameters (CLI flags, form fields)
//! and resolve them into an [`AnalysisOptions`] before the core pipeline ever
//! sees them. The pipeline treats the fields as already-resolved integers and
//! performs no further validation.

use crate::plot::DEFAULT_MAX_POINTS;

/// Default k-mer length for the origin-region scan.
pub const DEFAULT_K: usize = 9;

/// Default width of the window centered on the skew minimum.
pub const DEFAULT_WINDOW_SIZE: usize = 500;

/// Resolved parameters for one analysis invocation.
///
/// Construct with [`AnalysisOptions::new`] (or `Default`) and adjust with the
/// fluent setters:
///
/// ```rust
/// use oriscan::config::AnalysisOptions;
///
/// let options = AnalysisOptions::new().k(7).window_size(300);
/// assert_eq!(options.k, 7);
/// assert_eq!(options.window_size, 300);
/// assert_eq!(options.max_plot_points, 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// K-mer length scanned inside the origin window.
    pub k: usize,
    /// Width of the window centered on the chosen skew minimum.
    pub window_size: usize,
    /// Cap on the number of leading skew samples rendered in the plot.
    pub max_plot_points: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            window_size: DEFAULT_WINDOW_SIZE,
            max_plot_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl AnalysisOptions {
    /// Creates options with the default parameters (k = 9, window = 500,
    /// plot cap = 2000).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the k-mer length.
    ///
    /// Out-of-range values are not rejected here: the counter degrades to an
    /// empty result when `k` exceeds the window, per its contract.
    #[must_use]
    pub const fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the origin-window width.
    #[must_use]
    pub const fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the rendered-plot sample cap.
    #[must_use]
    pub const fn max_plot_points(mut self, max_plot_points: usize) -> Self {
        self.max_plot_points = max_plot_points;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = AnalysisOptions::default();
        assert_eq!(options.k, 9);
        assert_eq!(options.window_size, 500);
        assert_eq!(options.max_plot_points, 2000);
    }

    #[test]
    fn fluent_setters_override_fields() {
        let options = AnalysisOptions::new()
            .k(11)
            .window_size(1000)
            .max_plot_points(500);
        assert_eq!(options.k, 11);
        assert_eq!(options.window_size, 1000);
        assert_eq!(options.max_plot_points, 500);
    }
}
