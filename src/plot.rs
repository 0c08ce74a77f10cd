//! Skew-curve rendering.
//!
//! Renders a (possibly truncated) GC-skew curve as a line plot with a shaded
//! area beneath it, drawn with `plotters` into an in-memory RGB bitmap and
//! encoded as PNG. [`render_skew_base64`] wraps the PNG bytes in base64 for
//! inline transport, e.g. embedding in a JSON payload or a data URI.
//!
//! Every call creates and tears down its own drawing area, so concurrent
//! callers never share canvas state. No timestamps or other nondeterministic
//! metadata are embedded: identical curve data produces identical bytes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use plotters::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Default cap on the number of leading curve samples rendered.
pub const DEFAULT_MAX_POINTS: usize = 2000;

/// Plot dimensions in pixels, wide and short like a skew trace.
const PLOT_WIDTH: u32 = 960;
const PLOT_HEIGHT: u32 = 360;

/// Errors that can occur while rendering a skew plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The drawing backend failed while plotting the curve.
    #[error("failed to draw skew plot: {0}")]
    Draw(String),

    /// The rendered bitmap could not be encoded as PNG.
    #[error("failed to encode skew plot as PNG: {source}")]
    Encode {
        #[from]
        source: image::ImageError,
    },
}

/// Renders a skew curve to PNG bytes.
///
/// The curve is truncated to at most `max_points` leading samples — a strict
/// prefix, never resampled — to bound rendering cost and payload size for
/// very long genomes. Exact pixel bytes are not a contract; the truncated
/// curve data is always fully visualized.
///
/// # Errors
///
/// Returns [`PlotError`] if the drawing backend or PNG encoder fails.
pub fn render_skew_png(curve: &[i64], max_points: usize) -> Result<Vec<u8>, PlotError> {
    let points = &curve[..curve.len().min(max_points)];
    debug!(
        curve_len = curve.len(),
        rendered = points.len(),
        "rendering skew plot"
    );

    let x_max = points.len().saturating_sub(1).max(1) as i64;
    let (y_min, y_max) = points
        .iter()
        .fold((0_i64, 0_i64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    // Flat curves still need a non-degenerate y range.
    let (y_min, y_max) = if y_min == y_max {
        (y_min - 1, y_max + 1)
    } else {
        (y_min, y_max)
    };

    let mut rgb = vec![0_u8; (PLOT_WIDTH * PLOT_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut rgb, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| PlotError::Draw(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .build_cartesian_2d(0..x_max, y_min..y_max)
            .map_err(|e| PlotError::Draw(e.to_string()))?;

        let series = points.iter().enumerate().map(|(i, &v)| (i as i64, v));
        chart
            .draw_series(AreaSeries::new(series.clone(), 0, BLUE.mix(0.07)))
            .map_err(|e| PlotError::Draw(e.to_string()))?;
        chart
            .draw_series(LineSeries::new(series, BLUE.stroke_width(1)))
            .map_err(|e| PlotError::Draw(e.to_string()))?;

        root.present().map_err(|e| PlotError::Draw(e.to_string()))?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&rgb, PLOT_WIDTH, PLOT_HEIGHT, ExtendedColorType::Rgb8)?;
    Ok(png)
}

/// Renders a skew curve to a base64-encoded PNG string.
///
/// # Errors
///
/// Returns [`PlotError`] if the drawing backend or PNG encoder fails.
pub fn render_skew_base64(curve: &[i64], max_points: usize) -> Result<String, PlotError> {
    let png = render_skew_png(curve, max_points)?;
    Ok(STANDARD.encode(png))
}

#[cfg(test)]
mod tests {
    use super::*;

    // PNG files start with an 8-byte magic number.
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn renders_png_bytes() {
        let curve = vec![0, 1, 0, -1, -2, -1, 0];
        let png = render_skew_png(&curve, DEFAULT_MAX_POINTS).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn renders_single_point_curve() {
        let png = render_skew_png(&[0], DEFAULT_MAX_POINTS).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn renders_flat_curve() {
        let curve = vec![0; 100];
        let png = render_skew_png(&curve, DEFAULT_MAX_POINTS).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn truncation_is_a_strict_prefix() {
        let long: Vec<i64> = (0..10_000_i64).map(|i| i % 7 - 3).collect();
        let truncated = render_skew_png(&long, 100).unwrap();
        let prefix_only = render_skew_png(&long[..100], 100).unwrap();
        assert_eq!(truncated, prefix_only);
    }

    #[test]
    fn rendering_is_deterministic() {
        let curve = vec![0, -1, -2, -1, 0, 1, 2];
        let a = render_skew_base64(&curve, DEFAULT_MAX_POINTS).unwrap();
        let b = render_skew_base64(&curve, DEFAULT_MAX_POINTS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn base64_round_trips_to_png() {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let encoded = render_skew_base64(&[0, 1, 2], DEFAULT_MAX_POINTS).unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(&decoded[..8], &PNG_MAGIC);
    }
}
