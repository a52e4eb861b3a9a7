//! Render module - the presentation layer around the path builder
//!
//! This module provides:
//! - `Style` for the cosmetic stroke attributes
//! - `WaveformSvg`, a sized SVG document for one waveform
//! - `render`, which runs the whole pipeline for a set of parameters

mod document;
mod style;

pub use document::WaveformSvg;
pub use style::{Interpolation, Linecap, Style};

use crate::path::{build_path, build_smooth_path};
use crate::waveform::{generate_points, WaveformParams};

/// Render a waveform to an SVG document
///
/// The surface is `params.width()` wide and `params.height()` tall, and the
/// path is built from the generated (or passed-through) points.
pub fn render(params: &WaveformParams, style: &Style) -> WaveformSvg {
    let width = params.width();
    let height = params.height();
    let points = generate_points(params);

    let path = match style.interpolation {
        Interpolation::Linear => build_path(&points, height),
        Interpolation::Smooth => build_smooth_path(&points, height),
    };

    log::debug!(
        "Rendered {} points into {} path commands ({}x{})",
        points.len(),
        path.len(),
        width,
        height
    );

    WaveformSvg {
        width,
        height,
        path,
        style: style.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::{Point, WaveformShape, SAMPLE_COUNT};

    #[test]
    fn test_render_shape() {
        let params = WaveformParams::shape(WaveformShape::Square).size(100.0);
        let svg = render(&params, &Style::default());

        assert_eq!(svg.width, 100.0);
        assert_eq!(svg.height, 20.0);
        assert_eq!(svg.path.len(), SAMPLE_COUNT);
        assert!(svg.path_data().starts_with("M 0 0.5 L 1 0.5"));
    }

    #[test]
    fn test_render_points() {
        let params = WaveformParams::points(vec![Point::new(0.0, 0.0), Point::new(100.0, 1.0)])
            .size(100.0);
        let svg = render(&params, &Style::default());
        assert_eq!(svg.path_data(), "M 0 10 L 100 0");
    }

    #[test]
    fn test_render_smooth() {
        let params = WaveformParams::shape(WaveformShape::Sine);
        let style = Style {
            interpolation: Interpolation::Smooth,
            ..Style::default()
        };
        let svg = render(&params, &style);
        assert_eq!(svg.path.len(), SAMPLE_COUNT + 1);
        assert!(svg.path_data().contains(" Q "));
    }
}
