//! wavepath - waveform visualization primitives
//!
//! Turns an abstract waveform (sine, square, triangle, sawtooth) or an
//! arbitrary list of points into a 2D line drawing.
//!
//! The pipeline has two pure stages:
//! - `waveform` generates an ordered sequence of sample points
//! - `path` converts those points into SVG path data
//!
//! `render`, `settings` and `svg` are the glue around them: the SVG
//! document, the loose options record, and importing points from an
//! existing drawing.
//!
//! ## Example
//!
//! ```rust
//! use wavepath::{WaveformParams, WaveformShape};
//!
//! let params = WaveformParams::shape(WaveformShape::Sine).cycles(2.0);
//! let svg = wavepath::render::render(&params, &Default::default());
//! assert_eq!(svg.width, 200.0);
//! assert_eq!(svg.height, 40.0);
//! ```

pub mod path;
pub mod render;
pub mod settings;
pub mod svg;
pub mod waveform;

pub use path::{build_path, build_smooth_path, PathCommand, PathDescription};
pub use waveform::{
    generate_points, points_for_shape, sum_points, InvalidArgument, Point, WaveSource,
    WaveformError, WaveformParams, WaveformShape,
};

/// Height of a waveform drawing relative to its width
pub const WAVEFORM_ASPECT_RATIO: f32 = 0.2;

/// Default drawing width in pixels
pub const DEFAULT_WAVEFORM_SIZE: f32 = 200.0;

/// Default number of cycles squeezed into the drawing
pub const DEFAULT_WAVEFORM_NUM_OF_CYCLES: f32 = 1.0;

/// Default amplitude, slightly below full scale so the stroke isn't clipped
pub const DEFAULT_WAVEFORM_AMPLITUDE: f32 = 0.95;

/// Height derived from a width using [`WAVEFORM_ASPECT_RATIO`]
pub fn height_for_width(width: f32) -> f32 {
    (width * WAVEFORM_ASPECT_RATIO).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_for_width() {
        assert_eq!(height_for_width(200.0), 40.0);
        assert_eq!(height_for_width(100.0), 20.0);
        // 0.2 * 33 = 6.6 rounds up
        assert_eq!(height_for_width(33.0), 7.0);
        assert_eq!(height_for_width(0.0), 0.0);
    }
}
