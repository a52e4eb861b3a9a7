//! Waveform module - turns waveform parameters into sample points
//!
//! This module provides:
//! - `WaveformShape`, the closed set of periodic shapes
//! - `WaveformParams` and `WaveSource` describing one drawing
//! - `generate_points` / `points_for_shape` for sampling a shape
//! - `sum_points` for waveform addition

mod params;
mod point;
mod shape;

use std::borrow::Cow;

use thiserror::Error;

pub use params::{WaveSource, WaveformParams};
pub use point::Point;
pub use shape::WaveformShape;

use params::{normalize_amplitude, normalize_cycles, normalize_width, wrap_offset};

/// Number of evenly spaced intervals across the width
pub const RESOLUTION: usize = 100;

/// Number of points generated for a shape, one per interval boundary
pub const SAMPLE_COUNT: usize = RESOLUTION + 1;

/// Ways a waveform request can be malformed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("waveform requires either a `shape` or an array of `points`")]
    MissingSource,

    #[error("waveform takes either a `shape` or an array of `points`, not both")]
    ConflictingSources,

    #[error("unrecognized waveform shape `{0}`")]
    UnknownShape(String),

    #[error("cannot add waveforms of different lengths (expected {expected} points, found {found})")]
    MismatchedLengths { expected: usize, found: usize },
}

/// Errors that can occur while building a waveform
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveformError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Get the points for a drawing
///
/// Explicit points are passed through untouched; the numeric parameters
/// only apply to generated shapes.
pub fn generate_points(params: &WaveformParams) -> Cow<'_, [Point]> {
    match &params.source {
        WaveSource::Points(points) => Cow::Borrowed(points.as_slice()),
        WaveSource::Shape(shape) => Cow::Owned(points_for_shape(
            *shape,
            params.num_of_cycles,
            params.amplitude,
            params.width(),
            params.offset,
        )),
    }
}

/// Sample a shape across `width` pixels
///
/// Always yields [`SAMPLE_COUNT`] points with `x` running from `0` to
/// `width`. Each `y` is the shape evaluated at
/// `(x / width + offset / 100) * num_of_cycles`, modulo one period,
/// scaled by `amplitude`. When the right edge lands exactly on a period
/// boundary it is sampled at the end of that period (phase `1.0`), so
/// square and sawtooth don't snap back on the last point.
///
/// # Arguments
/// * `shape` - Periodic function to sample
/// * `num_of_cycles` - Periods across the width, clamped to be non-negative
/// * `amplitude` - Peak level, clamped to `[0, 1]`
/// * `width` - Drawing width in pixels
/// * `offset` - Phase shift in percent of a period, wrapped modulo 100
pub fn points_for_shape(
    shape: WaveformShape,
    num_of_cycles: f32,
    amplitude: f32,
    width: f32,
    offset: f32,
) -> Vec<Point> {
    let num_of_cycles = normalize_cycles(num_of_cycles);
    let amplitude = normalize_amplitude(amplitude);
    let width = normalize_width(width);
    let phase_offset = wrap_offset(offset) / 100.0;

    (0..SAMPLE_COUNT)
        .map(|i| {
            // progress goes from 0.0 to 1.0 inclusive so the line reaches the right edge
            let progress = i as f32 / RESOLUTION as f32;
            let raw_phase = (progress + phase_offset) * num_of_cycles;
            let phase = raw_phase.rem_euclid(1.0);
            let phase = if phase >= 1.0 { 0.0 } else { phase };
            // The right edge closes the last period instead of starting a new one
            let phase = if i == RESOLUTION && phase == 0.0 && raw_phase > 0.0 {
                1.0
            } else {
                phase
            };
            Point::new(progress * width, amplitude * shape.sample(phase))
        })
        .collect()
}

/// Add waveforms together, sample by sample
///
/// All inputs must have the same number of points. The `x` coordinates
/// of the first waveform are kept and the `y` values are summed without
/// clamping, so the result can exceed `[-1, 1]`.
pub fn sum_points(waveforms: &[Vec<Point>]) -> Result<Vec<Point>, WaveformError> {
    let Some((first, rest)) = waveforms.split_first() else {
        return Ok(Vec::new());
    };

    if let Some(other) = rest.iter().find(|w| w.len() != first.len()) {
        return Err(InvalidArgument::MismatchedLengths {
            expected: first.len(),
            found: other.len(),
        }
        .into());
    }

    let mut sum = first.clone();
    for waveform in rest {
        for (acc, p) in sum.iter_mut().zip(waveform) {
            acc.y += p.y;
        }
    }
    Ok(sum)
}
