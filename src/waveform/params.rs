//! Waveform parameters
//!
//! `WaveformParams` is the validated form of a drawing request. Which
//! generator runs is decided by `WaveSource`, so a request always has
//! exactly one of a shape or a point list.

use crate::{
    height_for_width, DEFAULT_WAVEFORM_AMPLITUDE, DEFAULT_WAVEFORM_NUM_OF_CYCLES,
    DEFAULT_WAVEFORM_SIZE,
};

use super::{InvalidArgument, Point, WaveformShape};

/// Where the points of a drawing come from
#[derive(Clone, Debug, PartialEq)]
pub enum WaveSource {
    /// Generate points from a periodic shape
    Shape(WaveformShape),
    /// Plot these points as-is (eg. the result of waveform addition)
    Points(Vec<Point>),
}

impl WaveSource {
    /// Build a source from the loose `shape` / `points` pair of an options record
    ///
    /// Exactly one of the two must be present, and a shape tag must name
    /// a known shape.
    pub fn from_parts(
        shape: Option<&str>,
        points: Option<Vec<Point>>,
    ) -> Result<Self, InvalidArgument> {
        match (shape, points) {
            (Some(tag), None) => Ok(WaveSource::Shape(tag.parse()?)),
            (None, Some(points)) => Ok(WaveSource::Points(points)),
            (Some(_), Some(_)) => Err(InvalidArgument::ConflictingSources),
            (None, None) => Err(InvalidArgument::MissingSource),
        }
    }
}

impl From<WaveformShape> for WaveSource {
    fn from(shape: WaveformShape) -> Self {
        WaveSource::Shape(shape)
    }
}

impl From<Vec<Point>> for WaveSource {
    fn from(points: Vec<Point>) -> Self {
        WaveSource::Points(points)
    }
}

/// Parameters for one waveform drawing
///
/// Numeric fields are never rejected. Out-of-range values are folded back
/// into range when points are generated:
/// - `amplitude` is clamped to `[0, 1]`
/// - `num_of_cycles` below zero counts as zero
/// - `offset` wraps modulo 100
#[derive(Clone, Debug, PartialEq)]
pub struct WaveformParams {
    /// Shape to generate, or points to pass through
    pub source: WaveSource,
    /// Drawing width in pixels; the height is derived from it
    pub size: f32,
    /// How many periods to squeeze into the width (default 1)
    pub num_of_cycles: f32,
    /// Peak level, 0 to 1 (default 0.95)
    pub amplitude: f32,
    /// Phase shift as a percentage of one period, 0 to 99 (default 0)
    pub offset: f32,
}

impl WaveformParams {
    /// Create parameters with default size, cycles, amplitude and offset
    pub fn new(source: impl Into<WaveSource>) -> Self {
        Self {
            source: source.into(),
            size: DEFAULT_WAVEFORM_SIZE,
            num_of_cycles: DEFAULT_WAVEFORM_NUM_OF_CYCLES,
            amplitude: DEFAULT_WAVEFORM_AMPLITUDE,
            offset: 0.0,
        }
    }

    /// Parameters for a generated shape
    pub fn shape(shape: WaveformShape) -> Self {
        Self::new(shape)
    }

    /// Parameters that plot explicit points
    pub fn points(points: Vec<Point>) -> Self {
        Self::new(points)
    }

    /// Set the drawing width
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the number of cycles
    pub fn cycles(mut self, num_of_cycles: f32) -> Self {
        self.num_of_cycles = num_of_cycles;
        self
    }

    /// Set the amplitude
    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the phase offset
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Width in pixels, never negative
    pub fn width(&self) -> f32 {
        normalize_width(self.size)
    }

    /// Height in pixels, derived from the width
    pub fn height(&self) -> f32 {
        height_for_width(self.width())
    }
}

pub(crate) fn normalize_width(width: f32) -> f32 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}

pub(crate) fn normalize_amplitude(amplitude: f32) -> f32 {
    if amplitude.is_nan() { 0.0 } else { amplitude.clamp(0.0, 1.0) }
}

pub(crate) fn normalize_cycles(num_of_cycles: f32) -> f32 {
    if num_of_cycles.is_finite() { num_of_cycles.max(0.0) } else { 0.0 }
}

/// Offset folded into `[0, 100)`
pub(crate) fn wrap_offset(offset: f32) -> f32 {
    if !offset.is_finite() {
        return 0.0;
    }
    let wrapped = offset.rem_euclid(100.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 100.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = WaveformParams::shape(WaveformShape::Sine);
        assert_eq!(params.size, 200.0);
        assert_eq!(params.num_of_cycles, 1.0);
        assert_eq!(params.amplitude, 0.95);
        assert_eq!(params.offset, 0.0);
        assert_eq!(params.width(), 200.0);
        assert_eq!(params.height(), 40.0);
    }

    #[test]
    fn test_builder() {
        let params = WaveformParams::shape(WaveformShape::Square)
            .size(300.0)
            .cycles(3.0)
            .amplitude(0.5)
            .offset(25.0);
        assert_eq!(params.source, WaveSource::Shape(WaveformShape::Square));
        assert_eq!(params.num_of_cycles, 3.0);
        assert_eq!(params.amplitude, 0.5);
        assert_eq!(params.offset, 25.0);
        assert_eq!(params.height(), 60.0);
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            WaveSource::from_parts(Some("triangle"), None),
            Ok(WaveSource::Shape(WaveformShape::Triangle))
        );

        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(
            WaveSource::from_parts(None, Some(points.clone())),
            Ok(WaveSource::Points(points.clone()))
        );

        assert_eq!(
            WaveSource::from_parts(None, None),
            Err(InvalidArgument::MissingSource)
        );
        assert_eq!(
            WaveSource::from_parts(Some("sine"), Some(points)),
            Err(InvalidArgument::ConflictingSources)
        );
        assert_eq!(
            WaveSource::from_parts(Some("noise"), None),
            Err(InvalidArgument::UnknownShape("noise".to_string()))
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_amplitude(1.5), 1.0);
        assert_eq!(normalize_amplitude(-0.2), 0.0);
        assert_eq!(normalize_amplitude(f32::NAN), 0.0);
        assert_eq!(normalize_cycles(-2.0), 0.0);
        assert_eq!(normalize_cycles(f32::INFINITY), 0.0);
        assert_eq!(normalize_width(-10.0), 0.0);
        assert_eq!(normalize_width(f32::NAN), 0.0);
    }

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(0.0), 0.0);
        assert_eq!(wrap_offset(42.0), 42.0);
        assert_eq!(wrap_offset(142.0), 42.0);
        assert_eq!(wrap_offset(-58.0), 42.0);
        assert_eq!(wrap_offset(100.0), 0.0);
        assert_eq!(wrap_offset(f32::NAN), 0.0);
        assert!(wrap_offset(-1e-9) < 100.0);
    }
}
