use serde::{Deserialize, Serialize};

/// A 2D sample point on a waveform drawing
///
/// `x` is a pixel position along the width, `y` a normalized level,
/// typically in `[-1, 1]`, before it is scaled to the drawing height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
