//! Path builder - converts waveform points into SVG path data
//!
//! Points come in with normalized `y` values in `[-1, 1]` and pixel `x`
//! values. The builder maps `y` onto the drawing height so that `0` sits
//! on the vertical centre and positive values draw upwards:
//!
//! ```text
//! pixel_y = height / 2 - y * height / 2
//! ```

use std::fmt;

use crate::waveform::Point;

/// A single drawing command, in pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Move the pen without drawing (`M`)
    MoveTo { x: f32, y: f32 },
    /// Straight line to a point (`L`)
    LineTo { x: f32, y: f32 },
    /// Quadratic Bézier curve through a control point (`Q`)
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
}

impl PathCommand {
    /// End point of the command
    pub fn end(&self) -> (f32, f32) {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::QuadTo { x, y, .. } => (x, y),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M {} {}", coord(x), coord(y)),
            PathCommand::LineTo { x, y } => write!(f, "L {} {}", coord(x), coord(y)),
            PathCommand::QuadTo { cx, cy, x, y } => write!(
                f,
                "Q {} {} {} {}",
                coord(cx),
                coord(cy),
                coord(x),
                coord(y)
            ),
        }
    }
}

/// Round to two decimals for output; `+ 0.0` turns `-0` into `0`
fn coord(v: f32) -> f32 {
    (v * 100.0).round() / 100.0 + 0.0
}

/// An ordered list of drawing commands
///
/// `Display` renders it as SVG path data, suitable for a `d` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathDescription {
    commands: Vec<PathCommand>,
}

impl PathDescription {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Get the commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Get the number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path draws nothing
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Map a waveform point into pixel space
fn to_pixel(point: &Point, height: f32) -> (f32, f32) {
    let half = height / 2.0;
    (point.x, half - point.y * half)
}

/// Build a polyline through the points
///
/// The first point becomes a `MoveTo`, every following point a `LineTo`,
/// in input order. No points gives an empty path; a single point gives a
/// lone `MoveTo`.
pub fn build_path(points: &[Point], height: f32) -> PathDescription {
    let commands = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (x, y) = to_pixel(p, height);
            if i == 0 {
                PathCommand::MoveTo { x, y }
            } else {
                PathCommand::LineTo { x, y }
            }
        })
        .collect();

    PathDescription { commands }
}

/// Build a smoothed path through the points
///
/// Each interior point is used as the control point of a quadratic curve
/// running between the midpoints of its neighbouring segments. The path
/// still starts on the first point and ends on the last one.
///
/// With fewer than 3 points there is nothing to smooth and the result is
/// the same as [`build_path`].
pub fn build_smooth_path(points: &[Point], height: f32) -> PathDescription {
    if points.len() < 3 {
        return build_path(points, height);
    }

    let pixels: Vec<(f32, f32)> = points.iter().map(|p| to_pixel(p, height)).collect();
    let midpoint = |a: (f32, f32), b: (f32, f32)| ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);

    let mut path = PathDescription::new();
    let (x, y) = pixels[0];
    path.push(PathCommand::MoveTo { x, y });

    let (x, y) = midpoint(pixels[0], pixels[1]);
    path.push(PathCommand::LineTo { x, y });

    for window in pixels.windows(3) {
        let (cx, cy) = window[1];
        let (x, y) = midpoint(window[1], window[2]);
        path.push(PathCommand::QuadTo { cx, cy, x, y });
    }

    let (x, y) = pixels[pixels.len() - 1];
    path.push(PathCommand::LineTo { x, y });

    path
}
