//! SVG import - load a drawn waveform as a list of points
//!
//! This module handles:
//! - Loading SVG files from disk
//! - Parsing SVG paths using usvg
//! - Converting Bézier curves to point sequences
//! - Mapping coordinates back into waveform space (pixel `x`, `y` in `[-1, 1]`)
//!
//! The result can be plotted directly with [`WaveformParams::points`], so
//! hand-drawn waveforms go through the same path builder as generated ones.
//!
//! [`WaveformParams::points`]: crate::WaveformParams::points

use std::path::Path as FilePath;

use thiserror::Error;

use crate::waveform::Point;

/// Errors that can occur during SVG import
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse SVG: {0}")]
    ParseError(String),

    #[error("SVG contains no paths")]
    NoPaths,
}

/// Options for SVG import
pub struct SvgOptions {
    /// Number of points to sample per curve segment
    pub curve_samples: usize,
    /// Width to scale `x` to; the document width when unset
    pub width: Option<f32>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            curve_samples: 8,
            width: None,
        }
    }
}

/// Load waveform points from an SVG file
pub fn load(path: impl AsRef<FilePath>, options: &SvgOptions) -> Result<Vec<Point>, SvgError> {
    let path = path.as_ref();
    let svg_data = std::fs::read(path)?;
    log::debug!("Importing waveform from {}", path.display());
    points_from_data(&svg_data, options)
}

/// Parse waveform points from raw SVG data
///
/// Every path in the document is traced in order. The document's top
/// edge maps to `y = 1` and its bottom edge to `y = -1`, which undoes the
/// mapping applied by the path builder.
pub fn points_from_data(data: &[u8], options: &SvgOptions) -> Result<Vec<Point>, SvgError> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| SvgError::ParseError(e.to_string()))?;

    let size = tree.size();
    let doc_width = size.width();
    let doc_height = size.height();
    let scale_x = options.width.unwrap_or(doc_width) / doc_width;
    let half_height = doc_height / 2.0;

    let normalize = |x: f32, y: f32| -> Point {
        let ny = (half_height - y) / half_height;
        Point::new(x * scale_x, ny.clamp(-1.0, 1.0))
    };

    let mut points = Vec::new();
    collect_group(tree.root(), &normalize, options, &mut points);

    if points.is_empty() {
        return Err(SvgError::NoPaths);
    }

    log::debug!("Imported {} points from SVG", points.len());
    Ok(points)
}

/// Recursively collect points from all paths in a group
fn collect_group(
    group: &usvg::Group,
    normalize: &impl Fn(f32, f32) -> Point,
    options: &SvgOptions,
    points: &mut Vec<Point>,
) {
    for child in group.children() {
        match child {
            usvg::Node::Path(ref path) => collect_path(path, normalize, options, points),
            usvg::Node::Group(ref subgroup) => collect_group(subgroup, normalize, options, points),
            _ => {}
        }
    }
}

fn collect_path(
    path: &usvg::Path,
    normalize: &impl Fn(f32, f32) -> Point,
    options: &SvgOptions,
    points: &mut Vec<Point>,
) {
    let Some(data) = path.data().clone().transform(path.abs_transform()) else {
        log::warn!("Skipping SVG path with a degenerate transform");
        return;
    };

    let curve_samples = options.curve_samples.max(1);
    let mut current: Option<(f32, f32)> = None;
    let mut subpath_start: Option<(f32, f32)> = None;

    for segment in data.segments() {
        match segment {
            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                points.push(normalize(p.x, p.y));
                current = Some((p.x, p.y));
                subpath_start = current;
            }
            usvg::tiny_skia_path::PathSegment::LineTo(p) => {
                points.push(normalize(p.x, p.y));
                current = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::QuadTo(p1, p2) => {
                if let Some(start) = current {
                    let ctrl = (p1.x, p1.y);
                    let end = (p2.x, p2.y);
                    for i in 1..=curve_samples {
                        let t = i as f32 / curve_samples as f32;
                        let (x, y) = quadratic_bezier(start, ctrl, end, t);
                        points.push(normalize(x, y));
                    }
                    current = Some(end);
                }
            }
            usvg::tiny_skia_path::PathSegment::CubicTo(p1, p2, p3) => {
                if let Some(start) = current {
                    let ctrl1 = (p1.x, p1.y);
                    let ctrl2 = (p2.x, p2.y);
                    let end = (p3.x, p3.y);
                    for i in 1..=curve_samples {
                        let t = i as f32 / curve_samples as f32;
                        let (x, y) = cubic_bezier(start, ctrl1, ctrl2, end, t);
                        points.push(normalize(x, y));
                    }
                    current = Some(end);
                }
            }
            usvg::tiny_skia_path::PathSegment::Close => {
                // Draw back to the start of the subpath
                if let Some((x, y)) = subpath_start {
                    points.push(normalize(x, y));
                    current = subpath_start;
                }
            }
        }
    }
}

/// Evaluate a quadratic Bézier curve at parameter t
fn quadratic_bezier(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), t: f32) -> (f32, f32) {
    let t2 = t * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    let x = mt2 * p0.0 + 2.0 * mt * t * p1.0 + t2 * p2.0;
    let y = mt2 * p0.1 + 2.0 * mt * t * p1.1 + t2 * p2.1;

    (x, y)
}

/// Evaluate a cubic Bézier curve at parameter t
fn cubic_bezier(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    let x = mt3 * p0.0 + 3.0 * mt2 * t * p1.0 + 3.0 * mt * t2 * p2.0 + t3 * p3.0;
    let y = mt3 * p0.1 + 3.0 * mt2 * t * p1.1 + 3.0 * mt * t2 * p2.1 + t3 * p3.1;

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, Style};
    use crate::waveform::{points_for_shape, WaveformParams, WaveformShape, SAMPLE_COUNT};

    const LINE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="20">
        <path d="M 0 10 L 50 0 L 100 20" stroke="black" fill="none"/>
    </svg>"#;

    #[test]
    fn test_import_lines() {
        let points = points_from_data(LINE_SVG.as_bytes(), &SvgOptions::default()).unwrap();
        assert_eq!(points.len(), 3);

        let expected = [(0.0, 0.0), (50.0, 1.0), (100.0, -1.0)];
        for (p, (x, y)) in points.iter().zip(expected) {
            assert!((p.x - x).abs() < 0.001);
            assert!((p.y - y).abs() < 0.001);
        }
    }

    #[test]
    fn test_import_rescales_width() {
        let options = SvgOptions {
            width: Some(200.0),
            ..SvgOptions::default()
        };
        let points = points_from_data(LINE_SVG.as_bytes(), &options).unwrap();
        assert!((points[1].x - 100.0).abs() < 0.001);
        assert!((points[2].x - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_import_curves() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="20">
            <path d="M 0 10 Q 50 -10 100 10" stroke="black" fill="none"/>
        </svg>"#;
        let options = SvgOptions {
            curve_samples: 4,
            ..SvgOptions::default()
        };
        let points = points_from_data(svg.as_bytes(), &options).unwrap();
        assert_eq!(points.len(), 5);
        // The curve peaks halfway at y = 0 in document space
        assert!((points[2].x - 50.0).abs() < 0.001);
        assert!((points[2].y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_rendered_waveform_imports_back() {
        let params = WaveformParams::shape(WaveformShape::Sine).size(100.0).amplitude(1.0);
        let svg = render(&params, &Style::default()).to_string();

        let imported = points_from_data(svg.as_bytes(), &SvgOptions::default()).unwrap();
        let original = points_for_shape(WaveformShape::Sine, 1.0, 1.0, 100.0, 0.0);

        assert_eq!(imported.len(), SAMPLE_COUNT);
        for (a, b) in imported.iter().zip(&original) {
            assert!((a.x - b.x).abs() < 0.01);
            assert!((a.y - b.y).abs() < 0.01);
        }
    }

    #[test]
    fn test_no_paths() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="20"></svg>"#;
        assert!(matches!(
            points_from_data(svg.as_bytes(), &SvgOptions::default()),
            Err(SvgError::NoPaths)
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            points_from_data(b"not an svg", &SvgOptions::default()),
            Err(SvgError::ParseError(_))
        ));
    }

    #[test]
    fn test_quadratic_bezier() {
        let p0 = (0.0, 0.0);
        let p1 = (0.5, 1.0);
        let p2 = (1.0, 0.0);

        let (x, y) = quadratic_bezier(p0, p1, p2, 0.0);
        assert!(x.abs() < 0.001 && y.abs() < 0.001);

        let (x, y) = quadratic_bezier(p0, p1, p2, 0.5);
        assert!((x - 0.5).abs() < 0.001);
        assert!((y - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_cubic_bezier() {
        let p0 = (0.0, 0.0);
        let p1 = (0.33, 1.0);
        let p2 = (0.66, 1.0);
        let p3 = (1.0, 0.0);

        let (x, y) = cubic_bezier(p0, p1, p2, p3, 1.0);
        assert!((x - 1.0).abs() < 0.001);
        assert!(y.abs() < 0.001);
    }
}
