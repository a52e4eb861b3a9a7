//! Stroke styling for rendered waveforms
//!
//! None of this affects the geometry; it is carried through to the SVG
//! attributes untouched.

use serde::{Deserialize, Serialize};

/// How the ends of the stroke are drawn (`stroke-linecap`)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linecap {
    Butt,
    Round,
    Square,
}

impl Linecap {
    /// SVG attribute value
    pub fn name(&self) -> &'static str {
        match self {
            Linecap::Butt => "butt",
            Linecap::Round => "round",
            Linecap::Square => "square",
        }
    }
}

/// How consecutive points are joined
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Straight segments between samples
    #[default]
    Linear,
    /// Quadratic curves through segment midpoints
    Smooth,
}

/// Display settings for a waveform line
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Line color, any SVG paint value
    pub color: String,

    /// Line thickness in pixels
    pub stroke_width: f32,

    /// Line ends; left to the SVG default when unset
    pub stroke_linecap: Option<Linecap>,

    /// Straight or smoothed segments
    pub interpolation: Interpolation,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            stroke_width: 1.0,
            stroke_linecap: None,
            interpolation: Interpolation::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = Style::default();
        assert_eq!(style.color, "black");
        assert_eq!(style.stroke_width, 1.0);
        assert_eq!(style.stroke_linecap, None);
        assert_eq!(style.interpolation, Interpolation::Linear);
    }

    #[test]
    fn test_linecap_json() {
        let cap: Linecap = serde_json::from_str(r#""round""#).unwrap();
        assert_eq!(cap, Linecap::Round);
        assert_eq!(cap.name(), "round");
        assert!(serde_json::from_str::<Linecap>(r#""pointy""#).is_err());
    }
}
