//! SVG document output

use std::fmt;

use super::style::Style;
use crate::path::PathDescription;

/// A rendered waveform: the drawing surface size plus its path
///
/// `Display` writes a standalone SVG document. Overflow is left visible
/// so strokes at full amplitude aren't cut off at the edges.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveformSvg {
    /// Surface width in pixels
    pub width: f32,
    /// Surface height in pixels, derived from the width
    pub height: f32,
    /// Line geometry
    pub path: PathDescription,
    /// Stroke attributes
    pub style: Style,
}

impl WaveformSvg {
    /// Just the `d` attribute value
    pub fn path_data(&self) -> String {
        self.path.to_string()
    }
}

impl fmt::Display for WaveformSvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="overflow: visible">"#,
            self.width, self.height
        )?;
        write!(
            f,
            r#"<path stroke="{}" stroke-width="{}""#,
            escape_attr(&self.style.color),
            self.style.stroke_width
        )?;
        if let Some(cap) = self.style.stroke_linecap {
            write!(f, r#" stroke-linecap="{}""#, cap.name())?;
        }
        write!(f, r#" fill="none" d="{}"/></svg>"#, self.path)
    }
}

/// Escape a value for use inside a double-quoted XML attribute
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
