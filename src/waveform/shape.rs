//! Waveform shapes - the periodic functions a drawing can be made of

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidArgument;

/// Periodic waveform shapes
///
/// Each shape is a function over one period, `phase` in `[0, 1)`,
/// returning a value in `[-1, 1]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveformShape {
    /// Smooth sine wave
    Sine,
    /// Abrupt square wave, high for the first half of the period
    Square,
    /// Linear triangle wave, starting at zero and rising
    Triangle,
    /// Rising sawtooth with a sharp reset
    Sawtooth,
}

impl WaveformShape {
    /// Get all waveform shapes
    pub fn all() -> &'static [WaveformShape] {
        &[
            WaveformShape::Sine,
            WaveformShape::Square,
            WaveformShape::Triangle,
            WaveformShape::Sawtooth,
        ]
    }

    /// The tag used for this shape in options files
    pub fn name(&self) -> &'static str {
        match self {
            WaveformShape::Sine => "sine",
            WaveformShape::Square => "square",
            WaveformShape::Triangle => "triangle",
            WaveformShape::Sawtooth => "sawtooth",
        }
    }

    /// Sample the waveform at phase (0.0 to 1.0)
    /// Returns value in range -1.0 to 1.0
    pub fn sample(&self, phase: f32) -> f32 {
        match self {
            WaveformShape::Sine => (phase * TAU).sin(),

            WaveformShape::Square => {
                if phase < 0.5 { 1.0 } else { -1.0 }
            }

            WaveformShape::Triangle => {
                let p = phase * 4.0;
                if p < 1.0 {
                    p
                } else if p < 3.0 {
                    2.0 - p
                } else {
                    p - 4.0
                }
            }

            WaveformShape::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

impl fmt::Display for WaveformShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformShape {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaveformShape::all()
            .iter()
            .copied()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| InvalidArgument::UnknownShape(s.to_string()))
    }
}
