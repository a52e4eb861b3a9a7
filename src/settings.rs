use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{self, Interpolation, Linecap, Style, WaveformSvg};
use crate::waveform::{Point, WaveSource, WaveformError, WaveformParams};
use crate::{DEFAULT_WAVEFORM_AMPLITUDE, DEFAULT_WAVEFORM_NUM_OF_CYCLES, DEFAULT_WAVEFORM_SIZE};

/// Errors that can occur while reading or writing an options file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to access options file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the path to the settings file: `~/.config/wavepath/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("wavepath");
    path.push("settings.json");
    path
}

/// The loose options record for one waveform drawing.
///
/// Serialized as JSON with camelCase keys (`numOfCycles`, `strokeWidth`, ...).
/// Fields use `#[serde(default)]` so any subset of keys is accepted.
/// Exactly one of `shape` and `points` has to be set; that is checked
/// when the record is turned into [`WaveformParams`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveformOptions {
    // Source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,

    // Geometry
    pub size: f32,
    pub num_of_cycles: f32,
    pub amplitude: f32,
    pub offset: f32,

    // Stroke
    pub color: String,
    pub stroke_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_linecap: Option<Linecap>,
    pub interpolation: Interpolation,
}

impl Default for WaveformOptions {
    fn default() -> Self {
        let style = Style::default();
        Self {
            shape: None,
            points: None,

            size: DEFAULT_WAVEFORM_SIZE,
            num_of_cycles: DEFAULT_WAVEFORM_NUM_OF_CYCLES,
            amplitude: DEFAULT_WAVEFORM_AMPLITUDE,
            offset: 0.0,

            color: style.color,
            stroke_width: style.stroke_width,
            stroke_linecap: style.stroke_linecap,
            interpolation: style.interpolation,
        }
    }
}

impl WaveformOptions {
    /// Default options drawing the given shape tag
    pub fn with_shape(shape: &str) -> Self {
        Self {
            shape: Some(shape.to_string()),
            ..Self::default()
        }
    }

    /// Default options plotting the given points
    pub fn with_points(points: Vec<Point>) -> Self {
        Self {
            points: Some(points),
            ..Self::default()
        }
    }

    /// Parse options from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Write options to a JSON file, creating parent directories as needed
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load the settings file, falling back to a default sine on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(options) => {
                log::info!("Loaded settings from {}", path.display());
                options
            }
            Err(SettingsError::IoError(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::with_shape("sine")
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::with_shape("sine")
            }
        }
    }

    /// Save to the settings file, logging any failure.
    pub fn save(&self) {
        let path = settings_path();
        match self.save_to(&path) {
            Ok(()) => log::info!("Saved settings to {}", path.display()),
            Err(e) => log::warn!("Failed to write settings: {}", e),
        }
    }

    /// Validate the record into waveform parameters
    pub fn to_params(&self) -> Result<WaveformParams, WaveformError> {
        let source = WaveSource::from_parts(self.shape.as_deref(), self.points.clone())?;
        Ok(WaveformParams::new(source)
            .size(self.size)
            .cycles(self.num_of_cycles)
            .amplitude(self.amplitude)
            .offset(self.offset))
    }

    /// Stroke attributes of the record
    pub fn style(&self) -> Style {
        Style {
            color: self.color.clone(),
            stroke_width: self.stroke_width,
            stroke_linecap: self.stroke_linecap,
            interpolation: self.interpolation,
        }
    }

    /// Validate and render in one step
    pub fn render(&self) -> Result<WaveformSvg, WaveformError> {
        let params = self.to_params()?;
        Ok(render::render(&params, &self.style()))
    }
}
