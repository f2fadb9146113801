//! YAML configuration for the drawing surface.
//!
//! Precedence: CLI > file > defaults. Colors are kept as strings here and
//! resolved by [`Config::palette`], so a bad color is reported with its name.

use crate::color::Rgba;
use crate::coord::YAxis;
use crate::error::{Error, Result};
use crate::input::DrawMode;
use crate::sketch::{Palette, Sketch};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Surface and drawing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Surface width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Direction in which model y grows (`down` or `up`).
    #[serde(default)]
    pub y_axis: YAxis,

    /// Draw the two axes through the center.
    #[serde(default = "default_axes")]
    pub axes: bool,

    /// Mode used when a command gives none.
    #[serde(default)]
    pub mode: DrawMode,

    /// Surface background color.
    #[serde(default = "default_background")]
    pub background: String,

    /// Color of plotted cells.
    #[serde(default = "default_ink")]
    pub ink: String,

    /// Color of the vertical axis.
    #[serde(default = "default_vertical_axis")]
    pub vertical_axis: String,

    /// Color of the horizontal axis.
    #[serde(default = "default_horizontal_axis")]
    pub horizontal_axis: String,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_axes() -> bool {
    true
}
fn default_background() -> String {
    "white".to_string()
}
fn default_ink() -> String {
    "black".to_string()
}
fn default_vertical_axis() -> String {
    "red".to_string()
}
fn default_horizontal_axis() -> String {
    "blue".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            y_axis: YAxis::default(),
            axes: default_axes(),
            mode: DrawMode::default(),
            background: default_background(),
            ink: default_ink(),
            vertical_axis: default_vertical_axis(),
            horizontal_axis: default_horizontal_axis(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/trueno-raster/config.yaml`, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trueno-raster").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::ConfigNotFound(_)) => Self::default(),
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Resolve the color strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] naming the first bad entry.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            background: Rgba::parse(&self.background)?,
            ink: Rgba::parse(&self.ink)?,
            vertical_axis: Rgba::parse(&self.vertical_axis)?,
            horizontal_axis: Rgba::parse(&self.horizontal_axis)?,
        })
    }

    /// Build a cleared surface from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions or unknown colors.
    pub fn sketch(&self) -> Result<Sketch> {
        Ok(Sketch::new(self.width, self.height)?
            .with_y_axis(self.y_axis)
            .with_axes(self.axes)
            .with_palette(self.palette()?))
    }
}
