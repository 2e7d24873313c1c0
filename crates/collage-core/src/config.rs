//! Configuration surface for a collage render pass.
//!
//! The configuration is owned by the surrounding application and read-only to
//! the core. It is immutable per render pass: the UI replaces the whole value
//! when the user changes a setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Aspect ratio string is not of the form "W:H" with positive numbers.
    #[error("Invalid aspect ratio: {0:?}")]
    InvalidAspectRatio(String),

    /// Color string is not a #rgb or #rrggbb hex color.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Canvas aspect ratio, parsed from the "W:H" form used by the UI
/// (e.g. "16:9", "4:3", "1:1", "9:16").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Width term of the ratio (positive).
    pub width: f64,
    /// Height term of the ratio (positive).
    pub height: f64,
}

impl AspectRatio {
    /// Create an aspect ratio from its two terms.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAspectRatio` if either term is not a
    /// positive finite number.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidAspectRatio(format!(
                "{width}:{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 9.0,
        }
    }
}

impl FromStr for AspectRatio {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidAspectRatio(s.to_string());
        let (w, h) = s.split_once(':').ok_or_else(invalid)?;
        let width: f64 = w.trim().parse().map_err(|_| invalid())?;
        let height: f64 = h.trim().parse().map_err(|_| invalid())?;
        Self::new(width, height).map_err(|_| invalid())
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// An opaque RGB color, parsed from the hex form the color picker emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color as an RGB byte triple.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;

        let channel = |value: &str| u8::from_str_radix(value, 16).map_err(|_| invalid());

        match hex.len() {
            // #rgb shorthand: each digit doubles (e.g. #f0a -> #ff00aa)
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Full configuration for a collage: cell count, canvas proportions and the
/// shared styling knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollageConfig {
    /// Number of image cells (1 to 9).
    pub cell_count: u32,
    /// Output canvas proportions.
    pub aspect_ratio: AspectRatio,
    /// Uniform padding around and between cells, in pixels.
    pub padding: f64,
    /// Corner radius applied to every cell, in pixels.
    pub corner_radius: f64,
    /// Canvas background fill.
    pub background: Color,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            cell_count: 3,
            aspect_ratio: AspectRatio::default(),
            padding: 10.0,
            corner_radius: 15.0,
            background: Color::WHITE,
        }
    }
}
