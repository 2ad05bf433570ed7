//! Chart geometry and styling.
//!
//! Defaults reproduce the 700x400 chart with a 50px margin. Every field is
//! optional in JSON so a config file only needs the values it overrides.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NarrativeError;

/// An sRGB color parsed from `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn parse_hex(s: &str) -> Option<Rgb> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1).
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse_hex(&value).ok_or_else(|| format!("expected #rrggbb color, got {value:?}"))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Size, timing and styling for a narrative chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width of the whole SVG area in pixels
    pub width: f64,
    /// Height of the whole SVG area in pixels
    pub height: f64,
    /// Margin on every side of the plot rectangle
    pub margin: f64,
    /// Inner/outer padding of the team band scale
    pub band_padding: f64,
    /// Duration of every page transition
    pub transition_ms: u64,
    /// Tooltip offset from the pointer
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
    /// Circle radius range for exit velocity
    pub min_radius: f64,
    pub max_radius: f64,
    /// Color ramp for pitch velocity (slowest to fastest)
    pub low_color: Rgb,
    pub high_color: Rgb,
    /// Directory holding `{TEAM}.svg` logos
    pub image_dir: String,
    /// Offset of a callout label from its anchor
    pub callout_dx: f64,
    pub callout_dy: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 400.0,
            margin: 50.0,
            band_padding: 0.25,
            transition_ms: 1000,
            tooltip_offset_x: 0.0,
            tooltip_offset_y: -74.0,
            min_radius: 3.0,
            max_radius: 12.0,
            low_color: Rgb::new(0x45, 0x75, 0xb4),
            high_color: Rgb::new(0xd7, 0x30, 0x27),
            image_dir: "../img".to_string(),
            callout_dx: 30.0,
            callout_dy: -30.0,
        }
    }
}

impl ChartConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, NarrativeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Width of the plot rectangle inside the margins.
    pub fn chart_width(&self) -> f64 {
        (self.width - self.margin * 2.0).max(0.0)
    }

    /// Height of the plot rectangle inside the margins.
    pub fn chart_height(&self) -> f64 {
        (self.height - self.margin * 2.0).max(0.0)
    }
}
