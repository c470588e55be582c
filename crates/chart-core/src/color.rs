// File: crates/chart-core/src/color.rs
// Summary: Color values, the default palette, and the color fallback policy for series and points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::spec::{SeriesColor, SeriesSpec};

/// Fixed palette for uncolored wedges (by row) and uncolored series (by position).
pub const DEFAULT_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// Fallback when a palette is empty, and for colors a raster backend cannot parse.
pub const DEFAULT_TONE: &str = "#8884D8";

/// A color as handed to the host renderer. Kept as the caller wrote it
/// (hex, named CSS color, `hsl(..)`); only hex literals can be rasterized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn to_rgba(&self) -> Result<Rgba> {
        let invalid = || ChartError::InvalidColor(self.0.clone());
        let hex = self.0.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let v = ch.to_digit(16).ok_or_else(invalid)? as u8;
                    out[i] = v * 17;
                }
                Ok(Rgba::new(out[0], out[1], out[2], 255))
            }
            6 => Ok(Rgba::new(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, 255)),
            8 => Ok(Rgba::new(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, byte(&hex[6..8])?)),
            _ => Err(invalid()),
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self { Self::new(value) }
}

impl From<String> for Color {
    fn from(value: String) -> Self { Self(value) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// 8-bit RGBA, straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }
}

/// The default palette as owned colors.
pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.iter().map(|c| Color::from(*c)).collect()
}

pub fn default_tone() -> Color { Color::from(DEFAULT_TONE) }

/// Palette entry at `index`, wrapping modulo the palette length.
/// An empty palette yields the default tone.
pub fn palette_color(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return default_tone();
    }
    palette[index % palette.len()].clone()
}

/// Color for a whole series (bar/line/area marks) at `series_index`.
///
/// A single color is used as-is. A per-point sequence contributes its first
/// entry. Otherwise the series takes one uniform palette tone, cycling by
/// series position.
pub fn resolve_series_color(series: &SeriesSpec, series_index: usize, palette: &[Color]) -> Color {
    match &series.color {
        Some(SeriesColor::Single(c)) => c.clone(),
        Some(SeriesColor::PerPoint(colors)) if !colors.is_empty() => colors[0].clone(),
        _ => palette_color(palette, series_index),
    }
}

/// Color for the point at `row_index` of `series` (pie/doughnut wedges).
///
/// Per-point colors wrap modulo their length; a single color paints every
/// point; no color (or an empty sequence) falls back to `palette`.
pub fn resolve_color(series: &SeriesSpec, row_index: usize, palette: &[Color]) -> Color {
    match &series.color {
        Some(SeriesColor::PerPoint(colors)) if !colors.is_empty() => {
            colors[row_index % colors.len()].clone()
        }
        Some(SeriesColor::Single(c)) => c.clone(),
        _ => palette_color(palette, row_index),
    }
}
