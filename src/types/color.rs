//! Color representation for level layers

use crate::error::{LevelError, Result};
use std::fmt;

/// RGBA color with channels in `[0, 1]`
///
/// Level files store colors as 6-digit hex codes (`RRGGBB`); the alpha
/// channel is not serialized and is always 1.0 after parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from float channels
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Parse a 6-digit hex code, case-insensitive, without a leading `#`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || LevelError::InvalidColor(hex.to_string());

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// 8-bit RGB channels, rounded and clamped
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Uppercase `RRGGBB` hex code
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Multiply channel-wise by another color
    pub fn scale(&self, factor: Color) -> Color {
        Color::rgba(
            self.r * factor.r,
            self.g * factor.g,
            self.b * factor.b,
            self.a * factor.a,
        )
    }

    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
