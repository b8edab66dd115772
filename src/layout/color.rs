//! RGB colors and the fixed sheet palette.

use crate::error::{Error, Result};

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Default accent (#2563eb).
    pub const ACCENT: Color = Color::new(0.145, 0.388, 0.921);
    /// Label cell background (#f9fafb).
    pub const BACKGROUND: Color = Color::new(0.976, 0.98, 0.984);
    /// Row separators and footer rule (#e5e7eb).
    pub const BORDER: Color = Color::new(0.898, 0.906, 0.922);
    /// Body text (#1f2937).
    pub const TEXT: Color = Color::new(0.122, 0.161, 0.216);
    /// Header meta line and footer text (#9ca3af).
    pub const MUTED: Color = Color::new(0.612, 0.639, 0.682);

    /// Create a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_sheet::layout::Color;
    ///
    /// let black = Color::new(0.0, 0.0, 0.0);
    /// assert_eq!(black, Color::black());
    /// ```
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a black color.
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Parse a `RRGGBB` string with an optional leading `#`.
    ///
    /// Each channel is scaled to `0.0..=1.0` by dividing by 255.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as `#rrggbb`, rounding each channel to the nearest byte.
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::ACCENT
    }
}
