//! Configuration for sheet generation.

use crate::error::{Error, Result};
use crate::layout::Color;
use crate::writer::min_row_height;

/// A4 width in points.
pub const A4_WIDTH: f32 = 595.28;
/// A4 height in points.
pub const A4_HEIGHT: f32 = 841.89;
/// Distance kept free on every page edge.
pub const DEFAULT_MARGIN: f32 = 50.0;
/// Extra space reserved above the bottom margin before a page break.
pub const BOTTOM_RESERVE: f32 = 30.0;

/// Document configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Page width in points
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Margin on all four sides in points
    pub margin: f32,

    /// PDF version written to the header (e.g., "1.4")
    pub version: String,

    /// Whether to FlateDecode-compress content streams
    pub compress: bool,

    /// Accent color for the title and header rule
    pub accent: Color,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentConfig {
    /// Create new configuration with defaults (A4, 50pt margin, uncompressed).
    pub fn new() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin: DEFAULT_MARGIN,
            version: "1.4".to_string(),
            compress: false,
            accent: Color::ACCENT,
        }
    }

    /// Set the page size in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the accent color.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Width available between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Cursor position at the top of a fresh page.
    pub fn top(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Lowest cursor position content may reach before a page break.
    pub fn bottom_limit(&self) -> f32 {
        self.margin + BOTTOM_RESERVE
    }

    /// Check that the geometry leaves a drawable area.
    pub fn validate(&self) -> Result<()> {
        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "page size {}x{} must be positive",
                self.page_width, self.page_height
            )));
        }
        if !(self.margin >= 0.0) {
            return Err(Error::InvalidConfig(format!("margin {} must not be negative", self.margin)));
        }
        if self.content_width() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "margin {} leaves no content width",
                self.margin
            )));
        }
        if self.top() <= self.bottom_limit() {
            return Err(Error::InvalidConfig(format!(
                "margin {} leaves no content height",
                self.margin
            )));
        }
        if self.top() - self.bottom_limit() < min_row_height() {
            return Err(Error::InvalidConfig(format!(
                "page height {} leaves no room for a table row",
                self.page_height
            )));
        }
        Ok(())
    }
}
