//! High-level document builder.
//!
//! Drives a [`PageCanvas`] while the document is open and hands the
//! finished pages to [`PdfWriter`] exactly once:
//!
//! ```ignore
//! use pdf_sheet::writer::DocumentBuilder;
//!
//! let mut builder = DocumentBuilder::new();
//! builder
//!     .set_accent_color("#16a34a")
//!     .add_header("Customer record", "Exported 2024-05-01")
//!     .add_table_row("Name", "Ada Lovelace")
//!     .add_table_row("Email", "ada@example.com")
//!     .add_footer("Confidential");
//!
//! let document = builder.finish()?;
//! std::fs::write("record.pdf", document.output())?;
//! ```

use super::page_canvas::PageCanvas;
use super::pdf_writer::PdfWriter;
use crate::config::DocumentConfig;
use crate::error::Result;
use crate::layout::Color;
use std::path::Path;

/// Builder for a single sheet document.
///
/// Drawing calls return `&mut Self` so they chain. [`finish`](Self::finish)
/// consumes the builder; the returned [`PdfDocument`] is immutable.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    canvas: PageCanvas,
}

impl DocumentBuilder {
    /// Create a builder for an A4 document with default margins.
    pub fn new() -> Self {
        Self {
            canvas: PageCanvas::new(DocumentConfig::default()),
        }
    }

    /// Create a builder with custom page geometry.
    pub fn with_config(config: DocumentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            canvas: PageCanvas::new(config),
        })
    }

    /// Configuration in effect.
    pub fn config(&self) -> &DocumentConfig {
        self.canvas.config()
    }

    /// Accent used for the next header.
    pub fn accent_color(&self) -> Color {
        self.canvas.accent()
    }

    /// Set the accent from a `#RRGGBB` string.
    ///
    /// Input that is not exactly six hex digits is ignored and the previous
    /// accent stays in effect.
    pub fn set_accent_color(&mut self, hex: &str) -> &mut Self {
        match Color::from_hex(hex) {
            Ok(color) => self.canvas.set_accent(color),
            Err(e) => log::warn!("Keeping accent {}: {}", self.canvas.accent().to_hex(), e),
        }
        self
    }

    /// Finalize the current page and continue on a new one.
    pub fn add_page(&mut self) -> &mut Self {
        self.canvas.add_page();
        self
    }

    /// Draw the title block. An empty `meta` omits the metadata line.
    pub fn add_header(&mut self, title: &str, meta: &str) -> &mut Self {
        self.canvas.add_header(title, meta);
        self
    }

    /// Draw a label/value row.
    pub fn add_table_row(&mut self, label: &str, value: &str) -> &mut Self {
        self.canvas.add_table_row(label, value);
        self
    }

    /// Draw the footer line.
    pub fn add_footer(&mut self, text: &str) -> &mut Self {
        self.canvas.add_footer(text);
        self
    }

    /// Number of pages the document would have if finished now.
    pub fn page_count(&self) -> usize {
        self.canvas.pages().len() + usize::from(self.canvas.has_open_content())
    }

    /// Finalize the open page and assemble the file.
    pub fn finish(self) -> Result<PdfDocument> {
        let config = self.canvas.config().clone();
        let pages = self.canvas.into_pages();

        let mut writer = PdfWriter::new(&config);
        let bytes = writer.assemble(&pages)?;

        Ok(PdfDocument {
            bytes,
            page_count: pages.len(),
            object_count: writer.object_count(),
        })
    }

    /// Finish and return the PDF bytes.
    pub fn output(self) -> Result<Vec<u8>> {
        Ok(self.finish()?.into_bytes())
    }

    /// Finish and write the PDF to a file.
    pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
        self.finish()?.save(path)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A finished PDF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    bytes: Vec<u8>,
    page_count: usize,
    object_count: usize,
}

impl PdfDocument {
    /// The complete file. Repeated calls return the same bytes.
    pub fn output(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of pages in the page tree.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of indirect objects, excluding the free object 0.
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// File size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for an assembled file; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take ownership of the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the file to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}
