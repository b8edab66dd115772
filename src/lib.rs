// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]

//! # PDF Sheet
//!
//! Single-purpose PDF writer for "record sheet" documents: a title block, a
//! two-column label/value table and a footer line, on as many A4 pages as
//! the table needs.
//!
//! ## Core Features
//!
//! - **No dependencies on fonts or images**: uses the Base-14 Helvetica faces
//!   with WinAnsiEncoding, so output opens in any viewer
//! - **Automatic pagination**: blocks that do not fit move to a fresh page
//! - **Lossy UTF-8 input**: Latin-1 text is transcoded, everything else
//!   becomes `?`
//! - **Deterministic output**: the same calls always produce the same bytes
//! - **Optional compression**: FlateDecode content streams
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_sheet::DocumentBuilder;
//!
//! # fn main() -> pdf_sheet::Result<()> {
//! let mut builder = DocumentBuilder::new();
//! builder
//!     .add_header("Customer record", "Exported 2024-05-01")
//!     .add_table_row("Name", "Ada Lovelace")
//!     .add_table_row("Notes", "First line\nSecond line")
//!     .add_footer("Confidential");
//!
//! let document = builder.finish()?;
//! document.save("record.pdf")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Object model
pub mod object;

// Text encoding and measurement
pub mod fonts;
pub mod layout;

// PDF writing
pub mod writer;

// JSON sheet descriptions
pub mod sheet;

// Re-exports
pub use config::DocumentConfig;
pub use error::{Error, Result};
pub use layout::Color;
pub use sheet::{Sheet, SheetRow};
pub use writer::{DocumentBuilder, PdfDocument};
