//! PDF writing module for generating sheet documents.
//!
//! ## Architecture
//!
//! ```text
//! header / table rows / footer
//!     ↓
//! [DocumentBuilder] (open document, chained drawing calls)
//!     ↓
//! [PageCanvas] (layout cursor, pagination, finalized pages)
//!     ↓
//! [ContentStreamBuilder] (operators → content stream bytes)
//!     ↓
//! [PdfWriter] (object graph, xref table, trailer)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```

mod content_stream;
mod document_builder;
mod font_manager;
mod object_serializer;
mod page_canvas;
mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use document_builder::{DocumentBuilder, PdfDocument};
pub use font_manager::{FontFace, FontState, LINE_HEIGHT_FACTOR};
pub use object_serializer::ObjectSerializer;
pub use page_canvas::{Page, PageCanvas};
pub(crate) use page_canvas::min_row_height;
pub use pdf_writer::PdfWriter;
