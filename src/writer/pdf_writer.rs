//! PDF document writer.
//!
//! Assembles the object graph for a finished set of pages and serializes
//! it with header, body, cross-reference table and trailer.
//!
//! Object ids are handed out strictly in this order: the two font
//! dictionaries, a content stream followed by its page for every page, the
//! page tree, and finally the catalog. A page therefore always refers to
//! the content stream whose id is one less than its own.

use super::page_canvas::Page;
use super::font_manager::FontFace;
use super::object_serializer::ObjectSerializer;
use crate::config::DocumentConfig;
use crate::error::Result;
use crate::object::{Dictionary, Object, ObjectRef};
use std::io::Write;

/// Binary comment following the version line so transfer tools treat the
/// file as binary.
const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Round a point value to two decimals for dictionary output.
fn points(value: f32) -> f64 {
    (value as f64 * 100.0).round() / 100.0
}

/// Numbered object table and serializer for one document.
pub struct PdfWriter<'a> {
    config: &'a DocumentConfig,
    /// Registered objects; index `i` holds object id `i + 1`
    objects: Vec<Object>,
}

impl<'a> PdfWriter<'a> {
    /// Create a writer with an empty object table.
    pub fn new(config: &'a DocumentConfig) -> Self {
        Self {
            config,
            objects: Vec::new(),
        }
    }

    /// Number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Register an object under the next free id.
    fn register(&mut self, obj: Object) -> ObjectRef {
        self.objects.push(obj);
        ObjectRef::new(self.objects.len() as u32, 0)
    }

    /// Replace one entry of an already registered dictionary.
    fn patch(&mut self, target: ObjectRef, key: &str, value: Object) {
        if let Some(dict) = self
            .objects
            .get_mut(target.id as usize - 1)
            .and_then(Object::as_dict_mut)
        {
            dict.insert(key.to_string(), value);
        }
    }

    /// Register a page's content stream, compressing it when configured.
    fn register_content(&mut self, page: &Page) -> Result<ObjectRef> {
        let raw_content = page.content().build()?;

        let (content_bytes, is_compressed) = if self.config.compress {
            match compress_data(&raw_content) {
                Ok(compressed) => (compressed, true),
                Err(e) => {
                    log::warn!("Content stream compression failed, writing raw stream: {}", e);
                    (raw_content, false)
                },
            }
        } else {
            (raw_content, false)
        };

        let mut dict = Dictionary::new();
        dict.insert("Length".to_string(), Object::Integer(content_bytes.len() as i64));
        if is_compressed {
            dict.insert("Filter".to_string(), ObjectSerializer::name("FlateDecode"));
        }

        Ok(self.register(Object::Stream {
            dict,
            data: bytes::Bytes::from(content_bytes),
        }))
    }

    /// Build the object graph for `pages` and serialize the whole file.
    ///
    /// The object table is rebuilt from scratch on every call, so assembling
    /// the same pages twice yields identical bytes.
    pub fn assemble(&mut self, pages: &[Page]) -> Result<Vec<u8>> {
        self.objects.clear();

        let font_refs: Vec<ObjectRef> = FontFace::ALL
            .iter()
            .map(|face| {
                self.register(ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Font")),
                    ("Subtype", ObjectSerializer::name("Type1")),
                    ("BaseFont", ObjectSerializer::name(face.base_font())),
                    ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
                ]))
            })
            .collect();

        let font_resources = Object::Dictionary(
            FontFace::ALL
                .iter()
                .zip(&font_refs)
                .map(|(face, r)| (face.resource_name().to_string(), Object::Reference(*r)))
                .collect(),
        );

        let mut page_refs = Vec::with_capacity(pages.len());
        for page in pages {
            let content_ref = self.register_content(page)?;
            let page_ref = self.register(ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                // patched once the page tree exists
                ("Parent", Object::Null),
                (
                    "MediaBox",
                    ObjectSerializer::rect(
                        0.0,
                        0.0,
                        points(self.config.page_width),
                        points(self.config.page_height),
                    ),
                ),
                ("Contents", Object::Reference(content_ref)),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![("Font", font_resources.clone())]),
                ),
            ]));
            debug_assert_eq!(page_ref.id, content_ref.id + 1);
            page_refs.push(page_ref);
        }

        let pages_ref = self.register(ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            (
                "Kids",
                Object::Array(page_refs.iter().map(|r| Object::Reference(*r)).collect()),
            ),
            ("Count", ObjectSerializer::integer(page_refs.len() as i64)),
        ]));

        for page_ref in &page_refs {
            self.patch(*page_ref, "Parent", Object::Reference(pages_ref));
        }

        let catalog_ref = self.register(ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", Object::Reference(pages_ref)),
        ]));

        let output = self.serialize(catalog_ref)?;
        log::debug!(
            "Assembled PDF: {} pages, {} objects, {} bytes",
            page_refs.len(),
            self.objects.len(),
            output.len()
        );
        Ok(output)
    }

    /// Write header, objects, xref table and trailer.
    fn serialize(&self, catalog_ref: ObjectRef) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::new();
        let mut output = Vec::new();
        let mut offsets = Vec::with_capacity(self.objects.len());

        writeln!(output, "%PDF-{}", self.config.version)?;
        output.extend_from_slice(BINARY_MARKER);

        for (index, obj) in self.objects.iter().enumerate() {
            offsets.push(output.len());
            serializer.write_indirect(&mut output, index as u32 + 1, 0, obj)?;
        }

        let size = self.objects.len() + 1;
        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;

        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;
        for offset in &offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(size as i64)),
            ("Root", Object::Reference(catalog_ref)),
        ]);

        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        writeln!(output, "%%EOF")?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Color;
    use crate::writer::content_stream::ContentStreamBuilder;
    use crate::writer::font_manager::FontState;

    fn page_with_text(text: &str) -> Page {
        let mut builder = ContentStreamBuilder::new();
        builder.text_line(FontState::default(), 50.0, 700.0, Color::TEXT, text.as_bytes().to_vec());
        Page::from_content(builder)
    }

    fn assemble(config: &DocumentConfig, pages: &[Page]) -> Vec<u8> {
        PdfWriter::new(config).assemble(pages).unwrap()
    }

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn test_empty_document() {
        let config = DocumentConfig::default();
        let bytes = assemble(&config, &[]);
        let content = as_text(&bytes);

        assert!(content.starts_with("%PDF-1.4\n"));
        assert!(content.contains("3 0 obj\n<< /Type /Pages /Kids [] /Count 0 >>\nendobj\n"));
        assert!(content.contains("4 0 obj\n<< /Type /Catalog /Pages 3 0 R >>\nendobj\n"));
        assert!(content.contains("trailer\n<< /Size 5 /Root 4 0 R >>\n"));
        assert!(content.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_binary_marker_follows_header() {
        let config = DocumentConfig::default();
        let bytes = assemble(&config, &[]);
        assert_eq!(&bytes[..9], b"%PDF-1.4\n");
        assert_eq!(&bytes[9..15], BINARY_MARKER);
    }

    #[test]
    fn test_font_objects_come_first() {
        let config = DocumentConfig::default();
        let bytes = assemble(&config, &[page_with_text("x")]);
        let content = as_text(&bytes);

        assert!(content.contains(
            "1 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
        ));
        assert!(content.contains(
            "2 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
        ));
    }

    #[test]
    fn test_page_object_layout() {
        let config = DocumentConfig::default();
        let bytes = assemble(&config, &[page_with_text("a"), page_with_text("b")]);
        let content = as_text(&bytes);

        assert!(content.contains(
            "4 0 obj\n<< /Type /Page /Parent 7 0 R /MediaBox [0 0 595.28 841.89] /Contents 3 0 R \
             /Resources << /Font << /F1 1 0 R /F2 2 0 R >> >> >>"
        ));
        assert!(content.contains("/Parent 7 0 R /MediaBox [0 0 595.28 841.89] /Contents 5 0 R"));
        assert!(content.contains("7 0 obj\n<< /Type /Pages /Kids [4 0 R 6 0 R] /Count 2 >>"));
        assert!(content.contains("8 0 obj\n<< /Type /Catalog /Pages 7 0 R >>"));
        assert!(!content.contains("/Parent null"));
    }

    #[test]
    fn test_stream_length_matches_data() {
        let config = DocumentConfig::default();
        let page = page_with_text("Hello");
        let expected_len = page.content().build().unwrap().len();
        let bytes = assemble(&config, &[page]);
        let content = as_text(&bytes);

        assert!(content.contains(&format!("3 0 obj\n<< /Length {} >>\nstream\n", expected_len)));
    }

    fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let config = DocumentConfig::default();
        let bytes = assemble(&config, &[page_with_text("x")]);

        let xref_pos = find_bytes(&bytes, b"xref\n").unwrap();
        let tail = as_text(&bytes[xref_pos..]);
        let entries: Vec<&str> = tail.lines().skip(3).take(6).collect();
        assert_eq!(entries.len(), 6);
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let expected = format!("{} 0 obj\n", i + 1);
            assert_eq!(&bytes[offset..offset + expected.len()], expected.as_bytes());
        }

        let startxref: usize = tail
            .split("startxref\n")
            .nth(1)
            .unwrap()
            .lines()
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(startxref, xref_pos);
    }

    #[test]
    fn test_compressed_stream() {
        let config = DocumentConfig::default().with_compress(true);
        let page = page_with_text("Compressed text that repeats repeats repeats");
        let bytes = assemble(&config, &[page]);

        assert!(find_bytes(&bytes, b"/Filter /FlateDecode >>\nstream\n").is_some());
        // zlib stream header
        let data_start = find_bytes(&bytes, b"stream\n").unwrap() + b"stream\n".len();
        assert_eq!(bytes[data_start], 0x78);
        assert!(find_bytes(&bytes, b"(Compressed text").is_none());
    }

    #[test]
    fn test_assemble_twice_is_identical() {
        let config = DocumentConfig::default();
        let pages = [page_with_text("a"), page_with_text("b")];
        let mut writer = PdfWriter::new(&config);
        let first = writer.assemble(&pages).unwrap();
        assert_eq!(writer.object_count(), 8);
        let second = writer.assemble(&pages).unwrap();
        assert_eq!(writer.object_count(), 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_object_count() {
        let config = DocumentConfig::default();
        let mut writer = PdfWriter::new(&config);
        assert_eq!(writer.object_count(), 0);
        let r = writer.register(Object::Null);
        assert_eq!(r, ObjectRef::new(1, 0));
        assert_eq!(writer.object_count(), 1);
    }
}
