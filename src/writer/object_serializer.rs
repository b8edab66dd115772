//! PDF object serialization.
//!
//! Serializes PDF objects to their byte representation according to
//! PDF specification ISO 32000-1:2008, Section 7.3.

use crate::object::{Dictionary, Object};
use std::io::Write;

/// Serializer for PDF objects.
///
/// Dictionaries are written on one line in insertion order:
/// `<< /Type /Page /Parent 5 0 R >>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    /// Create a new object serializer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize an object to bytes.
    pub fn serialize(&self, obj: &Object) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_object(&mut buf, obj)?;
        Ok(buf)
    }

    /// Serialize an object to a string (for debugging and tests).
    pub fn serialize_to_string(&self, obj: &Object) -> std::io::Result<String> {
        Ok(String::from_utf8_lossy(&self.serialize(obj)?).into_owned())
    }

    /// Write an indirect object definition.
    ///
    /// Format: `{id} {gen} obj\n{object}\nendobj\n`
    pub fn write_indirect<W: Write>(
        &self,
        w: &mut W,
        id: u32,
        gen: u16,
        obj: &Object,
    ) -> std::io::Result<()> {
        writeln!(w, "{} {} obj", id, gen)?;
        self.write_object(w, obj)?;
        write!(w, "\nendobj\n")
    }

    /// Write an object to a buffer.
    pub fn write_object<W: Write>(&self, w: &mut W, obj: &Object) -> std::io::Result<()> {
        match obj {
            Object::Null => write!(w, "null"),
            Object::Integer(i) => write!(w, "{}", i),
            Object::Real(r) => self.write_real(w, *r),
            Object::Name(n) => self.write_name(w, n),
            Object::Array(arr) => self.write_array(w, arr),
            Object::Dictionary(dict) => self.write_dictionary(w, dict),
            Object::Stream { dict, data } => self.write_stream(w, dict, data),
            Object::Reference(r) => write!(w, "{} {} R", r.id, r.gen),
        }
    }

    /// Write a real number with at most five decimals, trailing zeros trimmed.
    fn write_real<W: Write>(&self, w: &mut W, value: f64) -> std::io::Result<()> {
        if value.fract() == 0.0 {
            write!(w, "{}", value as i64)
        } else {
            let formatted = format!("{:.5}", value);
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            write!(w, "{}", trimmed)
        }
    }

    /// Write a PDF name.
    ///
    /// Names start with `/` and escape special characters with `#xx`.
    fn write_name<W: Write>(&self, w: &mut W, name: &str) -> std::io::Result<()> {
        write!(w, "/")?;
        for byte in name.bytes() {
            match byte {
                b'!'
                | b'"'
                | b'$'..=b'&'
                | b'\''..=b'.'
                | b'0'..=b'9'
                | b';'
                | b'?'
                | b'@'
                | b'A'..=b'Z'
                | b'^'..=b'z'
                | b'|'
                | b'~' => {
                    w.write_all(&[byte])?;
                },
                _ => {
                    write!(w, "#{:02X}", byte)?;
                },
            }
        }
        Ok(())
    }

    /// Write a PDF array.
    fn write_array<W: Write>(&self, w: &mut W, arr: &[Object]) -> std::io::Result<()> {
        write!(w, "[")?;
        for (i, obj) in arr.iter().enumerate() {
            if i > 0 {
                write!(w, " ")?;
            }
            self.write_object(w, obj)?;
        }
        write!(w, "]")
    }

    /// Write a PDF dictionary.
    fn write_dictionary<W: Write>(&self, w: &mut W, dict: &Dictionary) -> std::io::Result<()> {
        write!(w, "<<")?;
        for (key, value) in dict {
            write!(w, " ")?;
            self.write_name(w, key)?;
            write!(w, " ")?;
            self.write_object(w, value)?;
        }
        write!(w, " >>")
    }

    /// Write a PDF stream, adding `/Length` when the dictionary lacks it.
    fn write_stream<W: Write>(
        &self,
        w: &mut W,
        dict: &Dictionary,
        data: &[u8],
    ) -> std::io::Result<()> {
        if dict.contains_key("Length") {
            self.write_dictionary(w, dict)?;
        } else {
            let mut dict_with_length = dict.clone();
            dict_with_length.insert("Length".to_string(), Object::Integer(data.len() as i64));
            self.write_dictionary(w, &dict_with_length)?;
        }
        write!(w, "\nstream\n")?;
        w.write_all(data)?;
        write!(w, "\nendstream")
    }
}

/// Helper functions for building PDF objects.
impl ObjectSerializer {
    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(s.to_string())
    }

    /// Create an Integer object.
    pub fn integer(i: i64) -> Object {
        Object::Integer(i)
    }

    /// Create a Dictionary object, keeping the entry order.
    pub fn dict(entries: Vec<(&str, Object)>) -> Object {
        let map: Dictionary = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Object::Dictionary(map)
    }

    /// Create a rectangle array [x, y, width, height] -> [llx, lly, urx, ury].
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Object {
        Object::Array(vec![
            Object::Real(x),
            Object::Real(y),
            Object::Real(x + width),
            Object::Real(y + height),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectRef;

    fn ser(obj: &Object) -> String {
        ObjectSerializer::new().serialize_to_string(obj).unwrap()
    }

    #[test]
    fn test_serialize_null() {
        assert_eq!(ser(&Object::Null), "null");
    }

    #[test]
    fn test_serialize_integer() {
        assert_eq!(ser(&Object::Integer(42)), "42");
        assert_eq!(ser(&Object::Integer(-123)), "-123");
    }

    #[test]
    fn test_serialize_real() {
        assert_eq!(ser(&Object::Real(3.14258)), "3.14258");
        assert_eq!(ser(&Object::Real(1.0)), "1");
        assert_eq!(ser(&Object::Real(0.5)), "0.5");
        assert_eq!(ser(&Object::Real(841.89)), "841.89");
    }

    #[test]
    fn test_serialize_name() {
        assert_eq!(ser(&Object::Name("Type".to_string())), "/Type");
        assert_eq!(ser(&Object::Name("Helvetica-Bold".to_string())), "/Helvetica-Bold");
    }

    #[test]
    fn test_serialize_name_with_special_chars() {
        assert_eq!(ser(&Object::Name("Name With Space".to_string())), "/Name#20With#20Space");
    }

    #[test]
    fn test_serialize_array() {
        let arr = Object::Array(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)]);
        assert_eq!(ser(&arr), "[1 2 3]");
        assert_eq!(ser(&Object::Array(vec![])), "[]");
    }

    #[test]
    fn test_serialize_dictionary_keeps_order() {
        let dict = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Font")),
            ("Subtype", ObjectSerializer::name("Type1")),
            ("BaseFont", ObjectSerializer::name("Helvetica")),
            ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
        ]);
        assert_eq!(
            ser(&dict),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
        );
    }

    #[test]
    fn test_serialize_nested_dictionary() {
        let resources = ObjectSerializer::dict(vec![(
            "Font",
            ObjectSerializer::dict(vec![
                ("F1", Object::Reference(ObjectRef::new(1, 0))),
                ("F2", Object::Reference(ObjectRef::new(2, 0))),
            ]),
        )]);
        assert_eq!(ser(&resources), "<< /Font << /F1 1 0 R /F2 2 0 R >> >>");
    }

    #[test]
    fn test_serialize_reference() {
        assert_eq!(ser(&Object::Reference(ObjectRef::new(10, 0))), "10 0 R");
    }

    #[test]
    fn test_write_indirect() {
        let mut buf = Vec::new();
        ObjectSerializer::new()
            .write_indirect(&mut buf, 1, 0, &Object::Integer(42))
            .unwrap();
        assert_eq!(buf, b"1 0 obj\n42\nendobj\n".to_vec());
    }

    #[test]
    fn test_serialize_stream_adds_length() {
        let stream = Object::Stream {
            dict: Dictionary::new(),
            data: bytes::Bytes::from_static(b"stream data"),
        };

        assert_eq!(ser(&stream), "<< /Length 11 >>\nstream\nstream data\nendstream");
    }

    #[test]
    fn test_serialize_stream_keeps_explicit_length() {
        let mut dict = Dictionary::new();
        dict.insert("Length".to_string(), Object::Integer(4));
        dict.insert("Filter".to_string(), Object::Name("FlateDecode".to_string()));
        let stream = Object::Stream {
            dict,
            data: bytes::Bytes::from_static(b"abcd"),
        };
        assert!(ser(&stream).starts_with("<< /Length 4 /Filter /FlateDecode >>"));
    }

    #[test]
    fn test_rect_helper() {
        let rect = ObjectSerializer::rect(0.0, 0.0, 595.28, 841.89);
        assert_eq!(ser(&rect), "[0 0 595.28 841.89]");
    }
}
