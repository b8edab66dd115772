//! Lossy UTF-8 to WinAnsi conversion for literal strings.
//!
//! The built-in Helvetica faces are declared with `/WinAnsiEncoding`, so
//! every string shown on a page must be one byte per character. Only the
//! Latin-1 supplement and a handful of typographic punctuation marks survive
//! the conversion; everything else becomes `?`.
//!
//! The scanner works on raw bytes rather than `char`s so that malformed
//! input (stray continuation bytes, truncated sequences) degrades in a
//! predictable way instead of being rejected.

/// Three-byte UTF-8 punctuation with a dedicated WinAnsi code point.
const PUNCTUATION: [([u8; 3], u8); 9] = [
    ([0xE2, 0x80, 0x93], 0x96), // en dash
    ([0xE2, 0x80, 0x94], 0x97), // em dash
    ([0xE2, 0x80, 0x98], 0x91), // left single quotation mark
    ([0xE2, 0x80, 0x99], 0x92), // right single quotation mark
    ([0xE2, 0x80, 0x9C], 0x93), // left double quotation mark
    ([0xE2, 0x80, 0x9D], 0x94), // right double quotation mark
    ([0xE2, 0x80, 0xA2], 0x95), // bullet
    ([0xE2, 0x80, 0xA6], 0x85), // horizontal ellipsis
    ([0xE2, 0x82, 0xAC], 0x80), // euro sign
];

/// Placeholder for characters outside the target encoding.
pub const REPLACEMENT: u8 = b'?';

/// Encode `text` as WinAnsi bytes escaped for a `( ... )` literal string.
///
/// # Examples
///
/// ```
/// use pdf_sheet::fonts::encode_literal;
///
/// assert_eq!(encode_literal("café".as_bytes()), b"caf\xE9".to_vec());
/// assert_eq!(encode_literal(b"(test)"), b"\\(test\\)".to_vec());
/// ```
pub fn encode_literal(text: &[u8]) -> Vec<u8> {
    escape_literal(&decode_to_winansi(&replace_punctuation(text)))
}

/// Convenience wrapper over [`encode_literal`] for `&str` input.
pub fn encode_str(text: &str) -> Vec<u8> {
    encode_literal(text.as_bytes())
}

/// Swap the known punctuation sequences for their single-byte forms.
fn replace_punctuation(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut i = 0;

    'scan: while i < text.len() {
        if text[i] == 0xE2 {
            for (seq, byte) in &PUNCTUATION {
                if text[i..].starts_with(seq) {
                    out.push(*byte);
                    i += seq.len();
                    continue 'scan;
                }
            }
        }
        out.push(text[i]);
        i += 1;
    }

    out
}

/// Byte-level UTF-8 decode that keeps only the Latin-1 supplement.
fn decode_to_winansi(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let len = text.len();
    let mut i = 0;

    while i < len {
        let byte = text[i];
        let next = text.get(i + 1).copied();

        match byte {
            0x00..=0x7F => {
                out.push(byte);
                i += 1;
            },
            0xC2 | 0xC3 if next.is_some() => match next {
                Some(cont @ 0x80..=0xBF) => {
                    out.push(if byte == 0xC2 { cont } else { cont + 0x40 });
                    i += 2;
                },
                _ => {
                    out.push(REPLACEMENT);
                    i += 1;
                },
            },
            0xC0..=0xDF => {
                out.push(REPLACEMENT);
                i += 2;
            },
            0xE0..=0xEF => {
                out.push(REPLACEMENT);
                i += 3;
            },
            0xF0..=0xFF => {
                out.push(REPLACEMENT);
                i += 4;
            },
            // stray continuation byte or already single-byte WinAnsi
            _ => {
                out.push(byte);
                i += 1;
            },
        }
    }

    out
}

/// Escape the literal-string delimiters.
fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 8);
    for &b in bytes {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'(' => out.extend_from_slice(b"\\("),
            b')' => out.extend_from_slice(b"\\)"),
            _ => out.push(b),
        }
    }
    out
}
