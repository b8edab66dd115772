//! Text encoding for the built-in fonts.
//!
//! Both faces use `/WinAnsiEncoding`; this module turns UTF-8 input into
//! the single-byte strings the content stream shows.

pub mod encoding;

pub use encoding::{encode_literal, encode_str, REPLACEMENT};
