//! Layout helpers shared by the page canvas.
//!
//! - RGB colors and the fixed sheet palette
//! - Greedy word wrapping with an approximate character width model

pub mod color;
pub mod text_wrap;

// Re-export main types
pub use color::Color;
pub use text_wrap::{estimate_width, wrap_text, CHAR_WIDTH_FACTOR};
