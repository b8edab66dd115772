//! The two built-in font faces and the active text style.
//!
//! Sheets only ever use Helvetica and Helvetica-Bold, registered as
//! objects 1 and 2 and exposed to every page as `/F1` and `/F2`.

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// One of the two fixed Base-14 faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    /// Helvetica
    #[default]
    Normal,
    /// Helvetica-Bold
    Bold,
}

impl FontFace {
    /// Both faces in object registration order.
    pub const ALL: [FontFace; 2] = [FontFace::Normal, FontFace::Bold];

    /// Base font name written to the font dictionary.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFace::Normal => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used by `Tf` in content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontFace::Normal => "F1",
            FontFace::Bold => "F2",
        }
    }
}

/// Active face and size; recomputed on every style change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontState {
    /// Selected face
    pub face: FontFace,
    /// Size in points
    pub size: f32,
}

impl FontState {
    /// Create a font state.
    pub const fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }

    /// Baseline-to-baseline distance for this size.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }
}

impl Default for FontState {
    fn default() -> Self {
        Self::new(FontFace::Normal, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_names() {
        assert_eq!(FontFace::Normal.base_font(), "Helvetica");
        assert_eq!(FontFace::Bold.base_font(), "Helvetica-Bold");
        assert_eq!(FontFace::Normal.resource_name(), "F1");
        assert_eq!(FontFace::Bold.resource_name(), "F2");
    }

    #[test]
    fn test_line_height() {
        assert!((FontState::new(FontFace::Bold, 16.0).line_height() - 22.4).abs() < 1e-4);
        assert!((FontState::new(FontFace::Normal, 9.0).line_height() - 12.6).abs() < 1e-4);
    }

    #[test]
    fn test_default_state() {
        let state = FontState::default();
        assert_eq!(state.face, FontFace::Normal);
        assert_eq!(state.size, 10.0);
    }
}
