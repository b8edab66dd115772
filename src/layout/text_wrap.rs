//! Greedy line wrapping with an approximate width model.
//!
//! No glyph metrics are consulted: every UTF-8 byte is assumed to be
//! `font_size * CHAR_WIDTH_FACTOR` points wide, so accented characters count
//! twice. Generated sheets depend on
//! these exact numbers for their line breaks, so the model must not be
//! swapped for real Helvetica widths.

/// Average Helvetica advance as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f32 = 0.45;

/// Estimated width of `text` in points at `font_size`, by UTF-8 byte length.
pub fn estimate_width(text: &str, font_size: f32) -> f32 {
    text.len() as f32 * (font_size * CHAR_WIDTH_FACTOR)
}

/// Wrap `text` into lines no wider than `max_width` (estimated).
///
/// Hard breaks (`\n`, `\r\n`, `\r`) are kept, blank paragraphs become empty
/// lines, and words are split on single spaces. A word that is wider than
/// `max_width` on its own still gets a line to itself; words are never
/// broken. The result always has at least one line.
///
/// # Examples
///
/// ```
/// use pdf_sheet::layout::wrap_text;
///
/// let lines = wrap_text("one two three", 40.0, 10.0);
/// assert_eq!(lines, vec!["one two", "three"]);
/// ```
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();

    for paragraph in normalized.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split(' ') {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            if estimate_width(&candidate, font_size) > max_width && !current_line.is_empty() {
                lines.push(std::mem::replace(&mut current_line, word.to_string()));
            } else {
                current_line = candidate;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hand_computed() {
        // 4.5pt per char: "one two" = 31.5, "one two three" = 58.5
        let lines = wrap_text("one two three", 40.0, 10.0);
        assert_eq!(lines, vec!["one two".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let a = wrap_text("one two three", 40.0, 10.0);
        let b = wrap_text("one two three", 40.0, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 100.0, 9.0), vec![String::new()]);
    }

    #[test]
    fn test_wrap_keeps_hard_breaks_and_blank_lines() {
        let lines = wrap_text("first\r\n\r\nsecond\rthird", 500.0, 9.0);
        assert_eq!(lines, vec!["first", "", "second", "third"]);
    }

    #[test]
    fn test_wrap_whitespace_only_paragraph_is_blank() {
        let lines = wrap_text("a\n   \nb", 500.0, 9.0);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_long_word_gets_its_own_line() {
        let lines = wrap_text("x supercalifragilistic y", 20.0, 10.0);
        assert_eq!(lines, vec!["x", "supercalifragilistic", "y"]);
    }

    #[test]
    fn test_single_long_word_is_not_split() {
        let lines = wrap_text("abcdefghijklmnopqrstuvwxyz", 10.0, 10.0);
        assert_eq!(lines, vec!["abcdefghijklmnopqrstuvwxyz"]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        // "ab cd" = 5 chars * 4.5 = 22.5, not greater than 22.5
        let lines = wrap_text("ab cd", 22.5, 10.0);
        assert_eq!(lines, vec!["ab cd"]);
    }

    #[test]
    fn test_estimate_width_counts_bytes() {
        // "café" is 5 bytes in UTF-8
        assert_eq!(estimate_width("café", 10.0), 5.0 * 4.5);
        assert_eq!(estimate_width("", 10.0), 0.0);
    }

    #[test]
    fn test_multibyte_words_wrap_sooner() {
        // "ää ää" is 9 bytes: 40.5 > 40
        let lines = wrap_text("ää ää", 40.0, 10.0);
        assert_eq!(lines, vec!["ää", "ää"]);
    }
}
