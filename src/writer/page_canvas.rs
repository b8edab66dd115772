//! Page canvas with a layout cursor and automatic pagination.
//!
//! The canvas owns the content stream of the page being drawn and a
//! vertical cursor measured from the bottom edge. Every drawing primitive
//! first checks that its block fits above the bottom limit and starts a
//! new page otherwise, so a block is never split across pages.

use super::content_stream::ContentStreamBuilder;
use super::font_manager::{FontFace, FontState};
use crate::config::DocumentConfig;
use crate::fonts::encode_str;
use crate::layout::{wrap_text, Color};

/// Title style of the header block.
const TITLE_FONT: FontState = FontState::new(FontFace::Bold, 16.0);
/// Style of the metadata line under the title.
const META_FONT: FontState = FontState::new(FontFace::Normal, 8.0);
/// Style of table labels.
const LABEL_FONT: FontState = FontState::new(FontFace::Bold, 9.0);
/// Style of table values.
const VALUE_FONT: FontState = FontState::new(FontFace::Normal, 9.0);
/// Style of the footer line.
const FOOTER_FONT: FontState = FontState::new(FontFace::Normal, 7.0);

/// Gap between the title and the metadata line.
const TITLE_GAP: f32 = 2.0;
/// Gap between the header text and the accent rule.
const RULE_GAP: f32 = 5.0;
/// Space left below the accent rule.
const HEADER_SPACING: f32 = 15.0;
/// Width of the accent rule under the header.
const ACCENT_RULE_WIDTH: f32 = 2.0;

/// Share of the content width taken by the label column.
const LABEL_SHARE: f32 = 0.33;
/// Share of the content width taken by the value column.
const VALUE_SHARE: f32 = 0.67;
/// Inner padding of a table cell on every side.
const CELL_PADDING: f32 = 6.0;
/// Lift applied to the first baseline so text sits inside the cell.
const BASELINE_LIFT: f32 = 3.0;
/// Width of table borders and the footer rule.
const BORDER_WIDTH: f32 = 0.5;

/// Space left above the footer rule.
const FOOTER_SPACING: f32 = 15.0;
/// Distance from the footer rule down to the footer baseline.
const FOOTER_TEXT_GAP: f32 = 12.0;
/// Approximate advance of one footer byte at 7pt.
const FOOTER_CHAR_WIDTH: f32 = 3.2;

/// Height of a one-line table row, the smallest block a page must hold.
pub(crate) fn min_row_height() -> f32 {
    VALUE_FONT.line_height() + 2.0 * CELL_PADDING
}

/// A finalized page: its content can no longer change.
#[derive(Debug, Clone, Default)]
pub struct Page {
    content: ContentStreamBuilder,
}

impl Page {
    pub(crate) fn from_content(content: ContentStreamBuilder) -> Self {
        Self { content }
    }

    /// Drawing operations of this page.
    pub fn content(&self) -> &ContentStreamBuilder {
        &self.content
    }
}

/// Drawing surface for sheet pages.
#[derive(Debug, Clone)]
pub struct PageCanvas {
    config: DocumentConfig,
    accent: Color,
    current: ContentStreamBuilder,
    cursor: f32,
    pages: Vec<Page>,
}

impl PageCanvas {
    /// Create a canvas positioned at the top of an empty first page.
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            accent: config.accent,
            cursor: config.top(),
            config,
            current: ContentStreamBuilder::new(),
            pages: Vec::new(),
        }
    }

    /// Configuration the canvas lays out against.
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Current accent color.
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Change the accent used by subsequent headers.
    pub fn set_accent(&mut self, color: Color) {
        self.accent = color;
    }

    /// Vertical position where the next block starts.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Pages finalized so far.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Whether the open page has anything drawn on it.
    pub fn has_open_content(&self) -> bool {
        !self.current.is_empty()
    }

    /// Finalize the open page if it has content and start a fresh one.
    pub fn add_page(&mut self) {
        self.flush();
        self.cursor = self.config.top();
    }

    /// Start a new page unless `needed` points still fit above the bottom limit.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.cursor - needed < self.config.bottom_limit() {
            log::trace!(
                "Page break: {:.2}pt needed at cursor {:.2}",
                needed,
                self.cursor
            );
            self.add_page();
        }
    }

    /// Title in the accent color, an optional metadata line and an accent rule.
    pub fn add_header(&mut self, title: &str, meta: &str) {
        let mut needed = TITLE_FONT.line_height() + TITLE_GAP + RULE_GAP + HEADER_SPACING;
        if !meta.is_empty() {
            needed += META_FONT.line_height();
        }
        self.ensure_space(needed);

        let x = self.config.margin;
        self.current
            .text_line(TITLE_FONT, x, self.cursor, self.accent, encode_str(title));
        self.cursor -= TITLE_FONT.line_height();
        self.cursor -= TITLE_GAP;

        if !meta.is_empty() {
            self.current
                .text_line(META_FONT, x, self.cursor, Color::MUTED, encode_str(meta));
            self.cursor -= META_FONT.line_height();
        }

        self.cursor -= RULE_GAP;
        self.current.horizontal_rule(
            self.accent,
            ACCENT_RULE_WIDTH,
            x,
            self.config.page_width - self.config.margin,
            self.cursor,
        );
        self.cursor -= HEADER_SPACING;
    }

    /// Two-column row: shaded bold label cell and a wrapped value cell.
    pub fn add_table_row(&mut self, label: &str, value: &str) {
        let content_width = self.config.content_width();
        let label_width = content_width * LABEL_SHARE;
        let value_width = content_width * VALUE_SHARE;

        let label_lines = wrap_text(label, label_width - 2.0 * CELL_PADDING, LABEL_FONT.size);
        let value_lines = wrap_text(value, value_width - 2.0 * CELL_PADDING, VALUE_FONT.size);

        let line_height = VALUE_FONT.line_height();
        let line_count = label_lines.len().max(value_lines.len());
        let row_height = line_count as f32 * line_height + 2.0 * CELL_PADDING;

        self.ensure_space(row_height);

        let x = self.config.margin;
        let y = self.cursor;
        let bottom = y - row_height;

        self.current
            .fill_rect(Color::BACKGROUND, x, bottom, label_width, row_height);
        self.current
            .horizontal_rule(Color::BORDER, BORDER_WIDTH, x, x + content_width, bottom);

        let first_baseline = y - CELL_PADDING - line_height + BASELINE_LIFT;

        self.draw_lines(
            LABEL_FONT,
            &label_lines,
            x + CELL_PADDING,
            first_baseline,
            line_height,
        );
        self.draw_lines(
            VALUE_FONT,
            &value_lines,
            x + label_width + CELL_PADDING,
            first_baseline,
            line_height,
        );

        self.cursor = bottom;
    }

    /// Thin separator followed by a small centered line of muted text.
    pub fn add_footer(&mut self, text: &str) {
        self.ensure_space(FOOTER_SPACING + FOOTER_TEXT_GAP);

        self.cursor -= FOOTER_SPACING;
        self.current.horizontal_rule(
            Color::BORDER,
            BORDER_WIDTH,
            self.config.margin,
            self.config.page_width - self.config.margin,
            self.cursor,
        );

        self.cursor -= FOOTER_TEXT_GAP;
        let text_width = text.len() as f32 * FOOTER_CHAR_WIDTH;
        let x = (self.config.page_width - text_width) / 2.0;
        self.current
            .text_line(FOOTER_FONT, x, self.cursor, Color::MUTED, encode_str(text));
    }

    /// Finalize the open page and hand over every finished page.
    pub fn into_pages(mut self) -> Vec<Page> {
        self.flush();
        self.pages
    }

    fn draw_lines(
        &mut self,
        font: FontState,
        lines: &[String],
        x: f32,
        first_baseline: f32,
        line_height: f32,
    ) {
        let mut baseline = first_baseline;
        for line in lines {
            self.current
                .text_line(font, x, baseline, Color::TEXT, encode_str(line));
            baseline -= line_height;
        }
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.current);
        log::debug!(
            "Finalized page {} ({} operations)",
            self.pages.len() + 1,
            content.operations().len()
        );
        self.pages.push(Page::from_content(content));
    }
}
