//! PDF content stream builder.
//!
//! Builds PDF content streams containing graphics and text operators
//! according to PDF specification ISO 32000-1:2008 Section 8-9.
//! Coordinates are written with two decimals and color channels with
//! three, one operator per line.

use super::font_manager::{FontFace, FontState};
use crate::error::Result;
use crate::layout::Color;
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(FontFace, f32),
    /// Move text position (Td)
    MoveText(f32, f32),
    /// Show text (Tj); bytes are already WinAnsi-encoded and escaped
    ShowText(Vec<u8>),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
}

/// Builder for PDF content streams.
#[derive(Debug, Default, Clone)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Whether we're in a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations recorded so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Whether nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
        }
        self
    }

    /// Set font for text operations.
    pub fn set_font(&mut self, font: FontState) -> &mut Self {
        self.op(ContentStreamOp::SetFont(font.face, font.size))
    }

    /// Draw one line of pre-encoded text as a self-contained text object.
    ///
    /// Emits `BT /Fx size Tf x y Td r g b rg (text) Tj ET`.
    pub fn text_line(
        &mut self,
        font: FontState,
        x: f32,
        y: f32,
        color: Color,
        encoded: Vec<u8>,
    ) -> &mut Self {
        self.begin_text();
        self.set_font(font);
        self.op(ContentStreamOp::MoveText(x, y));
        self.fill_color(color);
        self.op(ContentStreamOp::ShowText(encoded));
        self.end_text()
    }

    /// Set fill color.
    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b))
    }

    /// Set stroke color.
    pub fn stroke_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetStrokeColorRGB(color.r, color.g, color.b))
    }

    /// Set line width.
    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        self.op(ContentStreamOp::SetLineWidth(width))
    }

    /// Move to a point (start a new subpath).
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x, y))
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::LineTo(x, y))
    }

    /// Draw a rectangle.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// Filled rectangle in `color`.
    pub fn fill_rect(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.end_text();
        self.fill_color(color).rect(x, y, width, height).fill()
    }

    /// Stroked horizontal rule from `x1` to `x2` at height `y`.
    pub fn horizontal_rule(
        &mut self,
        color: Color,
        line_width: f32,
        x1: f32,
        x2: f32,
        y: f32,
    ) -> &mut Self {
        self.end_text();
        self.stroke_color(color)
            .set_line_width(line_width)
            .move_to(x1, y)
            .line_to(x2, y)
            .stroke()
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(buf)
    }

    /// Write a single operation to the buffer.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::BeginText => write!(w, "BT"),
            ContentStreamOp::EndText => write!(w, "ET"),
            ContentStreamOp::SetFont(face, size) => {
                write!(w, "/{} {} Tf", face.resource_name(), size)
            },
            ContentStreamOp::MoveText(tx, ty) => write!(w, "{:.2} {:.2} Td", tx, ty),
            ContentStreamOp::ShowText(encoded) => {
                write!(w, "(")?;
                w.write_all(encoded)?;
                write!(w, ") Tj")
            },
            ContentStreamOp::SetFillColorRGB(r, g, b) => write!(w, "{:.3} {:.3} {:.3} rg", r, g, b),
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => {
                write!(w, "{:.3} {:.3} {:.3} RG", r, g, b)
            },
            ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", width),
            ContentStreamOp::MoveTo(x, y) => write!(w, "{:.2} {:.2} m", x, y),
            ContentStreamOp::LineTo(x, y) => write!(w, "{:.2} {:.2} l", x, y),
            ContentStreamOp::Rectangle(x, y, w_val, h) => {
                write!(w, "{:.2} {:.2} {:.2} {:.2} re", x, y, w_val, h)
            },
            ContentStreamOp::Stroke => write!(w, "S"),
            ContentStreamOp::Fill => write!(w, "f"),
        }
    }
}
