//! The drawing surface abstraction and a recording implementation.

use crate::bitmap::Bitmap;
use crate::draw::{DrawCommand, StrokeStyle, TextStyle};
use crate::{Color, PixelRect, Point, Rect, Size};

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend. Coordinates are
/// `f32` except for bitmap blits, which address whole pixels.
pub trait Canvas {
    /// Fill a rectangle with uniformly rounded corners.
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle);

    /// Draw text anchored at a baseline position.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Blit `src` of `bitmap` into `dst` on the surface.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, src: PixelRect, dst: PixelRect);

    /// Measure the ink bounds of `text` rendered with `style`.
    fn text_bounds(&self, text: &str, style: &TextStyle) -> Size;
}

/// Advance of one glyph, as a fraction of the font size.
pub const DEFAULT_ADVANCE_EM: f32 = 0.55;
/// Height of a digit above the baseline, as a fraction of the font size.
pub const DEFAULT_CAP_HEIGHT_EM: f32 = 0.72;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Text is measured with fixed per-glyph metrics so layout math stays
/// deterministic in tests and headless hosts.
#[derive(Debug)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    advance_em: f32,
    cap_height_em: f32,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            advance_em: DEFAULT_ADVANCE_EM,
            cap_height_em: DEFAULT_CAP_HEIGHT_EM,
        }
    }

    /// Override the glyph metrics used by [`Canvas::text_bounds`].
    #[must_use]
    pub const fn with_metrics(mut self, advance_em: f32, cap_height_em: f32) -> Self {
        self.advance_em = advance_em;
        self.cap_height_em = cap_height_em;
        self
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundRect {
            bounds: rect,
            radius,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle) {
        self.commands
            .push(DrawCommand::stroked_circle(center, radius, stroke));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: *style,
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, src: PixelRect, dst: PixelRect) {
        self.commands.push(DrawCommand::Bitmap {
            bitmap: bitmap.id(),
            src,
            dst,
        });
    }

    fn text_bounds(&self, text: &str, style: &TextStyle) -> Size {
        let glyphs = text.chars().count() as f32;
        Size::new(
            glyphs * style.size * self.advance_em,
            style.size * self.cap_height_em,
        )
    }
}
