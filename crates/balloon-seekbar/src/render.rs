//! Renderer: track, thumb and balloon painting from cached state.
//!
//! Paints and track geometry are computed once (paints at construction,
//! geometry when bounds are committed) and only read while painting.
//! Image bitmaps live in a [`BitmapCache`] that the widget rasterizes on
//! attach and recycles on detach.

use crate::config::SeekBarConfig;
use crate::layout::ContentBounds;
use balloon_core::{
    Bitmap, Canvas, Color, Drawable, FontWeight, Point, Rect, Size, StrokeStyle, TextAlign,
    TextStyle,
};

/// Alpha of the procedural thumb outline.
pub const THUMB_BORDER_ALPHA: u8 = 20;
/// Alpha of the procedural balloon background.
pub const BALLOON_ALPHA: u8 = 30;
/// Glyph whose width sizes the balloon, so the balloon does not jitter between digits.
pub const MEASURE_GLYPH: &str = "7";
/// Procedural balloon height, in multiples of text size.
pub const BALLOON_RECT_HEIGHT_FACTOR: f32 = 1.2;
/// Procedural balloon lift above the thumb center, in multiples of text size.
pub const BALLOON_LIFT_FACTOR: f32 = 2.0;
/// Label lift above the thumb center over an image balloon, in multiples of text size.
pub const IMAGE_TEXT_HEIGHT_BIAS: f32 = 1.2;

/// Colors and strokes used for every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paints {
    /// Background track fill
    pub background: Color,
    /// Progress track fill
    pub foreground: Color,
    /// Procedural thumb fill
    pub thumb_fill: Color,
    /// Procedural thumb outline
    pub thumb_border: StrokeStyle,
    /// Procedural balloon fill
    pub balloon: Color,
    /// Label style
    pub text: TextStyle,
}

impl Paints {
    /// Derive paints from configuration.
    #[must_use]
    pub fn new(config: &SeekBarConfig) -> Self {
        Self {
            background: config.get_background(),
            foreground: config.get_foreground(),
            thumb_fill: Color::WHITE,
            thumb_border: StrokeStyle::new(
                Color::argb8(THUMB_BORDER_ALPHA, 0, 0, 0),
                config.get_thumb_border_width(),
            ),
            balloon: Color::argb8(BALLOON_ALPHA, 0, 0, 0),
            text: TextStyle {
                size: config.get_text_size(),
                color: config.get_text_color(),
                weight: FontWeight::Bold,
                align: TextAlign::Left,
            },
        }
    }
}

/// Track rectangles and thumb line for committed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Full-range background track
    pub background: Rect,
    /// Progress track at zero progress; its right edge follows the thumb
    pub foreground: Rect,
    /// Vertical center of the thumb
    pub thumb_y: f32,
    /// Background corner radius
    pub background_radius: f32,
    /// Progress corner radius
    pub foreground_radius: f32,
}

impl TrackGeometry {
    /// Lay the tracks out inside `bounds`.
    ///
    /// The thicker progress track starts at `bounds.top`; the background track
    /// is pushed down by the thickness difference.
    #[must_use]
    pub fn new(config: &SeekBarConfig, bounds: &ContentBounds) -> Self {
        let bg = config.background_stroke_width();
        let fg = config.foreground_stroke_width();
        let background =
            Rect::from_ltrb(bounds.left, bounds.top + (fg - bg), bounds.right, bounds.top + bg);
        let foreground = Rect::from_ltrb(bounds.left, bounds.top, bounds.left, bounds.top + fg);
        Self {
            background,
            foreground,
            thumb_y: background.top() + bg / 2.0,
            background_radius: config.background_radius(),
            foreground_radius: config.foreground_radius(),
        }
    }

    /// Progress track ending at `progress_x`.
    #[must_use]
    pub fn foreground_at(&self, progress_x: f32) -> Rect {
        self.foreground.with_right(progress_x)
    }
}

/// Balloon label text with its width and horizontal bias.
#[derive(Debug, Clone, PartialEq)]
pub struct BalloonLabel {
    /// Decimal value
    pub text: String,
    /// Half-width of the procedural balloon
    pub width: f32,
    /// Fraction of `width` the text starts left of the thumb
    pub bias: f32,
}

impl BalloonLabel {
    /// Size a label for `value` given the width of one digit.
    #[must_use]
    pub fn new(value: u32, digit_width: f32) -> Self {
        let text = value.to_string();
        let (width, bias) = match text.len() {
            1 => (digit_width, 0.5),
            2 => (digit_width * 1.5, 0.75),
            _ => (digit_width * 2.0, 0.82),
        };
        Self { text, width, bias }
    }
}

/// Pre-rendered thumb and balloon images.
#[derive(Debug, Default)]
pub struct BitmapCache {
    thumb: Option<Bitmap>,
    balloon: Option<Bitmap>,
}

impl BitmapCache {
    /// Rasterize whichever images are configured.
    #[must_use]
    pub fn new(config: &SeekBarConfig) -> Self {
        Self {
            thumb: rasterize("thumb", config.thumb()),
            balloon: rasterize("balloon", config.balloon()),
        }
    }

    /// Re-rasterize images that are configured but missing or recycled.
    pub fn ensure(&mut self, config: &SeekBarConfig) {
        if !is_live(self.thumb.as_ref()) {
            self.thumb = rasterize("thumb", config.thumb());
        }
        if !is_live(self.balloon.as_ref()) {
            self.balloon = rasterize("balloon", config.balloon());
        }
    }

    /// Release pixel memory. Returns how many bitmaps were actually released.
    pub fn recycle(&mut self) -> usize {
        [self.thumb.as_mut(), self.balloon.as_mut()]
            .into_iter()
            .flatten()
            .map(Bitmap::recycle)
            .filter(|released| *released)
            .count()
    }

    /// Thumb bitmap, if rasterized and not recycled.
    #[must_use]
    pub fn thumb(&self) -> Option<&Bitmap> {
        self.thumb.as_ref().filter(|b| !b.is_recycled())
    }

    /// Balloon bitmap, if rasterized and not recycled.
    #[must_use]
    pub fn balloon(&self) -> Option<&Bitmap> {
        self.balloon.as_ref().filter(|b| !b.is_recycled())
    }
}

fn is_live(bitmap: Option<&Bitmap>) -> bool {
    bitmap.is_some_and(|b| !b.is_recycled())
}

fn rasterize(name: &'static str, image: Option<(&Drawable, f32)>) -> Option<Bitmap> {
    let (drawable, scale) = image?;
    match drawable.rasterize(scale) {
        Ok(bitmap) => Some(bitmap),
        Err(err) => {
            tracing::warn!(image = name, %err, "falling back to procedural shape");
            None
        }
    }
}

/// Per-frame progress snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Thumb x position
    pub progress_x: f32,
    /// Fraction of the track covered
    pub percentage: f32,
    /// Reported value
    pub value: u32,
}

/// Paints the seek bar.
#[derive(Debug)]
pub struct Renderer {
    paints: Paints,
    thumb_radius: f32,
    geometry: Option<TrackGeometry>,
    bitmaps: BitmapCache,
}

impl Renderer {
    /// Build paints and rasterize images.
    #[must_use]
    pub fn new(config: &SeekBarConfig) -> Self {
        Self {
            paints: Paints::new(config),
            thumb_radius: config.get_thumb_radius(),
            geometry: None,
            bitmaps: BitmapCache::new(config),
        }
    }

    /// Cache track geometry for newly committed bounds.
    pub fn set_bounds(&mut self, config: &SeekBarConfig, bounds: &ContentBounds) {
        self.geometry = Some(TrackGeometry::new(config, bounds));
    }

    /// Cached geometry, once bounds are committed.
    #[must_use]
    pub const fn geometry(&self) -> Option<&TrackGeometry> {
        self.geometry.as_ref()
    }

    /// Cached paints.
    #[must_use]
    pub const fn paints(&self) -> &Paints {
        &self.paints
    }

    /// Image bitmaps.
    #[must_use]
    pub const fn bitmaps(&self) -> &BitmapCache {
        &self.bitmaps
    }

    pub(crate) fn bitmaps_mut(&mut self) -> &mut BitmapCache {
        &mut self.bitmaps
    }

    /// Paint one frame. Draws nothing before bounds are committed.
    pub fn paint(&self, canvas: &mut dyn Canvas, frame: Frame) {
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };

        canvas.fill_round_rect(
            geometry.background,
            geometry.background_radius,
            self.paints.background,
        );
        canvas.fill_round_rect(
            geometry.foreground_at(frame.progress_x),
            geometry.foreground_radius,
            self.paints.foreground,
        );

        let thumb = Point::new(frame.progress_x, geometry.thumb_y);
        self.paint_thumb(canvas, thumb);

        if frame.percentage > 0.0 {
            self.paint_balloon(canvas, thumb, frame.value);
        }
    }

    fn paint_thumb(&self, canvas: &mut dyn Canvas, center: Point) {
        if let Some(bitmap) = self.bitmaps.thumb() {
            blit_centered(canvas, bitmap, center);
        } else {
            canvas.fill_circle(center, self.thumb_radius, self.paints.thumb_fill);
            canvas.stroke_circle(center, self.thumb_radius, self.paints.thumb_border);
        }
    }

    fn paint_balloon(&self, canvas: &mut dyn Canvas, thumb: Point, value: u32) {
        let style = &self.paints.text;
        let text_size = style.size;
        let digit_width = canvas.text_bounds(MEASURE_GLYPH, style).width;
        let label = BalloonLabel::new(value, digit_width);

        let text_height_bias = if let Some(bitmap) = self.bitmaps.balloon() {
            let y = thumb.y - text_size * IMAGE_TEXT_HEIGHT_BIAS;
            blit_centered(canvas, bitmap, Point::new(thumb.x, y));
            IMAGE_TEXT_HEIGHT_BIAS
        } else {
            let rect = Rect::new(
                0.0,
                0.0,
                label.width * 2.0,
                text_size * BALLOON_RECT_HEIGHT_FACTOR,
            )
            .offset(
                thumb.x - label.width,
                thumb.y - text_size * BALLOON_LIFT_FACTOR,
            );
            canvas.fill_round_rect(rect, self.thumb_radius, self.paints.balloon);
            1.0
        };

        let origin = Point::new(
            thumb.x - label.width * label.bias,
            thumb.y - text_size * text_height_bias,
        );
        canvas.draw_text(&label.text, origin, style);
    }
}

fn blit_centered(canvas: &mut dyn Canvas, bitmap: &Bitmap, center: Point) {
    let size = Size::new(bitmap.width() as f32, bitmap.height() as f32);
    let dst = Rect::centered_at(center, size).to_pixels();
    canvas.draw_bitmap(bitmap, bitmap.bounds(), dst);
}
