//! Drawable sources and pre-rendered bitmaps.
//!
//! A [`Drawable`] is what a host supplies (an image at its intrinsic size).
//! Widgets rasterize it once into a [`Bitmap`] at their configured scale and
//! blit that bitmap on every frame. Bitmaps own their pixel memory until
//! [`Bitmap::recycle`] is called.

use crate::error::BitmapError;
use crate::{Color, PixelRect};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BITMAP_ID: AtomicU64 = AtomicU64::new(1);

/// Largest width or height, in pixels, a bitmap may have.
pub const MAX_BITMAP_DIMENSION: u32 = 4096;

fn byte_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(BitmapError::TooLarge { width, height })
}

/// Identity of a rasterized bitmap, stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitmapId(pub u64);

impl BitmapId {
    fn next() -> Self {
        Self(NEXT_BITMAP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Pixel content of a drawable.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableSource {
    /// Every pixel has the same color.
    Solid(Color),
    /// Row-major RGBA8 pixels at intrinsic size.
    Rgba(Vec<u8>),
}

/// An image at its intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    width: u32,
    height: u32,
    source: DrawableSource,
}

impl Drawable {
    /// A solid-color drawable of the given intrinsic size.
    #[must_use]
    pub const fn solid(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            source: DrawableSource::Solid(color),
        }
    }

    /// Wrap raw RGBA8 pixels. The buffer must hold exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(BitmapError::PixelLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            source: DrawableSource::Rgba(pixels),
        })
    }

    /// Intrinsic width in pixels.
    #[must_use]
    pub const fn intrinsic_width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height in pixels.
    #[must_use]
    pub const fn intrinsic_height(&self) -> u32 {
        self.height
    }

    /// Render into a new bitmap of `intrinsic size * scale` (truncated).
    ///
    /// Either side may be at most [`MAX_BITMAP_DIMENSION`] pixels.
    pub fn rasterize(&self, scale: f32) -> Result<Bitmap, BitmapError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(BitmapError::InvalidScale(scale));
        }

        // float-to-int casts saturate, so overflow lands above the cap
        let width = (self.width as f32 * scale) as u32;
        let height = (self.height as f32 * scale) as u32;
        if width > MAX_BITMAP_DIMENSION || height > MAX_BITMAP_DIMENSION {
            return Err(BitmapError::TooLarge { width, height });
        }
        if width == 0 || height == 0 {
            return Err(BitmapError::Empty { width, height });
        }

        let mut pixels = Vec::with_capacity(byte_len(width, height)?);
        match &self.source {
            DrawableSource::Solid(color) => {
                let rgba = color.to_rgba8();
                let count = width as usize * height as usize;
                for _ in 0..count {
                    pixels.extend_from_slice(&rgba);
                }
            }
            DrawableSource::Rgba(src) => {
                // nearest neighbour
                for y in 0..height {
                    let sy = ((y as f32 / scale) as u32).min(self.height - 1);
                    for x in 0..width {
                        let sx = ((x as f32 / scale) as u32).min(self.width - 1);
                        let i = (sy as usize * self.width as usize + sx as usize) * 4;
                        pixels.extend_from_slice(&src[i..i + 4]);
                    }
                }
            }
        }

        tracing::debug!(width, height, scale, "rasterized drawable");
        Ok(Bitmap {
            id: BitmapId::next(),
            width,
            height,
            pixels: Some(pixels),
        })
    }
}

/// A pre-rendered RGBA8 image owned by a widget.
#[derive(Debug, PartialEq, Eq)]
pub struct Bitmap {
    id: BitmapId,
    width: u32,
    height: u32,
    pixels: Option<Vec<u8>>,
}

impl Bitmap {
    /// Identity used in draw commands.
    #[must_use]
    pub const fn id(&self) -> BitmapId {
        self.id
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Full-image source rectangle.
    #[must_use]
    pub const fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
    }

    /// Pixel data, or `None` once recycled.
    #[must_use]
    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }

    /// Whether the pixel memory has been released.
    #[must_use]
    pub const fn is_recycled(&self) -> bool {
        self.pixels.is_none()
    }

    /// Release the pixel memory. Returns `false` if it was already released.
    pub fn recycle(&mut self) -> bool {
        if self.pixels.take().is_some() {
            tracing::debug!(id = self.id.0, "recycled bitmap");
            true
        } else {
            false
        }
    }
}
