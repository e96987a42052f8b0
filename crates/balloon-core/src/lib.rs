//! Core types and traits for the balloon seek bar.
//!
//! This crate provides the framework pieces the widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`PixelRect`], [`Insets`]
//! - Color representation: [`Color`]
//! - Measurement: [`MeasureSpec`] and [`resolve_size`]
//! - Input: [`PointerEvent`]
//! - Painting: the [`Canvas`] trait, [`RecordingCanvas`], [`DrawCommand`]
//! - Images: [`Drawable`] sources rasterized into [`Bitmap`]s
//! - Scheduling: [`RedrawTimer`] with its UI-thread [`RedrawQueue`]
//! - The [`Widget`] trait

pub mod bitmap;
pub mod canvas;
mod color;
pub mod draw;
mod error;
mod event;
mod geometry;
mod measure;
pub mod redraw;
pub mod widget;

pub use bitmap::{Bitmap, BitmapId, Drawable, DrawableSource, MAX_BITMAP_DIMENSION};
pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, FontWeight, StrokeStyle, TextAlign, TextStyle};
pub use error::{BitmapError, TimerError};
pub use event::{PointerAction, PointerEvent, PointerId, PointerType};
pub use geometry::{Insets, PixelRect, Point, Rect, Size};
pub use measure::{resolve_size, MeasureSpec};
pub use redraw::{RedrawQueue, RedrawRequest, RedrawTimer, DEFAULT_REDRAW_INTERVAL};
pub use widget::{LayoutResult, Widget};
