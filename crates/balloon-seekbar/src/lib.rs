//! Balloon seek bar: a horizontal slider whose thumb carries a floating
//! value label.
//!
//! The widget is composed of three parts:
//! - [`layout`]: measures the widget and commits [`ContentBounds`] once
//! - [`input`]: maps pointer x to a clamped position, percentage and value,
//!   and notifies an [`OnChangeListener`]
//! - [`render`]: paints background track, progress track, thumb and balloon
//!
//! [`BalloonSeekBar`] ties them together behind the
//! [`Widget`](balloon_core::Widget) trait and owns the redraw timer.
//!
//! # Quick start
//!
//! ```
//! use balloon_core::{Rect, Widget};
//! use balloon_seekbar::{BalloonSeekBar, FnListener};
//!
//! let mut bar = BalloonSeekBar::from_yaml("max: 50\nstroke_width: 8").unwrap();
//! bar.set_on_change_listener(FnListener::new(
//!     |percentage| println!("{percentage}"),
//!     |value| println!("{value}"),
//! ));
//! bar.layout(Rect::new(0.0, 0.0, 320.0, 48.0));
//! assert!(bar.content_bounds().is_some());
//! ```

pub mod config;
mod error;
pub mod input;
pub mod layout;
pub mod render;
mod seek_bar;

pub use config::{ImageAttribute, SeekBarAttributes, SeekBarConfig};
pub use error::{ConfigError, LayoutError};
pub use input::{FnListener, InputMapper, OnChangeListener, ProgressState, TouchPolicy};
pub use layout::{ContentBounds, LayoutEngine};
pub use render::{BalloonLabel, BitmapCache, Frame, Paints, Renderer, TrackGeometry};
pub use seek_bar::BalloonSeekBar;
