//! Seek bar configuration and the YAML attribute source.
//!
//! Configuration is fixed once the widget is built. The one exception is the
//! maximum value, which the widget exposes through
//! [`BalloonSeekBar::set_max_value`](crate::BalloonSeekBar::set_max_value).

use crate::error::ConfigError;
use crate::input::TouchPolicy;
use balloon_core::{Color, Drawable, Insets, DEFAULT_REDRAW_INTERVAL, MAX_BITMAP_DIMENSION};
use serde::Deserialize;
use std::time::Duration;

/// Default upper bound of the reported value.
pub const DEFAULT_MAX: u32 = 100;
/// Default configured initial value.
pub const DEFAULT_VALUE: u32 = 0;
/// Default background track thickness.
pub const DEFAULT_BACKGROUND_STROKE_WIDTH: f32 = 0.0;
/// Radius of the procedurally drawn thumb.
pub const DEFAULT_THUMB_RADIUS: f32 = 24.0;
/// Outline width of the procedurally drawn thumb.
pub const DEFAULT_THUMB_BORDER_WIDTH: f32 = 4.0;
/// Default scale for thumb and balloon images.
pub const DEFAULT_RESOURCE_SCALE: f32 = 1.0;
/// Default balloon label size.
pub const DEFAULT_TEXT_SIZE: f32 = 12.0;
/// Foreground track is this much thicker than the background track.
pub const FOREGROUND_BIAS: f32 = 1.1;
/// Space above the track reserved for the balloon, in multiples of text size.
pub const BALLOON_HEIGHT_FACTOR: f32 = 1.5;

/// Immutable seek bar settings.
#[derive(Debug, Clone)]
pub struct SeekBarConfig {
    max_value: u32,
    initial_value: u32,
    background: Color,
    foreground: Color,
    stroke_width: f32,
    thumb_radius: f32,
    thumb_border_width: f32,
    thumb_image: Option<Drawable>,
    thumb_scale: f32,
    balloon_image: Option<Drawable>,
    balloon_scale: f32,
    text_size: f32,
    text_color: Color,
    padding: Insets,
    touch_policy: TouchPolicy,
    redraw_interval: Duration,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SeekBarConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_value: DEFAULT_MAX,
            initial_value: DEFAULT_VALUE,
            background: Color::GRAY,
            foreground: Color::GREEN,
            stroke_width: DEFAULT_BACKGROUND_STROKE_WIDTH,
            thumb_radius: DEFAULT_THUMB_RADIUS,
            thumb_border_width: DEFAULT_THUMB_BORDER_WIDTH,
            thumb_image: None,
            thumb_scale: DEFAULT_RESOURCE_SCALE,
            balloon_image: None,
            balloon_scale: DEFAULT_RESOURCE_SCALE,
            text_size: DEFAULT_TEXT_SIZE,
            text_color: Color::WHITE,
            padding: Insets::ZERO,
            touch_policy: TouchPolicy::RestrictToTrack,
            redraw_interval: DEFAULT_REDRAW_INTERVAL,
        }
    }

    /// Set the maximum value.
    #[must_use]
    pub const fn max_value(mut self, max: u32) -> Self {
        self.max_value = max;
        self
    }

    /// Set the configured initial value.
    ///
    /// Stored and reported by [`Self::get_initial_value`] only; the thumb
    /// always starts at the left edge.
    #[must_use]
    pub const fn initial_value(mut self, value: u32) -> Self {
        self.initial_value = value;
        self
    }

    /// Set the background track color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the progress track color.
    #[must_use]
    pub const fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the background track thickness.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Set the procedural thumb radius.
    #[must_use]
    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius.max(0.0);
        self
    }

    /// Set the procedural thumb outline width.
    #[must_use]
    pub fn thumb_border_width(mut self, width: f32) -> Self {
        self.thumb_border_width = width.max(0.0);
        self
    }

    /// Use an image for the thumb.
    #[must_use]
    pub fn thumb_image(mut self, image: Drawable) -> Self {
        self.thumb_image = Some(image);
        self
    }

    /// Set the thumb image scale.
    #[must_use]
    pub const fn thumb_scale(mut self, scale: f32) -> Self {
        self.thumb_scale = scale;
        self
    }

    /// Use an image for the balloon background.
    #[must_use]
    pub fn balloon_image(mut self, image: Drawable) -> Self {
        self.balloon_image = Some(image);
        self
    }

    /// Set the balloon image scale.
    #[must_use]
    pub const fn balloon_scale(mut self, scale: f32) -> Self {
        self.balloon_scale = scale;
        self
    }

    /// Set the balloon label size.
    #[must_use]
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size.max(0.0);
        self
    }

    /// Set the balloon label color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the widget padding.
    #[must_use]
    pub const fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Choose where a press may start a drag.
    #[must_use]
    pub const fn touch_policy(mut self, policy: TouchPolicy) -> Self {
        self.touch_policy = policy;
        self
    }

    /// Set the self-driven repaint period.
    #[must_use]
    pub const fn redraw_interval(mut self, interval: Duration) -> Self {
        self.redraw_interval = interval;
        self
    }

    /// Parse and validate a YAML attribute document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let attrs: SeekBarAttributes = serde_yaml_ng::from_str(yaml)?;
        attrs.into_config()
    }

    pub(crate) fn set_max_value(&mut self, max: u32) {
        self.max_value = max;
    }

    /// Maximum value.
    #[must_use]
    pub const fn get_max_value(&self) -> u32 {
        self.max_value
    }

    /// Configured initial value (not applied to the thumb position).
    #[must_use]
    pub const fn get_initial_value(&self) -> u32 {
        self.initial_value
    }

    /// Background track color.
    #[must_use]
    pub const fn get_background(&self) -> Color {
        self.background
    }

    /// Progress track color.
    #[must_use]
    pub const fn get_foreground(&self) -> Color {
        self.foreground
    }

    /// Background track thickness.
    #[must_use]
    pub const fn background_stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Progress track thickness.
    #[must_use]
    pub fn foreground_stroke_width(&self) -> f32 {
        self.stroke_width * FOREGROUND_BIAS
    }

    /// Corner radius of the background track.
    #[must_use]
    pub fn background_radius(&self) -> f32 {
        self.background_stroke_width() / 2.0
    }

    /// Corner radius of the progress track.
    #[must_use]
    pub fn foreground_radius(&self) -> f32 {
        self.foreground_stroke_width() / 2.0
    }

    /// Procedural thumb radius.
    #[must_use]
    pub const fn get_thumb_radius(&self) -> f32 {
        self.thumb_radius
    }

    /// Procedural thumb outline width.
    #[must_use]
    pub const fn get_thumb_border_width(&self) -> f32 {
        self.thumb_border_width
    }

    /// Thumb image and its scale, if configured.
    #[must_use]
    pub const fn thumb(&self) -> Option<(&Drawable, f32)> {
        match &self.thumb_image {
            Some(image) => Some((image, self.thumb_scale)),
            None => None,
        }
    }

    /// Balloon image and its scale, if configured.
    #[must_use]
    pub const fn balloon(&self) -> Option<(&Drawable, f32)> {
        match &self.balloon_image {
            Some(image) => Some((image, self.balloon_scale)),
            None => None,
        }
    }

    /// Balloon label size.
    #[must_use]
    pub const fn get_text_size(&self) -> f32 {
        self.text_size
    }

    /// Balloon label color.
    #[must_use]
    pub const fn get_text_color(&self) -> Color {
        self.text_color
    }

    /// Vertical space reserved above the track for the balloon.
    #[must_use]
    pub fn balloon_height(&self) -> f32 {
        self.text_size * BALLOON_HEIGHT_FACTOR
    }

    /// Horizontal space kept free at each track end so a label is not clipped.
    #[must_use]
    pub fn reserved_text_width(&self) -> f32 {
        self.text_size.trunc()
    }

    /// Widget padding.
    #[must_use]
    pub const fn get_padding(&self) -> Insets {
        self.padding
    }

    /// Press policy.
    #[must_use]
    pub const fn get_touch_policy(&self) -> TouchPolicy {
        self.touch_policy
    }

    /// Repaint period.
    #[must_use]
    pub const fn get_redraw_interval(&self) -> Duration {
        self.redraw_interval
    }
}

/// A solid-color image described inline in YAML.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageAttribute {
    /// Intrinsic width
    pub width: u32,
    /// Intrinsic height
    pub height: u32,
    /// Fill color
    pub color: Color,
}

/// Raw attributes as a host layout file supplies them.
///
/// Every field is optional; missing fields take the [`SeekBarConfig`] defaults.
///
/// ```yaml
/// max: 50
/// stroke_width: 8
/// foreground: "#00aa00"
/// text_size: 14
/// padding: { left: 16, right: 16 }
/// touch_policy: anywhere
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeekBarAttributes {
    /// Maximum value
    pub max: Option<u32>,
    /// Initial value (parsed, not applied)
    pub value: Option<u32>,
    /// Background track color
    pub background: Option<Color>,
    /// Progress track color
    pub foreground: Option<Color>,
    /// Background track thickness
    pub stroke_width: Option<f32>,
    /// Thumb image
    pub thumb: Option<ImageAttribute>,
    /// Thumb image scale
    pub thumb_scale: Option<f32>,
    /// Balloon image
    pub balloon: Option<ImageAttribute>,
    /// Balloon image scale
    pub balloon_scale: Option<f32>,
    /// Label size
    pub text_size: Option<f32>,
    /// Label color
    pub text_color: Option<Color>,
    /// Widget padding
    pub padding: Option<Insets>,
    /// Press policy
    pub touch_policy: Option<TouchPolicy>,
    /// Repaint period in milliseconds
    pub redraw_interval_ms: Option<u64>,
}

impl SeekBarAttributes {
    /// Validate and convert into a [`SeekBarConfig`].
    pub fn into_config(self) -> Result<SeekBarConfig, ConfigError> {
        let mut config = SeekBarConfig::new();

        if let Some(max) = self.max {
            config = config.max_value(max);
        }
        if let Some(value) = self.value {
            config = config.initial_value(value);
        }
        if let Some(color) = self.background {
            config = config.background(color);
        }
        if let Some(color) = self.foreground {
            config = config.foreground(color);
        }
        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(ConfigError::invalid("stroke_width", "must be >= 0"));
            }
            config = config.stroke_width(width);
        }
        if let Some(size) = self.text_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::invalid("text_size", "must be > 0"));
            }
            config = config.text_size(size);
        }
        if let Some(color) = self.text_color {
            config = config.text_color(color);
        }
        if let Some(thumb) = self.thumb {
            config = config.thumb_image(image("thumb", thumb)?);
        }
        if let Some(scale) = self.thumb_scale {
            config = config.thumb_scale(positive_scale("thumb_scale", scale)?);
        }
        if let Some(balloon) = self.balloon {
            config = config.balloon_image(image("balloon", balloon)?);
        }
        if let Some(scale) = self.balloon_scale {
            config = config.balloon_scale(positive_scale("balloon_scale", scale)?);
        }
        if let Some(padding) = self.padding {
            let edges = [padding.left, padding.top, padding.right, padding.bottom];
            if edges.iter().any(|e| !e.is_finite() || *e < 0.0) {
                return Err(ConfigError::invalid("padding", "edges must be >= 0"));
            }
            config = config.padding(padding);
        }
        if let Some(policy) = self.touch_policy {
            config = config.touch_policy(policy);
        }
        if let Some(ms) = self.redraw_interval_ms {
            if ms == 0 {
                return Err(ConfigError::invalid("redraw_interval_ms", "must be > 0"));
            }
            config = config.redraw_interval(Duration::from_millis(ms));
        }

        Ok(config)
    }
}

fn positive_scale(field: &'static str, scale: f32) -> Result<f32, ConfigError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ConfigError::invalid(field, format!("{scale} is not > 0")))
    }
}

fn image(field: &'static str, attr: ImageAttribute) -> Result<Drawable, ConfigError> {
    if attr.width == 0 || attr.height == 0 {
        return Err(ConfigError::invalid(field, "width and height must be > 0"));
    }
    if attr.width > MAX_BITMAP_DIMENSION || attr.height > MAX_BITMAP_DIMENSION {
        return Err(ConfigError::invalid(
            field,
            format!("width and height must be <= {MAX_BITMAP_DIMENSION}"),
        ));
    }
    Ok(Drawable::solid(attr.width, attr.height, attr.color))
}
