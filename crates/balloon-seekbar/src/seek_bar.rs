//! The balloon seek bar widget.

use crate::config::SeekBarConfig;
use crate::error::ConfigError;
use crate::input::{InputMapper, OnChangeListener};
use crate::layout::{ContentBounds, LayoutEngine};
use crate::render::{Frame, Renderer};
use balloon_core::{
    Canvas, LayoutResult, MeasureSpec, PointerEvent, Rect, RedrawQueue, RedrawTimer, Size, Widget,
};

/// Horizontal slider with a draggable thumb and a floating value balloon.
///
/// The host drives it through [`Widget`]: measure, layout, paint and pointer
/// events, all on the UI thread. While attached, a background timer requests
/// a repaint every [`SeekBarConfig::redraw_interval`]; the host picks those
/// requests up through [`Widget::poll_redraw`].
///
/// # Example
///
/// ```
/// use balloon_core::{PointerEvent, Rect, Widget};
/// use balloon_seekbar::{BalloonSeekBar, SeekBarConfig, TouchPolicy};
///
/// let config = SeekBarConfig::new()
///     .text_size(0.0)
///     .touch_policy(TouchPolicy::Anywhere);
/// let mut bar = BalloonSeekBar::new(config);
/// bar.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
///
/// bar.event(&PointerEvent::down(50.0, 0.0));
/// assert_eq!(bar.percentage(), 0.25);
/// assert_eq!(bar.value(), 25);
/// ```
#[derive(Debug)]
pub struct BalloonSeekBar {
    config: SeekBarConfig,
    layout: LayoutEngine,
    input: InputMapper,
    renderer: Renderer,
    frame: Rect,
    attached: bool,
    timer: Option<RedrawTimer>,
    redraws: Option<RedrawQueue>,
    test_id: Option<String>,
}

impl Default for BalloonSeekBar {
    fn default() -> Self {
        Self::new(SeekBarConfig::default())
    }
}

impl BalloonSeekBar {
    /// Create a seek bar. Image bitmaps are rasterized here.
    #[must_use]
    pub fn new(config: SeekBarConfig) -> Self {
        let renderer = Renderer::new(&config);
        Self {
            config,
            layout: LayoutEngine::new(),
            input: InputMapper::new(),
            renderer,
            frame: Rect::default(),
            attached: false,
            timer: None,
            redraws: None,
            test_id: None,
        }
    }

    /// Create a seek bar from a YAML attribute document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(SeekBarConfig::from_yaml(yaml)?))
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Register the progress listener, replacing any previous one.
    pub fn set_on_change_listener(&mut self, listener: impl OnChangeListener + 'static) {
        self.input.set_listener(Box::new(listener));
    }

    /// Builder form of [`Self::set_on_change_listener`].
    #[must_use]
    pub fn with_on_change_listener(mut self, listener: impl OnChangeListener + 'static) -> Self {
        self.set_on_change_listener(listener);
        self
    }

    /// Remove the progress listener.
    pub fn clear_on_change_listener(&mut self) {
        self.input.clear_listener();
    }

    /// Change the maximum value. No notification fires; later updates use the new scale.
    pub fn set_max_value(&mut self, max: u32) {
        tracing::trace!(max, "max value changed");
        self.config.set_max_value(max);
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &SeekBarConfig {
        &self.config
    }

    /// Maximum value.
    #[must_use]
    pub const fn max_value(&self) -> u32 {
        self.config.get_max_value()
    }

    /// Configured initial value. Not applied: the thumb starts at the left edge.
    #[must_use]
    pub const fn initial_value(&self) -> u32 {
        self.config.get_initial_value()
    }

    /// Committed content bounds, once a layout pass has succeeded.
    #[must_use]
    pub const fn content_bounds(&self) -> Option<ContentBounds> {
        self.layout.bounds()
    }

    /// Thumb x position (0 before layout).
    #[must_use]
    pub const fn progress_x(&self) -> f32 {
        self.input.progress().x()
    }

    /// Fraction of the track covered, in `[0, 1]` (0 before layout).
    #[must_use]
    pub fn percentage(&self) -> f32 {
        self.layout
            .bounds()
            .map_or(0.0, |bounds| self.input.progress().percentage(&bounds))
    }

    /// Current value, truncated toward zero.
    #[must_use]
    pub fn value(&self) -> u32 {
        crate::input::value_for(self.percentage(), self.max_value())
    }

    /// Whether an accepted press has not yet been released.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// Whether the widget is attached to a live surface.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the redraw timer is ticking.
    #[must_use]
    pub fn is_redraw_scheduled(&self) -> bool {
        self.timer.as_ref().is_some_and(RedrawTimer::is_running)
    }

    /// Renderer state, for inspection.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    fn frame_state(&self) -> Frame {
        Frame {
            progress_x: self.progress_x(),
            percentage: self.percentage(),
            value: self.value(),
        }
    }
}

impl Widget for BalloonSeekBar {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        LayoutEngine::measure(&self.config, self.frame.size(), width, height)
    }

    fn layout(&mut self, frame: Rect) -> LayoutResult {
        self.frame = frame;
        match self.layout.commit(&self.config, frame.size()) {
            Ok(Some(bounds)) => {
                self.renderer.set_bounds(&self.config, &bounds);
                self.input.reset(&bounds);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "content bounds not committed"),
        }
        LayoutResult { size: frame.size() }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.renderer.paint(canvas, self.frame_state());
    }

    fn event(&mut self, event: &PointerEvent) -> bool {
        let (Some(bounds), Some(geometry)) = (self.layout.bounds(), self.renderer.geometry())
        else {
            return false;
        };
        self.input.handle(
            event,
            &bounds,
            &geometry.background,
            self.config.get_touch_policy(),
            self.config.get_max_value(),
        )
    }

    fn on_attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.renderer.bitmaps_mut().ensure(&self.config);
        match RedrawTimer::start(self.config.get_redraw_interval()) {
            Ok((timer, redraws)) => {
                self.timer = Some(timer);
                self.redraws = Some(redraws);
            }
            Err(err) => tracing::warn!(%err, "redraw timer unavailable"),
        }
    }

    fn on_detach(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.redraws = None;
        let released = self.renderer.bitmaps_mut().recycle();
        if released > 0 {
            tracing::debug!(released, "released seek bar bitmaps");
        }
        self.layout.reset();
        self.attached = false;
    }

    fn poll_redraw(&mut self) -> bool {
        self.redraws.as_ref().is_some_and(|queue| queue.drain() > 0)
    }

    fn bounds(&self) -> Rect {
        self.frame
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }
}
