//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by the host:
//!
//! 1. **Measure**: report a desired size given per-axis [`MeasureSpec`]s
//! 2. **Layout**: receive the final frame in local coordinates
//! 3. **Paint**: draw into a [`Canvas`] without mutating state
//!
//! Around that cycle sit the attachment hooks. `on_attach` runs when the
//! widget joins a live surface, `on_detach` when it leaves; widgets acquire and
//! release per-surface resources (timers, bitmaps) there.
//!
//! All of these run on the UI thread.

use crate::canvas::Canvas;
use crate::event::PointerEvent;
use crate::geometry::{Rect, Size};
use crate::measure::MeasureSpec;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget {
    /// Compute the desired size under the given constraints.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Accept the frame allocated by the parent.
    fn layout(&mut self, frame: Rect) -> LayoutResult;

    /// Generate draw commands for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle a pointer event. Returns `true` if the event was consumed.
    fn event(&mut self, event: &PointerEvent) -> bool;

    /// Called when the widget joins a live surface.
    fn on_attach(&mut self) {}

    /// Called when the widget leaves its surface.
    fn on_detach(&mut self) {}

    /// Drain self-scheduled repaint requests. Returns `true` if a repaint is due.
    fn poll_redraw(&mut self) -> bool {
        false
    }

    /// Get the current frame of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }
}
