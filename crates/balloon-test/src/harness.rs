//! Test harness for driving a single widget.

use balloon_core::{
    DrawCommand, MeasureSpec, PointerEvent, RecordingCanvas, Rect, Size, Widget,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Test harness for interacting with a widget.
pub struct Harness<W: Widget> {
    /// Widget under test
    widget: W,
    /// Event queue for simulation
    event_queue: VecDeque<PointerEvent>,
    /// Current viewport size
    viewport: Rect,
    /// Whether each delivered event was consumed, in order
    consumed: Vec<bool>,
}

impl<W: Widget> Harness<W> {
    /// Create a new harness around a widget.
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            event_queue: VecDeque::new(),
            viewport: Rect::new(0.0, 0.0, 320.0, 64.0),
            consumed: Vec::new(),
        }
    }

    /// Set the viewport size.
    #[must_use]
    pub const fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self
    }

    // === Lifecycle ===

    /// Measure with exact viewport constraints, then lay out into the viewport.
    pub fn layout(&mut self) -> &mut Self {
        let size = self.widget.measure(
            MeasureSpec::Exactly(self.viewport.width),
            MeasureSpec::Exactly(self.viewport.height),
        );
        self.widget
            .layout(Rect::new(self.viewport.x, self.viewport.y, size.width, size.height));
        self
    }

    /// Resize the viewport and lay out again.
    pub fn resize(&mut self, width: f32, height: f32) -> &mut Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.layout()
    }

    /// Measure under arbitrary constraints.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.widget.measure(width, height)
    }

    /// Attach the widget to a (simulated) live surface.
    pub fn attach(&mut self) -> &mut Self {
        self.widget.on_attach();
        self
    }

    /// Detach the widget.
    pub fn detach(&mut self) -> &mut Self {
        self.widget.on_detach();
        self
    }

    // === Event Simulation ===

    /// Press at `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32) -> &mut Self {
        self.event_queue.push_back(PointerEvent::down(x, y));
        self.process_events();
        self
    }

    /// Move the pointer to `(x, y)`.
    pub fn drag_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.event_queue.push_back(PointerEvent::moved(x, y));
        self.process_events();
        self
    }

    /// Release at `(x, y)`.
    pub fn release(&mut self, x: f32, y: f32) -> &mut Self {
        self.event_queue.push_back(PointerEvent::up(x, y));
        self.process_events();
        self
    }

    /// Cancel the gesture.
    pub fn cancel(&mut self) -> &mut Self {
        self.event_queue.push_back(PointerEvent::cancel());
        self.process_events();
        self
    }

    /// Press at the first x, drag through the rest, release at the last, all at `y`.
    pub fn swipe(&mut self, y: f32, xs: &[f32]) -> &mut Self {
        let Some((&first, rest)) = xs.split_first() else {
            return self;
        };
        self.event_queue.push_back(PointerEvent::down(first, y));
        for &x in rest {
            self.event_queue.push_back(PointerEvent::moved(x, y));
        }
        let last = rest.last().copied().unwrap_or(first);
        self.event_queue.push_back(PointerEvent::up(last, y));
        self.process_events();
        self
    }

    /// Deliver an arbitrary event.
    pub fn send(&mut self, event: PointerEvent) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Frames ===

    /// Paint the widget once and return the recorded commands.
    #[must_use]
    pub fn frame(&self) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        self.widget.paint(&mut canvas);
        canvas.take_commands()
    }

    /// Paint only if the widget has a redraw pending.
    pub fn tick(&mut self) -> Option<Vec<DrawCommand>> {
        self.widget.poll_redraw().then(|| self.frame())
    }

    /// Poll for a self-scheduled redraw until one arrives or `timeout` passes.
    pub fn wait_for_redraw(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.widget.poll_redraw() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    // === Queries ===

    /// Widget under test.
    #[must_use]
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the widget under test.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Consume the harness and return the widget.
    pub fn into_inner(self) -> W {
        self.widget
    }

    /// Whether the most recently delivered event was consumed.
    #[must_use]
    pub fn last_consumed(&self) -> Option<bool> {
        self.consumed.last().copied()
    }

    /// Consumption flags of every delivered event, in order.
    #[must_use]
    pub fn consumed(&self) -> &[bool] {
        &self.consumed
    }

    // === Assertions ===

    /// Assert the kinds of the commands in the next frame.
    ///
    /// # Panics
    ///
    /// Panics if the kinds differ.
    pub fn assert_frame_kinds(&self, expected: &[&str]) -> &Self {
        let frame = self.frame();
        let actual: Vec<&str> = frame.iter().map(DrawCommand::kind).collect();
        assert_eq!(
            actual, expected,
            "Expected frame {expected:?} but painted {actual:?}"
        );
        self
    }

    /// Assert that the next frame contains a text command with `content`.
    ///
    /// # Panics
    ///
    /// Panics if no such text is painted.
    pub fn assert_text(&self, content: &str) -> &Self {
        let frame = self.frame();
        let found = frame
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { content: text, .. } if text == content));
        assert!(found, "Expected text '{content}' in frame {frame:?}");
        self
    }

    /// Assert that the next frame paints no text.
    ///
    /// # Panics
    ///
    /// Panics if any text is painted.
    pub fn assert_no_text(&self) -> &Self {
        let frame = self.frame();
        assert!(
            frame.iter().all(|c| c.kind() != "text"),
            "Expected no text in frame {frame:?}"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            let consumed = self.widget.event(&event);
            self.consumed.push(consumed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balloon_core::{Canvas, Color, LayoutResult, PointerAction};

    // Mock widget for testing
    #[derive(Default)]
    struct MockWidget {
        frame: Rect,
        seen: Vec<PointerAction>,
        pending_redraws: usize,
        attached: bool,
    }

    impl Widget for MockWidget {
        fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
            Size::new(width.resolve(100.0), height.resolve(20.0))
        }
        fn layout(&mut self, frame: Rect) -> LayoutResult {
            self.frame = frame;
            LayoutResult { size: frame.size() }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_round_rect(self.frame, 2.0, Color::GRAY);
        }
        fn event(&mut self, event: &PointerEvent) -> bool {
            self.seen.push(event.action);
            event.action == PointerAction::Down
        }
        fn on_attach(&mut self) {
            self.attached = true;
        }
        fn on_detach(&mut self) {
            self.attached = false;
        }
        fn poll_redraw(&mut self) -> bool {
            let due = self.pending_redraws > 0;
            self.pending_redraws = 0;
            due
        }
    }

    #[test]
    fn test_harness_layout_uses_viewport() {
        let mut harness = Harness::new(MockWidget::default()).viewport(200.0, 40.0);
        harness.layout();
        assert_eq!(harness.widget().frame, Rect::new(0.0, 0.0, 200.0, 40.0));

        harness.resize(300.0, 50.0);
        assert_eq!(harness.widget().frame.width, 300.0);
    }

    #[test]
    fn test_harness_swipe_sequence() {
        let mut harness = Harness::new(MockWidget::default());
        harness.swipe(5.0, &[1.0, 2.0, 3.0]);
        assert_eq!(
            harness.widget().seen,
            vec![
                PointerAction::Down,
                PointerAction::Move,
                PointerAction::Move,
                PointerAction::Up
            ]
        );
        assert_eq!(harness.consumed(), &[true, false, false, false]);
        assert_eq!(harness.last_consumed(), Some(false));
    }

    #[test]
    fn test_harness_swipe_empty_is_noop() {
        let mut harness = Harness::new(MockWidget::default());
        harness.swipe(5.0, &[]);
        assert!(harness.widget().seen.is_empty());
        assert_eq!(harness.last_consumed(), None);
    }

    #[test]
    fn test_harness_tick_paints_only_when_due() {
        let mut harness = Harness::new(MockWidget::default());
        harness.layout();
        assert!(harness.tick().is_none());

        harness.widget_mut().pending_redraws = 3;
        assert_eq!(harness.tick().map(|f| f.len()), Some(1));
        assert!(harness.tick().is_none());
    }

    #[test]
    fn test_harness_wait_for_redraw_times_out() {
        let mut harness = Harness::new(MockWidget::default());
        assert!(!harness.wait_for_redraw(Duration::from_millis(5)));
    }

    #[test]
    fn test_harness_attach_detach() {
        let mut harness = Harness::new(MockWidget::default());
        harness.attach();
        assert!(harness.widget().attached);
        harness.detach();
        assert!(!harness.into_inner().attached);
    }

    #[test]
    fn test_harness_assert_frame_kinds() {
        let mut harness = Harness::new(MockWidget::default());
        harness.layout();
        harness.assert_frame_kinds(&["round_rect"]).assert_no_text();
    }

    #[test]
    #[should_panic(expected = "Expected text")]
    fn test_harness_assert_text_fails() {
        let harness = Harness::new(MockWidget::default());
        harness.assert_text("42");
    }
}
