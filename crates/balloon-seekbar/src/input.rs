//! Input mapper: pointer position to clamped progress, percentage and value.

use crate::layout::ContentBounds;
use balloon_core::{PointerAction, PointerEvent, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a press may start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPolicy {
    /// Presses must land inside the background track's vertical band.
    #[default]
    RestrictToTrack,
    /// Presses anywhere in the widget are accepted.
    Anywhere,
}

impl TouchPolicy {
    /// Whether a press at `y` is accepted given the background track band.
    #[must_use]
    pub fn accepts(self, band: &Rect, y: f32) -> bool {
        match self {
            Self::RestrictToTrack => band.contains_y(y),
            Self::Anywhere => true,
        }
    }
}

/// Receives progress notifications.
///
/// Both methods fire on every accepted update, percentage first.
pub trait OnChangeListener {
    /// Progress as a fraction of the track, in `[0, 1]`.
    fn on_percentage(&mut self, percentage: f32);

    /// Progress scaled to the maximum value and truncated.
    fn on_value(&mut self, value: u32);
}

/// [`OnChangeListener`] built from two closures.
pub struct FnListener<P, V> {
    on_percentage: P,
    on_value: V,
}

impl<P, V> FnListener<P, V>
where
    P: FnMut(f32),
    V: FnMut(u32),
{
    /// Create a listener from a percentage callback and a value callback.
    pub const fn new(on_percentage: P, on_value: V) -> Self {
        Self {
            on_percentage,
            on_value,
        }
    }
}

impl<P, V> OnChangeListener for FnListener<P, V>
where
    P: FnMut(f32),
    V: FnMut(u32),
{
    fn on_percentage(&mut self, percentage: f32) {
        (self.on_percentage)(percentage);
    }

    fn on_value(&mut self, value: u32) {
        (self.on_value)(value);
    }
}

impl<P, V> fmt::Debug for FnListener<P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

/// Current thumb position, constrained to the content bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressState {
    x: f32,
}

impl ProgressState {
    /// Start at the left edge of `bounds`.
    #[must_use]
    pub const fn at_start(bounds: &ContentBounds) -> Self {
        Self { x: bounds.left }
    }

    /// Current x position.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Clamp `x` into `bounds` and store it.
    ///
    /// Returns `false` (and changes nothing) for a NaN coordinate.
    pub fn set_clamped(&mut self, x: f32, bounds: &ContentBounds) -> bool {
        if x.is_nan() {
            return false;
        }
        self.x = if x < bounds.left {
            bounds.left
        } else if x > bounds.right {
            bounds.right
        } else {
            x
        };
        true
    }

    /// Fraction of the track covered, in `[0, 1]`. Zero for an empty track.
    #[must_use]
    pub fn percentage(&self, bounds: &ContentBounds) -> f32 {
        let width = bounds.width();
        if width <= 0.0 {
            return 0.0;
        }
        (self.x - bounds.left) / width
    }

    /// Percentage scaled to `max`, truncated toward zero.
    #[must_use]
    pub fn value(&self, bounds: &ContentBounds, max: u32) -> u32 {
        value_for(self.percentage(bounds), max)
    }
}

/// Scale a percentage to `max`, truncating toward zero.
///
/// Computed in `f64` so every `u32` maximum is exact at the ends of the track.
#[must_use]
pub fn value_for(percentage: f32, max: u32) -> u32 {
    (f64::from(percentage) * f64::from(max)) as u32
}

/// Applies pointer events to a [`ProgressState`] and notifies the listener.
#[derive(Default)]
pub struct InputMapper {
    progress: ProgressState,
    dragging: bool,
    listener: Option<Box<dyn OnChangeListener>>,
}

impl fmt::Debug for InputMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputMapper")
            .field("progress", &self.progress)
            .field("dragging", &self.dragging)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl InputMapper {
    /// Create a mapper with no listener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listener.
    pub fn set_listener(&mut self, listener: Box<dyn OnChangeListener>) {
        self.listener = Some(listener);
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) -> Option<Box<dyn OnChangeListener>> {
        self.listener.take()
    }

    /// Place the thumb at the start of freshly committed bounds.
    pub fn reset(&mut self, bounds: &ContentBounds) {
        self.progress = ProgressState::at_start(bounds);
        self.dragging = false;
    }

    /// Current progress.
    #[must_use]
    pub const fn progress(&self) -> ProgressState {
        self.progress
    }

    /// Whether an accepted press has not yet been released.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply one pointer event. Returns `true` if the event was consumed.
    ///
    /// `band` is the background track rectangle used by
    /// [`TouchPolicy::RestrictToTrack`].
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        bounds: &ContentBounds,
        band: &Rect,
        policy: TouchPolicy,
        max: u32,
    ) -> bool {
        let PointerEvent {
            action, position, ..
        } = *event;
        match action {
            PointerAction::Down => {
                if !policy.accepts(band, position.y) {
                    tracing::trace!(y = position.y, "press outside track band ignored");
                    return false;
                }
                self.dragging = true;
                self.update(position.x, bounds, max);
                true
            }
            PointerAction::Move => {
                self.update(position.x, bounds, max);
                true
            }
            PointerAction::Up | PointerAction::Cancel => std::mem::take(&mut self.dragging),
        }
    }

    /// Move the thumb to `x` (clamped) and notify.
    pub fn update(&mut self, x: f32, bounds: &ContentBounds, max: u32) {
        if !self.progress.set_clamped(x, bounds) {
            return;
        }
        let percentage = self.progress.percentage(bounds);
        let value = value_for(percentage, max);
        tracing::trace!(x = self.progress.x(), percentage, value, "progress updated");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_percentage(percentage);
            listener.on_value(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Note {
        Percentage(f32),
        Value(u32),
    }

    fn recorder() -> (Box<dyn OnChangeListener>, Rc<RefCell<Vec<Note>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let p = Rc::clone(&log);
        let v = Rc::clone(&log);
        let listener = FnListener::new(
            move |pct| p.borrow_mut().push(Note::Percentage(pct)),
            move |val| v.borrow_mut().push(Note::Value(val)),
        );
        (Box::new(listener), log)
    }

    fn bounds() -> ContentBounds {
        ContentBounds::new(0.0, 0.0, 40.0, 200.0)
    }

    fn band() -> Rect {
        Rect::from_ltrb(0.0, 10.0, 200.0, 20.0)
    }

    fn mapper() -> InputMapper {
        let mut mapper = InputMapper::new();
        mapper.reset(&bounds());
        mapper
    }

    // =========================================================================
    // TouchPolicy
    // =========================================================================

    #[test]
    fn test_touch_policy_default() {
        assert_eq!(TouchPolicy::default(), TouchPolicy::RestrictToTrack);
    }

    #[test]
    fn test_touch_policy_band_is_inclusive() {
        let policy = TouchPolicy::RestrictToTrack;
        assert!(policy.accepts(&band(), 10.0));
        assert!(policy.accepts(&band(), 20.0));
        assert!(!policy.accepts(&band(), 9.9));
        assert!(!policy.accepts(&band(), 20.1));
        assert!(TouchPolicy::Anywhere.accepts(&band(), -500.0));
    }

    #[test]
    fn test_touch_policy_serde() {
        let policy: TouchPolicy = serde_yaml_ng::from_str("restrict_to_track").unwrap();
        assert_eq!(policy, TouchPolicy::RestrictToTrack);
        let policy: TouchPolicy = serde_yaml_ng::from_str("anywhere").unwrap();
        assert_eq!(policy, TouchPolicy::Anywhere);
    }

    // =========================================================================
    // ProgressState
    // =========================================================================

    #[test]
    fn test_progress_clamps() {
        let mut progress = ProgressState::at_start(&bounds());
        assert!(progress.set_clamped(-10.0, &bounds()));
        assert_eq!(progress.x(), 0.0);
        assert!(progress.set_clamped(250.0, &bounds()));
        assert_eq!(progress.x(), 200.0);
        assert!(progress.set_clamped(50.0, &bounds()));
        assert_eq!(progress.x(), 50.0);
    }

    #[test]
    fn test_progress_ignores_nan() {
        let mut progress = ProgressState::at_start(&bounds());
        progress.set_clamped(30.0, &bounds());
        assert!(!progress.set_clamped(f32::NAN, &bounds()));
        assert_eq!(progress.x(), 30.0);
    }

    #[test]
    fn test_percentage_and_value() {
        let mut progress = ProgressState::at_start(&bounds());
        progress.set_clamped(50.0, &bounds());
        assert_eq!(progress.percentage(&bounds()), 0.25);
        assert_eq!(progress.value(&bounds(), 100), 25);
        assert_eq!(progress.value(&bounds(), 50), 12);
    }

    #[test]
    fn test_percentage_empty_track_is_zero() {
        let flat = ContentBounds::new(0.0, 10.0, 10.0, 10.0);
        let progress = ProgressState::at_start(&flat);
        assert_eq!(progress.percentage(&flat), 0.0);
    }

    #[test]
    fn test_value_truncates() {
        assert_eq!(value_for(0.999, 100), 99);
        assert_eq!(value_for(1.0, 100), 100);
        assert_eq!(value_for(0.0, 100), 0);
        assert_eq!(value_for(0.5, 0), 0);
    }

    #[test]
    fn test_value_exact_for_large_max() {
        assert_eq!(value_for(1.0, 16_777_217), 16_777_217);
        assert_eq!(value_for(1.0, u32::MAX), u32::MAX);
        assert_eq!(value_for(0.5, 16_777_217), 8_388_608);
    }

    // =========================================================================
    // InputMapper
    // =========================================================================

    #[test]
    fn test_press_inside_band_updates() {
        let mut mapper = mapper();
        let consumed = mapper.handle(
            &PointerEvent::down(50.0, 15.0),
            &bounds(),
            &band(),
            TouchPolicy::RestrictToTrack,
            100,
        );
        assert!(consumed);
        assert!(mapper.is_dragging());
        assert_eq!(mapper.progress().x(), 50.0);
    }

    #[test]
    fn test_press_outside_band_ignored() {
        let (listener, log) = recorder();
        let mut mapper = mapper();
        mapper.set_listener(listener);

        let consumed = mapper.handle(
            &PointerEvent::down(50.0, 35.0),
            &bounds(),
            &band(),
            TouchPolicy::RestrictToTrack,
            100,
        );
        assert!(!consumed);
        assert!(!mapper.is_dragging());
        assert_eq!(mapper.progress().x(), 0.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_press_anywhere_accepted() {
        let mut mapper = mapper();
        assert!(mapper.handle(
            &PointerEvent::down(80.0, 35.0),
            &bounds(),
            &band(),
            TouchPolicy::Anywhere,
            100,
        ));
        assert_eq!(mapper.progress().x(), 80.0);
    }

    #[test]
    fn test_move_ignores_y_and_press_state() {
        let mut mapper = mapper();
        assert!(mapper.handle(
            &PointerEvent::moved(120.0, -400.0),
            &bounds(),
            &band(),
            TouchPolicy::RestrictToTrack,
            100,
        ));
        assert_eq!(mapper.progress().x(), 120.0);
        assert!(!mapper.is_dragging());
    }

    #[test]
    fn test_release_and_cancel_keep_position() {
        let policy = TouchPolicy::RestrictToTrack;
        let mut mapper = mapper();
        mapper.handle(&PointerEvent::down(60.0, 15.0), &bounds(), &band(), policy, 100);

        assert!(mapper.handle(&PointerEvent::up(190.0, 15.0), &bounds(), &band(), policy, 100));
        assert!(!mapper.is_dragging());
        assert_eq!(mapper.progress().x(), 60.0);

        assert!(!mapper.handle(&PointerEvent::cancel(), &bounds(), &band(), policy, 100));
        assert_eq!(mapper.progress().x(), 60.0);
    }

    #[test]
    fn test_notifications_percentage_then_value() {
        let (listener, log) = recorder();
        let mut mapper = mapper();
        mapper.set_listener(listener);

        mapper.update(50.0, &bounds(), 100);
        assert_eq!(
            *log.borrow(),
            vec![Note::Percentage(0.25), Note::Value(25)]
        );
    }

    #[test]
    fn test_clamped_updates_still_notify() {
        let (listener, log) = recorder();
        let mut mapper = mapper();
        mapper.set_listener(listener);

        mapper.update(-5.0, &bounds(), 100);
        mapper.update(-50.0, &bounds(), 100);
        mapper.update(900.0, &bounds(), 100);
        assert_eq!(
            *log.borrow(),
            vec![
                Note::Percentage(0.0),
                Note::Value(0),
                Note::Percentage(0.0),
                Note::Value(0),
                Note::Percentage(1.0),
                Note::Value(100),
            ]
        );
    }

    #[test]
    fn test_update_without_listener_is_silent() {
        let mut mapper = mapper();
        mapper.update(100.0, &bounds(), 100);
        assert_eq!(mapper.progress().x(), 100.0);
    }

    #[test]
    fn test_clear_listener() {
        let (listener, log) = recorder();
        let mut mapper = mapper();
        mapper.set_listener(listener);
        assert!(mapper.clear_listener().is_some());
        mapper.update(100.0, &bounds(), 100);
        assert!(log.borrow().is_empty());
    }

    proptest! {
        #[test]
        fn prop_in_range_maps_exactly(x in 0.0f32..=200.0, max in 0u32..10_000) {
            let mut mapper = mapper();
            mapper.update(x, &bounds(), max);
            let progress = mapper.progress();
            let expected = (x - 0.0) / 200.0;
            prop_assert_eq!(progress.x(), x);
            prop_assert_eq!(progress.percentage(&bounds()), expected);
            prop_assert_eq!(progress.value(&bounds(), max), (f64::from(expected) * f64::from(max)) as u32);
        }

        #[test]
        fn prop_below_left_clamps(x in -10_000.0f32..0.0, max in 0u32..10_000) {
            let mut mapper = mapper();
            mapper.update(x, &bounds(), max);
            prop_assert_eq!(mapper.progress().x(), 0.0);
            prop_assert_eq!(mapper.progress().percentage(&bounds()), 0.0);
            prop_assert_eq!(mapper.progress().value(&bounds(), max), 0);
        }

        #[test]
        fn prop_above_right_clamps(x in 200.001f32..10_000.0, max in 0u32..10_000) {
            let mut mapper = mapper();
            mapper.update(x, &bounds(), max);
            prop_assert_eq!(mapper.progress().x(), 200.0);
            prop_assert_eq!(mapper.progress().percentage(&bounds()), 1.0);
            prop_assert_eq!(mapper.progress().value(&bounds(), max), max);
        }

        #[test]
        fn prop_repeated_moves_renotify(x in -100.0f32..300.0, repeats in 1usize..6) {
            let (listener, log) = recorder();
            let mut mapper = mapper();
            mapper.set_listener(listener);
            for _ in 0..repeats {
                mapper.update(x, &bounds(), 100);
            }
            let log = log.borrow();
            prop_assert_eq!(log.len(), repeats * 2);
            for pair in log.chunks(2) {
                prop_assert_eq!(&pair[0], &log[0]);
                prop_assert_eq!(&pair[1], &log[1]);
            }
        }
    }
}
