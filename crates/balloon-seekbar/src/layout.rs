//! Layout engine: measurement and the one-shot content bounds commit.

use crate::config::SeekBarConfig;
use crate::error::LayoutError;
use balloon_core::{resolve_size, MeasureSpec, Rect, Size};
use std::cmp::Ordering;

/// Area the track and thumb live in, after padding and label reservation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentBounds {
    /// Top edge
    pub top: f32,
    /// Left edge (progress minimum)
    pub left: f32,
    /// Bottom edge
    pub bottom: f32,
    /// Right edge (progress maximum)
    pub right: f32,
}

impl ContentBounds {
    /// Create bounds from edges.
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Horizontal extent of the track.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// As a float rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Computes desired sizes and commits [`ContentBounds`] once.
///
/// After the first successful [`commit`](Self::commit) further calls return
/// the stored bounds unchanged, even for a different widget size. A widget
/// that is resized keeps its original bounds until [`reset`](Self::reset)
/// runs on detach.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    committed: Option<ContentBounds>,
}

impl LayoutEngine {
    /// Create an engine with nothing committed.
    #[must_use]
    pub const fn new() -> Self {
        Self { committed: None }
    }

    /// Resolve the widget width: padding plus current content width.
    #[must_use]
    pub fn measure_width(config: &SeekBarConfig, current: f32, spec: MeasureSpec) -> f32 {
        let desired = config.get_padding().horizontal() + current;
        resolve_size(desired, spec)
    }

    /// Resolve the widget height: padding, current height, track and balloon.
    #[must_use]
    pub fn measure_height(config: &SeekBarConfig, current: f32, spec: MeasureSpec) -> f32 {
        let extra = (config.background_stroke_width() + config.balloon_height()).round();
        let desired = config.get_padding().vertical() + current + extra;
        resolve_size(desired, spec)
    }

    /// Both axes at once.
    #[must_use]
    pub fn measure(
        config: &SeekBarConfig,
        current: Size,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Size {
        Size::new(
            Self::measure_width(config, current.width, width),
            Self::measure_height(config, current.height, height),
        )
    }

    /// Compute bounds for a measured size without committing them.
    pub fn compute(config: &SeekBarConfig, measured: Size) -> Result<ContentBounds, LayoutError> {
        let padding = config.get_padding();
        let balloon = config.balloon_height().trunc();
        let reserved = config.reserved_text_width();

        let top = padding.top + balloon;
        let left = padding.left + reserved;
        let bottom = measured.height - padding.bottom + balloon;
        let right = measured.width - padding.right - reserved;

        // NaN edges compare as unordered and are rejected.
        if left.partial_cmp(&right) != Some(Ordering::Less) {
            return Err(LayoutError::NoWidth { left, right });
        }
        if top.partial_cmp(&bottom) != Some(Ordering::Less) {
            return Err(LayoutError::NoHeight { top, bottom });
        }
        Ok(ContentBounds::new(top, left, bottom, right))
    }

    /// Commit bounds on the first successful pass.
    ///
    /// Returns `Ok(Some(bounds))` when this call committed, `Ok(None)` when
    /// bounds were already committed, and an error when the size leaves no
    /// room (nothing is committed and a later pass may retry).
    pub fn commit(
        &mut self,
        config: &SeekBarConfig,
        measured: Size,
    ) -> Result<Option<ContentBounds>, LayoutError> {
        if self.committed.is_some() {
            return Ok(None);
        }
        let bounds = Self::compute(config, measured)?;
        tracing::debug!(
            top = bounds.top,
            left = bounds.left,
            bottom = bounds.bottom,
            right = bounds.right,
            "content bounds committed"
        );
        self.committed = Some(bounds);
        Ok(Some(bounds))
    }

    /// Committed bounds, if any.
    #[must_use]
    pub const fn bounds(&self) -> Option<ContentBounds> {
        self.committed
    }

    /// Whether a commit has happened.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed.is_some()
    }

    /// Forget the committed bounds.
    pub fn reset(&mut self) {
        self.committed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balloon_core::Insets;
    use proptest::prelude::*;

    fn bare() -> SeekBarConfig {
        SeekBarConfig::new().text_size(0.0)
    }

    // =========================================================================
    // Measure
    // =========================================================================

    #[test]
    fn test_measure_width_adds_padding() {
        let config = bare().padding(Insets::new(10.0, 0.0, 6.0, 0.0));
        assert_eq!(
            LayoutEngine::measure_width(&config, 100.0, MeasureSpec::Unspecified),
            116.0
        );
        assert_eq!(
            LayoutEngine::measure_width(&config, 100.0, MeasureSpec::AtMost(50.0)),
            50.0
        );
        assert_eq!(
            LayoutEngine::measure_width(&config, 100.0, MeasureSpec::Exactly(300.0)),
            300.0
        );
    }

    #[test]
    fn test_measure_height_reserves_track_and_balloon() {
        // stroke 9 + balloon 12 * 1.5 = 27
        let config = SeekBarConfig::new()
            .stroke_width(9.0)
            .padding(Insets::new(0.0, 2.0, 0.0, 3.0));
        assert_eq!(
            LayoutEngine::measure_height(&config, 0.0, MeasureSpec::Unspecified),
            32.0
        );
    }

    #[test]
    fn test_measure_height_rounds_extra() {
        // 0.6 + 13 * 1.5 = 20.1 -> 20
        let config = SeekBarConfig::new().stroke_width(0.6).text_size(13.0);
        assert_eq!(
            LayoutEngine::measure_height(&config, 0.0, MeasureSpec::Unspecified),
            20.0
        );
    }

    // =========================================================================
    // Compute
    // =========================================================================

    #[test]
    fn test_compute_default_text_size() {
        let config = SeekBarConfig::new().padding(Insets::new(4.0, 2.0, 6.0, 8.0));
        let bounds = LayoutEngine::compute(&config, Size::new(200.0, 60.0)).unwrap();
        assert_eq!(bounds.top, 2.0 + 18.0);
        assert_eq!(bounds.left, 4.0 + 12.0);
        assert_eq!(bounds.bottom, 60.0 - 8.0 + 18.0);
        assert_eq!(bounds.right, 200.0 - 6.0 - 12.0);
    }

    #[test]
    fn test_compute_truncates_fractional_reservations() {
        // balloon 12.5 * 1.5 = 18.75 -> 18, text 12.5 -> 12
        let config = SeekBarConfig::new().text_size(12.5);
        let bounds = LayoutEngine::compute(&config, Size::new(100.0, 40.0)).unwrap();
        assert_eq!(bounds.top, 18.0);
        assert_eq!(bounds.left, 12.0);
        assert_eq!(bounds.right, 88.0);
    }

    #[test]
    fn test_compute_rejects_no_width() {
        let config = SeekBarConfig::new();
        assert_eq!(
            LayoutEngine::compute(&config, Size::new(24.0, 40.0)),
            Err(LayoutError::NoWidth {
                left: 12.0,
                right: 12.0
            })
        );
    }

    #[test]
    fn test_compute_rejects_no_height() {
        let config = bare().padding(Insets::new(0.0, 10.0, 0.0, 10.0));
        assert!(matches!(
            LayoutEngine::compute(&config, Size::new(200.0, 20.0)),
            Err(LayoutError::NoHeight { .. })
        ));
    }

    #[test]
    fn test_compute_rejects_nan() {
        assert!(LayoutEngine::compute(&bare(), Size::new(f32::NAN, 20.0)).is_err());
    }

    // =========================================================================
    // Commit guard
    // =========================================================================

    #[test]
    fn test_commit_once() {
        let config = bare();
        let mut engine = LayoutEngine::new();
        assert!(!engine.is_committed());

        let first = engine.commit(&config, Size::new(200.0, 40.0)).unwrap();
        assert_eq!(first, Some(ContentBounds::new(0.0, 0.0, 40.0, 200.0)));

        let second = engine.commit(&config, Size::new(400.0, 80.0)).unwrap();
        assert_eq!(second, None);
        assert_eq!(engine.bounds(), first);
    }

    #[test]
    fn test_failed_commit_allows_retry() {
        let config = bare();
        let mut engine = LayoutEngine::new();
        assert!(engine.commit(&config, Size::ZERO).is_err());
        assert!(!engine.is_committed());

        assert!(engine.commit(&config, Size::new(50.0, 10.0)).unwrap().is_some());
        assert!(engine.is_committed());
    }

    #[test]
    fn test_reset_allows_new_commit() {
        let config = bare();
        let mut engine = LayoutEngine::new();
        engine.commit(&config, Size::new(200.0, 40.0)).unwrap();
        engine.reset();
        assert_eq!(engine.bounds(), None);

        engine.commit(&config, Size::new(300.0, 40.0)).unwrap();
        assert_eq!(engine.bounds().map(|b| b.right), Some(300.0));
    }

    #[test]
    fn test_content_bounds_dimensions() {
        let bounds = ContentBounds::new(10.0, 5.0, 30.0, 105.0);
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 20.0);
        assert_eq!(bounds.to_rect(), Rect::new(5.0, 10.0, 100.0, 20.0));
    }

    proptest! {
        #[test]
        fn prop_committed_bounds_are_ordered(
            w in 1.0f32..2000.0,
            h in 1.0f32..500.0,
            pad in 0.0f32..40.0,
            text in 0.0f32..30.0,
        ) {
            let config = SeekBarConfig::new()
                .text_size(text)
                .padding(Insets::uniform(pad));
            if let Ok(bounds) = LayoutEngine::compute(&config, Size::new(w, h)) {
                prop_assert!(bounds.left < bounds.right);
                prop_assert!(bounds.top < bounds.bottom);
            }
        }

        #[test]
        fn prop_second_commit_never_changes_bounds(
            w1 in 50.0f32..1000.0,
            w2 in 50.0f32..1000.0,
            h in 10.0f32..200.0,
        ) {
            let config = bare();
            let mut engine = LayoutEngine::new();
            let first = engine.commit(&config, Size::new(w1, h)).unwrap();
            engine.commit(&config, Size::new(w2, h * 2.0)).unwrap();
            prop_assert_eq!(engine.bounds(), first);
        }
    }
}
