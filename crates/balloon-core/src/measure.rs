//! Measurement constraints handed down by the host layout pass.

use serde::{Deserialize, Serialize};

/// Constraint on one dimension during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// Parent dictates the exact size.
    Exactly(f32),
    /// Child may be as large as it wants up to this size.
    AtMost(f32),
    /// Parent imposes no constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a desired size against this constraint.
    #[must_use]
    pub fn resolve(self, desired: f32) -> f32 {
        resolve_size(desired, self)
    }
}

/// Reconcile the size a widget wants with the size its parent allows.
///
/// - `Exactly(s)` always yields `s`.
/// - `AtMost(s)` yields `desired` clipped to `s`.
/// - `Unspecified` yields `desired`.
#[must_use]
pub fn resolve_size(desired: f32, spec: MeasureSpec) -> f32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(max) => desired.min(max),
        MeasureSpec::Unspecified => desired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_exactly_ignores_desired() {
        assert_eq!(resolve_size(10.0, MeasureSpec::Exactly(300.0)), 300.0);
        assert_eq!(resolve_size(900.0, MeasureSpec::Exactly(300.0)), 300.0);
    }

    #[test]
    fn test_resolve_at_most_clips() {
        assert_eq!(resolve_size(120.0, MeasureSpec::AtMost(100.0)), 100.0);
        assert_eq!(resolve_size(80.0, MeasureSpec::AtMost(100.0)), 80.0);
    }

    #[test]
    fn test_resolve_unspecified() {
        assert_eq!(MeasureSpec::Unspecified.resolve(42.0), 42.0);
        assert_eq!(MeasureSpec::default(), MeasureSpec::Unspecified);
    }

    proptest! {
        #[test]
        fn prop_at_most_never_exceeds_limit(desired in 0.0f32..10_000.0, max in 0.0f32..10_000.0) {
            prop_assert!(resolve_size(desired, MeasureSpec::AtMost(max)) <= max);
        }
    }
}
