//! Pointer input events.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer identifier for multi-pointer tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Touch pointer
    #[default]
    Touch,
    /// Mouse pointer
    Mouse,
    /// Pen/stylus pointer
    Pen,
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerAction {
    /// Pointer pressed
    Down,
    /// Pointer dragged while pressed
    Move,
    /// Pointer released
    Up,
    /// Gesture cancelled by the host (e.g., palm rejection)
    Cancel,
}

/// A single pointer sample delivered to a widget, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Gesture phase
    pub action: PointerAction,
    /// Position
    pub position: Point,
    /// Pointer ID
    pub pointer_id: PointerId,
    /// Pointer type
    pub pointer_type: PointerType,
}

impl PointerEvent {
    /// Create a touch event for the primary pointer.
    #[must_use]
    pub const fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Point::new(x, y),
            pointer_id: PointerId(0),
            pointer_type: PointerType::Touch,
        }
    }

    /// Press at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    /// Drag to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    /// Release at `(x, y)`.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    /// Cancel the current gesture.
    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(PointerAction::Cancel, 0.0, 0.0)
    }

    /// Override the device type.
    #[must_use]
    pub const fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }
}
