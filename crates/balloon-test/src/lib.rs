//! Testing harness for balloon widgets.
//!
//! Mounts a widget in a fixed viewport, replays pointer gestures and captures
//! painted frames as [`DrawCommand`](balloon_core::DrawCommand) lists.

mod harness;

pub use harness::Harness;
