//! Error types for balloon-seekbar.

use thiserror::Error;

/// Errors raised while loading seek bar attributes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The attribute document is not valid YAML or has the wrong shape.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// An attribute parsed but is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Attribute name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Why a layout pass could not commit content bounds.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// Padding and label reservation leave no horizontal room for the track.
    #[error("no horizontal room for the track (left {left} >= right {right})")]
    NoWidth {
        /// Computed left edge
        left: f32,
        /// Computed right edge
        right: f32,
    },

    /// Padding and balloon reservation leave no vertical room.
    #[error("no vertical room for the track (top {top} >= bottom {bottom})")]
    NoHeight {
        /// Computed top edge
        top: f32,
        /// Computed bottom edge
        bottom: f32,
    },
}
