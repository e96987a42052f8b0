//! Error types for balloon-core.

use thiserror::Error;

/// Errors raised while preparing bitmaps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BitmapError {
    /// Scale factor is zero, negative or not finite.
    #[error("invalid bitmap scale: {0}")]
    InvalidScale(f32),

    /// Scaled size collapsed to zero pixels.
    #[error("bitmap would be empty ({width}x{height})")]
    Empty {
        /// Scaled width
        width: u32,
        /// Scaled height
        height: u32,
    },

    /// Scaled size exceeds the bitmap size limit.
    #[error("bitmap too large ({width}x{height})")]
    TooLarge {
        /// Scaled width
        width: u32,
        /// Scaled height
        height: u32,
    },

    /// RGBA buffer does not match the declared dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    PixelLength {
        /// Required byte count
        expected: usize,
        /// Supplied byte count
        actual: usize,
    },
}

/// Errors raised by the redraw timer.
#[derive(Debug, Error)]
pub enum TimerError {
    /// Period must be non-zero.
    #[error("redraw period must be greater than zero")]
    ZeroPeriod,

    /// The OS refused to spawn the timer thread.
    #[error("failed to spawn redraw timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}
