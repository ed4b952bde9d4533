//! Error type of the image level decoding functions.

use thiserror::Error;

/// Errors returned when the buffers handed to an image decode don't fit its dimensions.
///
/// Decoding a single block never fails.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The image has no pixels.
    #[error("Invalid image size {width}x{height}. Width and height must be non-zero.")]
    ZeroDimension {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// The block data doesn't hold exactly one block per 4x4 tile.
    #[error("Invalid block data length: {actual} bytes, expected {expected} bytes.")]
    InvalidLength {
        /// The required size in bytes
        expected: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The output buffer can't hold the RGBA8 image.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },
}
