//! Error types for packed texture operations.

use crate::channel::{LogicalChannel, MaskKind, MaskSource};
use thiserror::Error;

/// Errors that can occur while extracting, blending or encoding a packed texture.
///
/// None of these are retried internally. Every operation either produces its full
/// output or returns one of these without a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    /// The packed buffer is shorter than its declared dimensions require.
    #[error("Packed buffer too short: need {needed} bytes, but only {actual} bytes available.")]
    Layout {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The requested channel and mask combination cannot be extracted.
    #[error("Invalid mask request: {kind:?} mask from {mask:?} cannot be applied to the {primary:?} channel.")]
    Configuration {
        /// The channel whose colors were requested
        primary: LogicalChannel,
        /// The mask the caller asked for
        mask: MaskSource,
        /// How the mask was to be applied
        kind: MaskKind,
    },

    /// The destination buffer cannot hold the encoded image.
    #[error("Destination buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    Size {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// A raster was built from a pixel buffer of the wrong length.
    #[error("Invalid raster: expected {expected} pixel values, got {actual}.")]
    InvalidRaster {
        /// Number of values implied by the raster dimensions
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
}
