//! Error types for block store operations.

use sv_profile_texture::TextureError;
use thiserror::Error;

/// Errors that can occur while reading or importing an avatar slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// No block is stored under the key.
    #[error("Block {0:#010X} does not exist.")]
    MissingBlock(u32),

    /// The block exists but holds a scalar where a buffer was expected, or the reverse.
    #[error("Block {key:#010X} does not hold a {expected}.")]
    WrongBlockType {
        /// The block key
        key: u32,
        /// What the caller expected to find
        expected: &'static str,
    },

    /// The image to import does not have the dimensions the slot expects.
    #[error("Image is {actual:?} pixels, but the slot expects {expected:?}.")]
    DimensionMismatch {
        /// Expected `(width, height)`
        expected: (usize, usize),
        /// Actual `(width, height)`
        actual: (usize, usize),
    },

    /// The slot cannot be written to.
    #[error("The {0} slot cannot be imported into.")]
    NotImportable(&'static str),

    /// Decoding or encoding the packed texture failed.
    #[error(transparent)]
    Texture(#[from] TextureError),
}
