#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod blend;
pub mod channel;
pub mod color_565;
pub mod color_8888;
pub mod encode;
pub mod error;
pub mod extract;
pub mod image;
pub mod layout;

pub use blend::{blend, BlendStrategy};
pub use channel::{mask_channel, ExtractOptions, LogicalChannel, MaskKind, MaskSource};
pub use color_565::{decode565, encode565, Color565};
pub use color_8888::{averaged_greyscale, luminosity_greyscale, Color8888, GreyscaleReduction};
pub use encode::{encode_image, encode_image_into, encoded_len};
pub use error::TextureError;
pub use extract::extract_channel;
pub use image::RgbaImage;
pub use layout::{byte_offset, validate_buffer, TextureDimensions};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
