//! Serializes an image back into the packed layout.
//!
//! Only the Light slot of each group is written. The Dark and mask slots of the packed
//! format are not reconstructed, so a picture written here reads back through
//! [`BlendStrategy::LightOnly`](crate::BlendStrategy::LightOnly) but not through the masked
//! blends.

use crate::error::TextureError;
use crate::image::RgbaImage;
use crate::layout::GROUP_SIZE;
use alloc::vec;
use alloc::vec::Vec;

/// Bytes of packed data needed to hold `image`.
#[inline]
pub fn encoded_len(image: &RgbaImage) -> usize {
    image.width() * image.height() * GROUP_SIZE
}

/// Encodes `image` into a new zero-filled buffer of `dest_len` bytes.
///
/// Pixels are written in row-major order as little-endian RGB565 words at a stride of 8,
/// starting at offset 0. Everything else stays zero. Alpha is discarded.
///
/// # Errors
///
/// [`TextureError::Size`] if `width * height * 8 > dest_len`.
///
/// # Examples
///
/// ```
/// use sv_profile_texture::{encode_image, Color8888, RgbaImage};
///
/// let image = RgbaImage::from_pixels(2, 1, vec![
///     Color8888::opaque(255, 0, 0),
///     Color8888::opaque(0, 0, 255),
/// ]).unwrap();
///
/// let packed = encode_image(&image, 20).unwrap();
/// assert_eq!(packed.len(), 20);
/// assert_eq!(packed[0..2], [0x00, 0xF8]);
/// assert_eq!(packed[8..10], [0x1F, 0x00]);
/// ```
pub fn encode_image(image: &RgbaImage, dest_len: usize) -> Result<Vec<u8>, TextureError> {
    check_capacity(image, dest_len)?;
    let mut dest = vec![0u8; dest_len];
    write_light_slots(image, &mut dest);
    Ok(dest)
}

/// Encodes `image` over an existing buffer.
///
/// Only the Light slot of each of the first `width * height` groups is overwritten. The
/// remaining bytes keep whatever the caller put there, which is not read.
///
/// # Errors
///
/// [`TextureError::Size`] if `width * height * 8 > dest.len()`. `dest` is left untouched.
pub fn encode_image_into(image: &RgbaImage, dest: &mut [u8]) -> Result<(), TextureError> {
    check_capacity(image, dest.len())?;
    write_light_slots(image, dest);
    Ok(())
}

fn check_capacity(image: &RgbaImage, dest_len: usize) -> Result<(), TextureError> {
    let needed = encoded_len(image);
    if needed > dest_len {
        return Err(TextureError::Size {
            needed,
            actual: dest_len,
        });
    }
    Ok(())
}

fn write_light_slots(image: &RgbaImage, dest: &mut [u8]) {
    for (group, pixel) in dest.chunks_exact_mut(GROUP_SIZE).zip(image.pixels()) {
        group[..2].copy_from_slice(&pixel.to_color_565().to_le_bytes());
    }
}
