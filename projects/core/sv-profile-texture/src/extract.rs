//! Materializes a single logical channel of a packed texture as an [`RgbaImage`].

use crate::channel::{mask_channel, ExtractOptions, LogicalChannel};
use crate::color_565::Color565;
use crate::error::TextureError;
use crate::image::RgbaImage;
use crate::layout::{validate_buffer, TextureDimensions, GROUP_SIZE};
use alloc::vec::Vec;

/// Extracts one channel of `buffer` as a `width/4 × height/4` image.
///
/// Pixels are visited in row-major order. Each pixel's color is the channel's decoded RGB565
/// word. When `options.mask_kind` is not [`MaskKind::None`](crate::MaskKind::None) the alpha is
/// derived from the resolved mask channel's greyscale value, otherwise it is 255.
///
/// # Errors
///
/// - [`TextureError::Layout`] if `buffer` is shorter than `dims` require.
/// - [`TextureError::Configuration`] if the mask request is invalid for `channel`.
///
/// # Examples
///
/// ```
/// use sv_profile_texture::{extract_channel, ExtractOptions, LogicalChannel, TextureDimensions};
///
/// let packed = [0xFF; 8];
/// let image = extract_channel(
///     &packed,
///     TextureDimensions::new(4, 4),
///     LogicalChannel::Light,
///     &ExtractOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(image.pixels()[0].r, 248);
/// assert_eq!(image.pixels()[0].a, 255);
/// ```
pub fn extract_channel(
    buffer: &[u8],
    dims: TextureDimensions,
    channel: LogicalChannel,
    options: &ExtractOptions,
) -> Result<RgbaImage, TextureError> {
    let mask = mask_channel(channel, options)?;
    validate_buffer(dims, buffer.len())?;

    let groups = &buffer[..dims.required_len()];
    let color_at = channel.byte_offset();
    let pixels: Vec<_> = match mask {
        None => groups
            .chunks_exact(GROUP_SIZE)
            .map(|group| word(group, color_at).to_color_8888())
            .collect(),
        Some(mask) => {
            let mask_at = mask.byte_offset();
            groups
                .chunks_exact(GROUP_SIZE)
                .map(|group| {
                    let greyscale = word(group, mask_at)
                        .to_color_8888()
                        .greyscale(options.reduction);
                    word(group, color_at).to_color_8888_with_alpha(options.mask_kind.alpha(greyscale))
                })
                .collect()
        }
    };

    RgbaImage::from_pixels(dims.output_width(), dims.output_height(), pixels)
}

#[inline(always)]
fn word(group: &[u8], offset: usize) -> Color565 {
    Color565::from_le_bytes([group[offset], group[offset + 1]])
}
