//! Maps output pixels and channels to byte offsets in a packed buffer.

use crate::channel::LogicalChannel;
use crate::color_565::Color565;
use crate::error::TextureError;

/// Size of one packed pixel group (four RGB565 words).
pub const GROUP_SIZE: usize = 8;

/// Source dimensions of a packed texture, as stored in the save's metadata blocks.
///
/// The packed data holds one group per 4×4 source pixels, so the image that comes out of
/// it is a quarter of the declared width and height.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureDimensions {
    /// Declared width in source pixels
    pub width: usize,
    /// Declared height in source pixels
    pub height: usize,
}

impl TextureDimensions {
    /// Creates dimensions from the declared source width and height.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Creates the source dimensions that produce an output image of the given size.
    #[inline]
    pub const fn from_output(output_width: usize, output_height: usize) -> Self {
        Self::new(output_width * 4, output_height * 4)
    }

    /// Width of the extracted image.
    #[inline]
    pub const fn output_width(&self) -> usize {
        self.width / 4
    }

    /// Height of the extracted image.
    #[inline]
    pub const fn output_height(&self) -> usize {
        self.height / 4
    }

    /// Number of pixel groups in the packed buffer.
    #[inline]
    pub const fn group_count(&self) -> usize {
        self.output_width() * self.output_height()
    }

    /// Minimum length of a packed buffer with these dimensions.
    #[inline]
    pub const fn required_len(&self) -> usize {
        self.group_count() * GROUP_SIZE
    }
}

/// Computes the offset of `channel`'s word in the group at `group_index`.
///
/// `group_index` is `y_out * out_width + x_out`.
///
/// # Errors
///
/// [`TextureError::Layout`] if the word would end past `buffer_len`.
///
/// # Examples
///
/// ```
/// use sv_profile_texture::{byte_offset, LogicalChannel};
///
/// assert_eq!(byte_offset(3, LogicalChannel::DarkMask, 64), Ok(30));
/// assert!(byte_offset(8, LogicalChannel::Light, 64).is_err());
/// ```
#[inline]
pub fn byte_offset(
    group_index: usize,
    channel: LogicalChannel,
    buffer_len: usize,
) -> Result<usize, TextureError> {
    let offset = group_index * GROUP_SIZE + channel.byte_offset();
    if offset + 2 > buffer_len {
        return Err(TextureError::Layout {
            needed: offset + 2,
            actual: buffer_len,
        });
    }
    Ok(offset)
}

/// Row-major index of the group holding output pixel `(x, y)`.
#[inline]
pub const fn group_index(out_width: usize, x: usize, y: usize) -> usize {
    y * out_width + x
}

/// [`byte_offset`] addressed by output pixel coordinate.
///
/// # Errors
///
/// [`TextureError::Layout`] if the word would end past `buffer_len`.
#[inline]
pub fn pixel_byte_offset(
    out_width: usize,
    x: usize,
    y: usize,
    channel: LogicalChannel,
    buffer_len: usize,
) -> Result<usize, TextureError> {
    byte_offset(group_index(out_width, x, y), channel, buffer_len)
}

/// Inverse of [`byte_offset`]: the group index and channel a word offset belongs to.
///
/// Returns [`None`] for offsets that do not start a word.
#[inline]
pub fn group_and_channel(offset: usize) -> Option<(usize, LogicalChannel)> {
    let channel = LogicalChannel::from_byte_offset(offset % GROUP_SIZE)?;
    Some((offset / GROUP_SIZE, channel))
}

/// Checks that `buffer_len` covers every group of `dims`.
///
/// # Errors
///
/// [`TextureError::Layout`] if the buffer is shorter than [`TextureDimensions::required_len`].
#[inline]
pub fn validate_buffer(dims: TextureDimensions, buffer_len: usize) -> Result<(), TextureError> {
    let needed = dims.required_len();
    if buffer_len < needed {
        return Err(TextureError::Layout {
            needed,
            actual: buffer_len,
        });
    }
    Ok(())
}

/// Reads the color stored for `channel` in the group at `group_index`.
///
/// # Errors
///
/// [`TextureError::Layout`] if the word lies outside `buffer`.
#[inline]
pub fn read_color(
    buffer: &[u8],
    group_index: usize,
    channel: LogicalChannel,
) -> Result<Color565, TextureError> {
    let offset = byte_offset(group_index, channel, buffer.len())?;
    Ok(Color565::from_le_bytes([buffer[offset], buffer[offset + 1]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LogicalChannel::Light, 0)]
    #[case(0, LogicalChannel::Dark, 2)]
    #[case(0, LogicalChannel::LightMask, 4)]
    #[case(0, LogicalChannel::DarkMask, 6)]
    #[case(5, LogicalChannel::Light, 40)]
    #[case(5, LogicalChannel::DarkMask, 46)]
    fn computes_offsets(
        #[case] group: usize,
        #[case] channel: LogicalChannel,
        #[case] expected: usize,
    ) {
        assert_eq!(byte_offset(group, channel, 48), Ok(expected));
        assert_eq!(group_and_channel(expected), Some((group, channel)));
    }

    #[test]
    fn rejects_offsets_past_end() {
        // Last word of a 2-group buffer ends exactly at 16.
        assert_eq!(byte_offset(1, LogicalChannel::DarkMask, 16), Ok(14));
        assert_eq!(
            byte_offset(1, LogicalChannel::DarkMask, 15),
            Err(TextureError::Layout {
                needed: 16,
                actual: 15
            })
        );
        assert!(byte_offset(2, LogicalChannel::Light, 16).is_err());
    }

    #[test]
    fn addresses_pixels_in_row_major_order() {
        // 3 groups per row, pixel (1, 2) is group 7.
        assert_eq!(group_index(3, 1, 2), 7);
        assert_eq!(pixel_byte_offset(3, 1, 2, LogicalChannel::Dark, 72), Ok(58));
        assert!(pixel_byte_offset(3, 2, 2, LogicalChannel::Light, 64).is_err());
    }

    #[test]
    fn odd_offsets_are_not_words() {
        assert_eq!(group_and_channel(3), None);
        assert_eq!(group_and_channel(9), None);
    }

    #[rstest]
    #[case::picture(1440, 832, 360, 208, 599_040)]
    #[case::icon(224, 224, 56, 56, 25_088)]
    #[case::not_multiple_of_four(10, 7, 2, 1, 16)]
    #[case::empty(0, 0, 0, 0, 0)]
    fn derives_output_dimensions(
        #[case] width: usize,
        #[case] height: usize,
        #[case] out_width: usize,
        #[case] out_height: usize,
        #[case] required: usize,
    ) {
        let dims = TextureDimensions::new(width, height);
        assert_eq!(dims.output_width(), out_width);
        assert_eq!(dims.output_height(), out_height);
        assert_eq!(dims.required_len(), required);
    }

    #[test]
    fn validates_buffer_length() {
        let dims = TextureDimensions::new(8, 8);
        assert_eq!(validate_buffer(dims, 32), Ok(()));
        assert_eq!(validate_buffer(dims, 64), Ok(()));
        assert_eq!(
            validate_buffer(dims, 31),
            Err(TextureError::Layout {
                needed: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn reads_little_endian_words() {
        let buffer = [0x1F, 0x00, 0xE0, 0x07, 0x00, 0xF8, 0xFF, 0xFF];
        assert_eq!(read_color(&buffer, 0, LogicalChannel::Light).unwrap().raw_value(), 0x001F);
        assert_eq!(read_color(&buffer, 0, LogicalChannel::Dark).unwrap().raw_value(), 0x07E0);
        assert_eq!(
            read_color(&buffer, 0, LogicalChannel::LightMask).unwrap().raw_value(),
            0xF800
        );
        assert_eq!(
            read_color(&buffer, 0, LogicalChannel::DarkMask).unwrap().raw_value(),
            0xFFFF
        );
        assert!(read_color(&buffer, 1, LogicalChannel::Light).is_err());
    }
}
