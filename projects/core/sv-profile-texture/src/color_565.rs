//! The RGB565 words stored in every slot of a packed texture.

use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// as stored in each channel slot of a packed avatar texture.
///
/// Unlike BCn endpoints, these colors are expanded to 8 bits by shifting alone.
/// The low bits are never filled, so the brightest value that can be decoded is
/// `(248, 252, 248)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Reads a [`Color565`] from two little-endian bytes.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// Creates a new [`Color565`] from separate RGB components.
    ///
    /// The low 3 (red, blue) or 2 (green) bits of each component are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sv_profile_texture::color_565::Color565;
    ///
    /// assert_eq!(Color565::from_rgb(255, 255, 255).raw_value(), 0xFFFF);
    /// assert_eq!(Color565::from_rgb(7, 3, 7).raw_value(), 0);
    /// ```
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16) >> 3;
        let g = (g as u16) >> 2;
        let b = (b as u16) >> 3;
        Self {
            value: (r << 11) | (g << 5) | b,
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    /// Returns the value as it is laid out in a packed buffer.
    #[inline]
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.value.to_le_bytes()
    }

    /// Extracts the 8-bit red component (`0..=248`)
    #[inline]
    pub fn red(&self) -> u8 {
        (((self.value & 0b11111000_00000000) >> 11) << 3) as u8
    }

    /// Extracts the 8-bit green component (`0..=252`)
    #[inline]
    pub fn green(&self) -> u8 {
        (((self.value & 0b00000111_11100000) >> 5) << 2) as u8
    }

    /// Extracts the 8-bit blue component (`0..=248`)
    #[inline]
    pub fn blue(&self) -> u8 {
        ((self.value & 0b00000000_00011111) << 3) as u8
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use sv_profile_texture::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_raw(0xF800).to_color_8888();
    /// assert_eq!(rgba8888.r, 248);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub fn to_color_8888(&self) -> Color8888 {
        self.to_color_8888_with_alpha(255)
    }

    /// Converts this RGB565 color to a RGBA8888 color with the specified alpha value
    #[inline]
    pub fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), alpha)
    }
}

/// Decodes a packed RGB565 word into its shift-expanded `(r, g, b)` components.
#[inline]
pub fn decode565(word: u16) -> (u8, u8, u8) {
    let color = Color565::from_raw(word);
    (color.red(), color.green(), color.blue())
}

/// Packs 8-bit components into an RGB565 word, dropping the low bits of each.
///
/// `encode565(decode565(w))` always equals `w`, but `decode565(encode565(..))`
/// loses up to 7 (red, blue) or 3 (green) levels.
#[inline]
pub fn encode565(r: u8, g: u8, b: u8) -> u16 {
    Color565::from_rgb(r, g, b).raw_value()
}
