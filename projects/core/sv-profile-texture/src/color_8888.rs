use crate::color_565::Color565;

/// Represents a single RGBA8888 pixel of an extracted or blended image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use sv_profile_texture::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a fully opaque pixel.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the same pixel with its alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Packs the color channels into RGB565. Alpha is dropped.
    #[inline]
    pub fn to_color_565(&self) -> Color565 {
        Color565::from_rgb(self.r, self.g, self.b)
    }

    /// Arithmetic mean of the three color channels, truncated.
    #[inline]
    pub fn averaged_greyscale(&self) -> u8 {
        averaged_greyscale(self.r, self.g, self.b)
    }

    /// Rec. 709 luma of the three color channels, rounded to nearest.
    #[inline]
    pub fn luminosity_greyscale(&self) -> u8 {
        luminosity_greyscale(self.r, self.g, self.b)
    }

    /// Collapses the color channels with the given reduction.
    #[inline]
    pub fn greyscale(&self, reduction: GreyscaleReduction) -> u8 {
        match reduction {
            GreyscaleReduction::Averaged => self.averaged_greyscale(),
            GreyscaleReduction::Luminosity => self.luminosity_greyscale(),
        }
    }
}

/// Selects how a mask pixel is collapsed into a single intensity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash, derive_enum_all_values::AllValues)]
pub enum GreyscaleReduction {
    /// `(r + g + b) / 3`
    #[default]
    Averaged,
    /// `0.2126 r + 0.7152 g + 0.0722 b`, rounded
    Luminosity,
}

/// Arithmetic mean `(r + g + b) / 3` with integer truncation.
#[inline]
pub fn averaged_greyscale(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Perceptual luma using the Rec. 709 weights, rounded half up.
///
/// Evaluated in fixed point (weights scaled by 10000) so the result does not depend on
/// float rounding.
#[inline]
pub fn luminosity_greyscale(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 2126 * r as u32 + 7152 * g as u32 + 722 * b as u32;
    ((weighted + 5000) / 10000) as u8
}
