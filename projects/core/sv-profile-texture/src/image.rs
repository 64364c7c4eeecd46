//! Owned RGBA8888 raster produced by extraction and consumed by encoding.

use crate::color_8888::Color8888;
use crate::error::TextureError;
use alloc::vec::Vec;

/// A row-major RGBA8888 image.
///
/// Pixels are stored contiguously, `pixels[y * width + x]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<Color8888>,
}

impl RgbaImage {
    /// Creates an opaque black image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: alloc::vec![Color8888::opaque(0, 0, 0); width * height],
        }
    }

    /// Wraps existing pixels.
    ///
    /// # Errors
    ///
    /// [`TextureError::InvalidRaster`] if `pixels.len() != width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Color8888>,
    ) -> Result<Self, TextureError> {
        if pixels.len() != width * height {
            return Err(TextureError::InvalidRaster {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds an image from interleaved `RGBA` bytes, as produced by most image libraries.
    ///
    /// # Errors
    ///
    /// [`TextureError::InvalidRaster`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba8_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, TextureError> {
        if bytes.len() != width * height * 4 {
            return Err(TextureError::InvalidRaster {
                expected: width * height * 4,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Color8888::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flattens the image into interleaved `RGBA` bytes.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        bytes
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color8888] {
        &self.pixels
    }

    /// Gets the pixel at `(x, y)`, or [`None`] if out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color8888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Iterates over the rows of the image.
    pub fn rows(&self) -> impl Iterator<Item = &[Color8888]> {
        // chunks_exact panics on 0, and an image with no columns has no row data anyway.
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Consumes the image, returning its pixels.
    pub fn into_pixels(self) -> Vec<Color8888> {
        self.pixels
    }
}
