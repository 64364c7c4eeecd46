//! # Blend Engine
//!
//! Combines the channels of a packed texture into one displayable image.
//!
//! The save stores each avatar as two color images (Light, Dark) and two masks. How the game
//! itself combines them is not known exactly; [`BlendStrategy`] offers the direct channel
//! views plus three compositing rules, with [`BlendStrategy::DualMaskAlphaBlend`] as the
//! default rendering.

use crate::channel::{ExtractOptions, LogicalChannel, MaskKind};
use crate::color_8888::Color8888;
use crate::error::TextureError;
use crate::extract::extract_channel;
use crate::image::RgbaImage;
use crate::layout::TextureDimensions;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// Selects which channels are extracted and how they are merged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash, AllValues)]
pub enum BlendStrategy {
    /// The Light channel, opaque
    LightOnly,
    /// The LightMask channel, opaque
    LightMaskOnly,
    /// The Dark channel, opaque
    DarkOnly,
    /// The DarkMask channel, opaque
    DarkMaskOnly,
    /// Dark, with alpha from the averaged DarkMask, drawn over an opaque Light.
    ///
    /// LightMask is not used. Its role in this composite is unknown.
    MaskedComposite,
    /// Per-channel integer mean of Light and Dark
    ChannelAverage,
    /// Light and Dark mixed by `(luma(LightMask) | luma(DarkMask)) / 255`
    #[default]
    DualMaskAlphaBlend,
}

impl BlendStrategy {
    /// The kebab-case name used by [`Display`](fmt::Display) and [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            BlendStrategy::LightOnly => "light-only",
            BlendStrategy::LightMaskOnly => "light-mask-only",
            BlendStrategy::DarkOnly => "dark-only",
            BlendStrategy::DarkMaskOnly => "dark-mask-only",
            BlendStrategy::MaskedComposite => "masked-composite",
            BlendStrategy::ChannelAverage => "channel-average",
            BlendStrategy::DualMaskAlphaBlend => "dual-mask-alpha-blend",
        }
    }
}

impl fmt::Display for BlendStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Implement FromStr to allow parsing from command line arguments
impl FromStr for BlendStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &strategy in BlendStrategy::all_values() {
            if strategy.name() == lower {
                return Ok(strategy);
            }
        }

        // Alternative names for the compositing strategies.
        match lower.as_str() {
            "use-masks" => Ok(BlendStrategy::MaskedComposite),
            "average-light-and-dark" => Ok(BlendStrategy::ChannelAverage),
            "alpha-blend" => Ok(BlendStrategy::DualMaskAlphaBlend),
            _ => Err(alloc::format!(
                "Invalid blend strategy: {s}. Valid strategies are: light-only, light-mask-only, \
                 dark-only, dark-mask-only, masked-composite, channel-average, dual-mask-alpha-blend"
            )),
        }
    }
}

/// Renders `buffer` into a single `width/4 × height/4` image using `strategy`.
///
/// # Errors
///
/// [`TextureError::Layout`] if `buffer` is shorter than `dims` require.
///
/// # Examples
///
/// ```
/// use sv_profile_texture::{blend, BlendStrategy, Color8888, TextureDimensions};
///
/// // Light = red, Dark = blue, both masks black: the default blend shows Light only.
/// let group = [0x00, 0xF8, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let image = blend(&group, TextureDimensions::new(4, 4), BlendStrategy::default()).unwrap();
/// assert_eq!(image.pixels()[0], Color8888::opaque(248, 0, 0));
/// ```
pub fn blend(
    buffer: &[u8],
    dims: TextureDimensions,
    strategy: BlendStrategy,
) -> Result<RgbaImage, TextureError> {
    let opaque = ExtractOptions::default();
    let extract = |channel| extract_channel(buffer, dims, channel, &opaque);

    match strategy {
        BlendStrategy::LightOnly => extract(LogicalChannel::Light),
        BlendStrategy::LightMaskOnly => extract(LogicalChannel::LightMask),
        BlendStrategy::DarkOnly => extract(LogicalChannel::Dark),
        BlendStrategy::DarkMaskOnly => extract(LogicalChannel::DarkMask),
        BlendStrategy::MaskedComposite => {
            let light = extract(LogicalChannel::Light)?;
            let dark = extract_channel(
                buffer,
                dims,
                LogicalChannel::Dark,
                &ExtractOptions::masked(MaskKind::Alpha),
            )?;
            combine(&light, &dark, composite_over)
        }
        BlendStrategy::ChannelAverage => {
            let light = extract(LogicalChannel::Light)?;
            let dark = extract(LogicalChannel::Dark)?;
            combine(&light, &dark, average)
        }
        BlendStrategy::DualMaskAlphaBlend => {
            let light_mask = extract(LogicalChannel::LightMask)?;
            let dark_mask = extract(LogicalChannel::DarkMask)?;
            let light = extract(LogicalChannel::Light)?;
            let dark = extract(LogicalChannel::Dark)?;
            let pixels = light
                .pixels()
                .iter()
                .zip(dark.pixels())
                .zip(light_mask.pixels().iter().zip(dark_mask.pixels()))
                .map(|((&l, &d), (&lm, &dm))| dual_mask_blend(l, d, lm, dm))
                .collect();
            RgbaImage::from_pixels(light.width(), light.height(), pixels)
        }
    }
}

fn combine(
    a: &RgbaImage,
    b: &RgbaImage,
    op: fn(Color8888, Color8888) -> Color8888,
) -> Result<RgbaImage, TextureError> {
    let pixels = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&a, &b)| op(a, b))
        .collect();
    RgbaImage::from_pixels(a.width(), a.height(), pixels)
}

/// Draws `overlay` over an opaque `base` with straight alpha.
///
/// Each channel is `(overlay * a + base * (255 - a)) / 255`, truncated, where `a` is the
/// overlay's alpha. The base's own alpha is ignored and the result is opaque.
#[inline]
pub fn composite_over(base: Color8888, overlay: Color8888) -> Color8888 {
    let a = overlay.a as u32;
    let mix = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * (255 - a)) / 255) as u8;
    Color8888::opaque(
        mix(overlay.r, base.r),
        mix(overlay.g, base.g),
        mix(overlay.b, base.b),
    )
}

/// Per-channel `(a + b) / 2`, truncated, opaque.
#[inline]
pub fn average(a: Color8888, b: Color8888) -> Color8888 {
    let mean = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Color8888::opaque(mean(a.r, b.r), mean(a.g, b.g), mean(a.b, b.b))
}

/// Blend weight of Dark over Light for one pixel of the dual mask blend.
///
/// The two luminosity greyscales are combined with a bitwise OR, not averaged.
#[inline]
pub fn dual_mask_alpha(light_mask: Color8888, dark_mask: Color8888) -> f64 {
    (light_mask.luminosity_greyscale() | dark_mask.luminosity_greyscale()) as f64 / 255.0
}

/// Mixes `light` and `dark` by [`dual_mask_alpha`]: `light * (1 - alpha) + dark * alpha`,
/// truncated toward zero, opaque.
#[inline]
pub fn dual_mask_blend(
    light: Color8888,
    dark: Color8888,
    light_mask: Color8888,
    dark_mask: Color8888,
) -> Color8888 {
    let alpha = dual_mask_alpha(light_mask, dark_mask);
    let mix = |l: u8, d: u8| (l as f64 * (1.0 - alpha) + d as f64 * alpha) as u8;
    Color8888::opaque(
        mix(light.r, dark.r),
        mix(light.g, dark.g),
        mix(light.b, dark.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_565::Color565;
    use crate::test_prelude::*;

    const RED: u16 = 0xF800;
    const GREEN: u16 = 0x07E0;
    const BLUE: u16 = 0x001F;
    const WHITE: u16 = 0xFFFF;
    const BLACK: u16 = 0x0000;

    fn rgb(word: u16) -> Color8888 {
        Color565::from_raw(word).to_color_8888()
    }

    fn blend_one(words: [u16; 4], strategy: BlendStrategy) -> Color8888 {
        let dims = TextureDimensions::new(4, 4);
        let image = blend(&uniform_buffer(dims, words), dims, strategy).unwrap();
        image.pixels()[0]
    }

    #[rstest]
    #[case(BlendStrategy::LightOnly, RED)]
    #[case(BlendStrategy::DarkOnly, GREEN)]
    #[case(BlendStrategy::LightMaskOnly, BLUE)]
    #[case(BlendStrategy::DarkMaskOnly, WHITE)]
    fn single_channel_strategies_show_one_channel(
        #[case] strategy: BlendStrategy,
        #[case] expected: u16,
    ) {
        assert_eq!(blend_one([RED, GREEN, BLUE, WHITE], strategy), rgb(expected));
    }

    #[test]
    fn dual_mask_with_black_masks_is_light() {
        let dims = TextureDimensions::new(12, 8);
        let mut buffer = sequential_buffer(dims);
        // Zero both masks in every group.
        for group in buffer.chunks_exact_mut(8) {
            group[4..].fill(0);
        }

        let blended = blend(&buffer, dims, BlendStrategy::DualMaskAlphaBlend).unwrap();
        let light = blend(&buffer, dims, BlendStrategy::LightOnly).unwrap();
        assert_eq!(blended, light);
    }

    #[test]
    fn dual_mask_with_saturated_alpha_is_dark() {
        // luma(white) = 251 = 0b1111_1011, luma(0, 8, 0) = 6 = 0b110, OR = 255.
        let light_mask = 0xFFFF;
        let dark_mask = 0x0040;
        assert_eq!(dual_mask_alpha(rgb(light_mask), rgb(dark_mask)), 1.0);

        let dims = TextureDimensions::new(12, 8);
        let mut buffer = sequential_buffer(dims);
        for group in buffer.chunks_exact_mut(8) {
            group[4..6].copy_from_slice(&u16::to_le_bytes(light_mask));
            group[6..8].copy_from_slice(&u16::to_le_bytes(dark_mask));
        }

        let blended = blend(&buffer, dims, BlendStrategy::DualMaskAlphaBlend).unwrap();
        let dark = blend(&buffer, dims, BlendStrategy::DarkOnly).unwrap();
        assert_eq!(blended, dark);
    }

    #[test]
    fn dual_mask_with_white_masks_stops_short_of_dark() {
        // White decodes to (248, 252, 248), whose luma is 251, not 255.
        let pixel = blend_one([BLACK, WHITE, WHITE, WHITE], BlendStrategy::DualMaskAlphaBlend);
        assert_eq!(pixel, Color8888::opaque(244, 248, 244));
    }

    #[test]
    fn dual_mask_combines_greyscales_with_bitwise_or() {
        // luma(0, 4, 0) = 3, luma(0, 8, 0) = 6; 3 | 6 = 7, where max or mean would be 6 or 4.
        let lm = rgb(0x0020);
        let dm = rgb(0x0040);
        assert_eq!(lm.luminosity_greyscale(), 3);
        assert_eq!(dm.luminosity_greyscale(), 6);
        assert_eq!(dual_mask_alpha(lm, dm), 7.0 / 255.0);

        let light = Color8888::opaque(0, 0, 0);
        let dark = Color8888::opaque(255, 255, 255);
        // 255 * 7 / 255 = 7
        assert_eq!(dual_mask_blend(light, dark, lm, dm), Color8888::opaque(7, 7, 7));
    }

    #[test]
    fn dual_mask_output_is_opaque() {
        let pixel = blend_one([RED, GREEN, 0x8410, 0x0000], BlendStrategy::DualMaskAlphaBlend);
        assert_eq!(pixel.a, 255);
    }

    #[rstest]
    #[case::opaque_mask(WHITE, GREEN)]
    #[case::clear_mask(BLACK, RED)]
    fn masked_composite_follows_dark_mask(#[case] dark_mask: u16, #[case] expected: u16) {
        // DarkMask white averages to 249, so Dark is almost, but not fully, opaque.
        let pixel = blend_one([RED, GREEN, WHITE, dark_mask], BlendStrategy::MaskedComposite);
        let light = rgb(RED);
        let dark = rgb(GREEN).with_alpha(rgb(dark_mask).averaged_greyscale());
        assert_eq!(pixel, composite_over(light, dark));
        if dark_mask == BLACK {
            assert_eq!(pixel, rgb(expected));
        }
    }

    #[test]
    fn masked_composite_ignores_light_mask() {
        let a = blend_one([RED, GREEN, BLACK, 0x8410], BlendStrategy::MaskedComposite);
        let b = blend_one([RED, GREEN, WHITE, 0x8410], BlendStrategy::MaskedComposite);
        assert_eq!(a, b);
    }

    #[rstest]
    #[case::transparent(0, Color8888::opaque(10, 20, 30))]
    #[case::opaque(255, Color8888::opaque(200, 100, 50))]
    #[case::half(128, Color8888::opaque(105, 60, 40))]
    fn composites_over_opaque_base(#[case] alpha: u8, #[case] expected: Color8888) {
        let base = Color8888::opaque(10, 20, 30);
        let overlay = Color8888::new(200, 100, 50, alpha);
        assert_eq!(composite_over(base, overlay), expected);
    }

    #[test]
    fn channel_average_truncates() {
        let pixel = blend_one([WHITE, 0x0821, BLACK, BLACK], BlendStrategy::ChannelAverage);
        // (248 + 8) / 2, (252 + 4) / 2, (248 + 8) / 2
        assert_eq!(pixel, Color8888::opaque(128, 128, 128));

        let pixel = average(Color8888::opaque(1, 2, 3), Color8888::opaque(2, 3, 4));
        assert_eq!(pixel, Color8888::opaque(1, 2, 3));
    }

    #[test]
    fn every_strategy_rejects_short_buffers() {
        let dims = TextureDimensions::new(8, 8);
        let buffer = vec![0u8; dims.required_len() - 8];
        for &strategy in BlendStrategy::all_values() {
            assert!(
                matches!(
                    blend(&buffer, dims, strategy),
                    Err(TextureError::Layout { .. })
                ),
                "{strategy} accepted a short buffer"
            );
        }
    }

    #[test]
    fn every_strategy_produces_output_sized_image() {
        let dims = TextureDimensions::new(20, 12);
        let buffer = sequential_buffer(dims);
        for &strategy in BlendStrategy::all_values() {
            let image = blend(&buffer, dims, strategy).unwrap();
            assert_eq!((image.width(), image.height()), (5, 3), "{strategy}");
        }
    }

    #[test]
    fn strategy_names_round_trip() {
        for &strategy in BlendStrategy::all_values() {
            assert_eq!(strategy.to_string().parse::<BlendStrategy>(), Ok(strategy));
        }
        assert_eq!("Alpha-Blend".parse(), Ok(BlendStrategy::DualMaskAlphaBlend));
        assert_eq!("use-masks".parse(), Ok(BlendStrategy::MaskedComposite));
        assert!("sepia".parse::<BlendStrategy>().is_err());
    }

    #[test]
    fn default_strategy_is_dual_mask() {
        assert_eq!(BlendStrategy::default(), BlendStrategy::DualMaskAlphaBlend);
    }
}
