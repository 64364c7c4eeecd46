//! # Channels and Masks
//!
//! Every 8 byte group of a packed texture multiplexes four RGB565 sub-images:
//!
//! ```text
//! [ Light ][ Dark ][ LightMask ][ DarkMask ]
//!   0..2     2..4     4..6         6..8
//! ```
//!
//! When extracting Light or Dark, the alpha of each pixel may be taken from one of the
//! mask channels. Which mask is read is decided by a fixed table that is expressed
//! relative to the primary channel's slot (see [`relative_mask_offset`]).

use crate::color_8888::GreyscaleReduction;
use crate::error::TextureError;
use derive_enum_all_values::AllValues;

/// One of the four sub-images stored in a packed texture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum LogicalChannel {
    /// Primary color image
    Light,
    /// Secondary color image
    Dark,
    /// Mask paired with [`LogicalChannel::Light`]
    LightMask,
    /// Mask paired with [`LogicalChannel::Dark`]
    DarkMask,
}

impl LogicalChannel {
    /// Byte offset of this channel's RGB565 word within an 8 byte group.
    #[inline]
    pub const fn byte_offset(self) -> usize {
        match self {
            LogicalChannel::Light => 0,
            LogicalChannel::Dark => 2,
            LogicalChannel::LightMask => 4,
            LogicalChannel::DarkMask => 6,
        }
    }

    /// The channel stored at `offset` within a group, if any.
    #[inline]
    pub const fn from_byte_offset(offset: usize) -> Option<Self> {
        match offset {
            0 => Some(LogicalChannel::Light),
            2 => Some(LogicalChannel::Dark),
            4 => Some(LogicalChannel::LightMask),
            6 => Some(LogicalChannel::DarkMask),
            _ => None,
        }
    }

    /// Whether this channel is one of the two masks.
    #[inline]
    pub const fn is_mask(self) -> bool {
        matches!(self, LogicalChannel::LightMask | LogicalChannel::DarkMask)
    }
}

/// How a mask channel's greyscale value becomes the alpha of an extracted pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash, AllValues)]
pub enum MaskKind {
    /// Alpha is always 255
    #[default]
    None,
    /// Alpha is the mask's greyscale value
    Alpha,
    /// Alpha is `255 - greyscale`
    InverseAlpha,
}

impl MaskKind {
    /// Maps a mask greyscale value to an alpha value.
    #[inline]
    pub const fn alpha(self, greyscale: u8) -> u8 {
        match self {
            MaskKind::None => 255,
            MaskKind::Alpha => greyscale,
            MaskKind::InverseAlpha => 255 - greyscale,
        }
    }
}

/// Which mask the caller asks for when extracting a color channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash, AllValues)]
pub enum MaskSource {
    /// The primary channel's own mask
    #[default]
    Default,
    /// The light mask
    Light,
    /// The dark mask
    Dark,
}

/// Distance in bytes from the primary channel's word to the mask word it uses.
///
/// Returns [`None`] for combinations the packed layout has no mask for, namely an
/// explicit [`MaskSource::Light`] or [`MaskSource::Dark`] on a mask channel.
///
/// | primary | source  | offset |
/// |---------|---------|--------|
/// | Light   | Light   | 4      |
/// | Light   | Dark    | 6      |
/// | Dark    | Light   | 2      |
/// | Dark    | Dark    | 4      |
/// | any     | Default | 4      |
#[inline]
pub const fn relative_mask_offset(primary: LogicalChannel, source: MaskSource) -> Option<usize> {
    match (primary, source) {
        (LogicalChannel::Light, MaskSource::Light) => Some(4),
        (LogicalChannel::Light, MaskSource::Dark) => Some(6),
        (LogicalChannel::Dark, MaskSource::Light) => Some(2),
        (LogicalChannel::Dark, MaskSource::Dark) => Some(4),
        (_, MaskSource::Default) => Some(4),
        _ => None,
    }
}

/// Resolves the mask channel read when extracting `primary` with `options`.
///
/// Returns `Ok(None)` when no mask is applied.
///
/// # Errors
///
/// [`TextureError::Configuration`] when the mask source has no table entry for `primary`, or
/// when a mask kind is requested for a mask channel. Mask channels cannot be mask-derived.
pub fn mask_channel(
    primary: LogicalChannel,
    options: &ExtractOptions,
) -> Result<Option<LogicalChannel>, TextureError> {
    let invalid = TextureError::Configuration {
        primary,
        mask: options.mask_source,
        kind: options.mask_kind,
    };

    let Some(relative) = relative_mask_offset(primary, options.mask_source) else {
        return Err(invalid);
    };

    if options.mask_kind == MaskKind::None {
        return Ok(None);
    }

    if primary.is_mask() {
        return Err(invalid);
    }

    match LogicalChannel::from_byte_offset(primary.byte_offset() + relative) {
        Some(channel) => Ok(Some(channel)),
        None => Err(invalid),
    }
}

/// Settings for [`crate::extract_channel`].
///
/// The default extracts colors only, with every pixel fully opaque.
///
/// # Examples
///
/// ```
/// use sv_profile_texture::{ExtractOptions, GreyscaleReduction, MaskKind, MaskSource};
///
/// let options = ExtractOptions::default()
///     .with_mask_kind(MaskKind::InverseAlpha)
///     .with_mask_source(MaskSource::Light)
///     .with_reduction(GreyscaleReduction::Luminosity);
/// assert_eq!(options.mask_kind, MaskKind::InverseAlpha);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct ExtractOptions {
    /// How the mask becomes alpha
    pub mask_kind: MaskKind,
    /// Which mask to read
    pub mask_source: MaskSource,
    /// How a mask pixel is collapsed into one intensity
    pub reduction: GreyscaleReduction,
}

impl ExtractOptions {
    /// Alpha from the primary channel's own mask, averaged greyscale.
    pub fn masked(kind: MaskKind) -> Self {
        Self::default().with_mask_kind(kind)
    }

    /// Sets the mask kind.
    pub fn with_mask_kind(mut self, kind: MaskKind) -> Self {
        self.mask_kind = kind;
        self
    }

    /// Sets the mask source.
    pub fn with_mask_source(mut self, source: MaskSource) -> Self {
        self.mask_source = source;
        self
    }

    /// Sets the greyscale reduction.
    pub fn with_reduction(mut self, reduction: GreyscaleReduction) -> Self {
        self.reduction = reduction;
        self
    }
}
