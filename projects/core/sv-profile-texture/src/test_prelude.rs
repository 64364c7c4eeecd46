//! Common test imports and utilities for packed texture tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
#[allow(unused_imports)] // Not every test module needs every item, and that's ok.
pub use crate::{
    blend, encode_image, encode_image_into, extract_channel, BlendStrategy, Color565, Color8888,
    ExtractOptions, LogicalChannel, RgbaImage, TextureDimensions, TextureError,
};

use crate::layout::GROUP_SIZE;
use alloc::vec::Vec;

/// Builds a packed buffer in which every group holds the same four words,
/// in `[Light, Dark, LightMask, DarkMask]` order.
pub(crate) fn uniform_buffer(dims: TextureDimensions, words: [u16; 4]) -> Vec<u8> {
    let mut group = [0u8; GROUP_SIZE];
    for (slot, word) in group.chunks_exact_mut(2).zip(words) {
        slot.copy_from_slice(&word.to_le_bytes());
    }
    group.repeat(dims.group_count())
}

/// The word [`sequential_buffer`] stores for `channel` in group `group`.
///
/// Every word is distinct for the first 16384 groups.
pub(crate) fn sequential_word(group: usize, channel: LogicalChannel) -> u16 {
    ((group * 4 + channel.byte_offset() / 2) as u16).wrapping_mul(3)
}

/// Builds a packed buffer with a distinct, predictable word in every slot.
pub(crate) fn sequential_buffer(dims: TextureDimensions) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(dims.required_len());
    for group in 0..dims.group_count() {
        for &channel in LogicalChannel::all_values() {
            buffer.extend_from_slice(&sequential_word(group, channel).to_le_bytes());
        }
    }
    buffer
}

/// Builds a packed buffer from per-group words.
pub(crate) fn buffer_from_groups(groups: &[[u16; 4]]) -> Vec<u8> {
    groups
        .iter()
        .flat_map(|words| words.iter().flat_map(|word| word.to_le_bytes()))
        .collect()
}

#[test]
fn validate_sequential_buffer_generator() {
    let buffer = sequential_buffer(TextureDimensions::new(8, 4));
    let expected: Vec<u8> = vec![
        0x00, 0x00, 0x03, 0x00, 0x06, 0x00, 0x09, 0x00, // group 0
        0x0C, 0x00, 0x0F, 0x00, 0x12, 0x00, 0x15, 0x00, // group 1
    ];
    assert_eq!(buffer, expected);
}

#[test]
fn validate_uniform_buffer_generator() {
    let buffer = uniform_buffer(TextureDimensions::new(8, 4), [0x0102, 0x0304, 0x0506, 0x0708]);
    let expected: Vec<u8> = vec![
        0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07, // group 0
        0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07, // group 1
    ];
    assert_eq!(buffer, expected);
    assert_eq!(buffer, buffer_from_groups(&[[0x0102, 0x0304, 0x0506, 0x0708]; 2]));
}
