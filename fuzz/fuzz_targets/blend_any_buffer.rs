#![no_main]

// Blends arbitrary bytes with arbitrary dimensions. Every strategy must either produce an
// image of the output dimensions or report a layout error, never panic.

use libfuzzer_sys::{arbitrary, fuzz_target};
use sv_profile_texture::{blend, BlendStrategy, TextureDimensions, TextureError};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub height: u8,
    pub buffer: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let dims = TextureDimensions::new(input.width as usize * 4, input.height as usize);

    for &strategy in BlendStrategy::all_values() {
        match blend(&input.buffer, dims, strategy) {
            Ok(image) => {
                assert!(input.buffer.len() >= dims.required_len());
                assert_eq!(image.width(), dims.output_width());
                assert_eq!(image.height(), dims.output_height());
                assert_eq!(image.pixels().len(), dims.group_count());
            }
            Err(TextureError::Layout { needed, actual }) => {
                assert_eq!(needed, dims.required_len());
                assert_eq!(actual, input.buffer.len());
                assert!(actual < needed);
            }
            Err(e) => panic!("{strategy} failed unexpectedly: {e}"),
        }
    }
});
