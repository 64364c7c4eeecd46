#![no_main]

// Extracts every channel of a valid buffer with every option combination. Invalid
// combinations must be configuration errors, and alpha must follow the mask kind.

use libfuzzer_sys::{arbitrary, fuzz_target};
use sv_profile_texture::{
    extract_channel, ExtractOptions, GreyscaleReduction, LogicalChannel, MaskKind, MaskSource,
    TextureDimensions, TextureError,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub groups: Vec<[u8; 8]>,
}

fuzz_target!(|input: Input| {
    let dims = TextureDimensions::new(input.groups.len() * 4, 4);
    let buffer: Vec<u8> = input.groups.concat();

    for &channel in LogicalChannel::all_values() {
        for &mask_kind in MaskKind::all_values() {
            for &mask_source in MaskSource::all_values() {
                for &reduction in GreyscaleReduction::all_values() {
                    let options = ExtractOptions {
                        mask_kind,
                        mask_source,
                        reduction,
                    };
                    check(&buffer, dims, channel, &options);
                }
            }
        }
    }
});

fn check(buffer: &[u8], dims: TextureDimensions, channel: LogicalChannel, options: &ExtractOptions) {
    let invalid = channel.is_mask()
        && (options.mask_kind != MaskKind::None || options.mask_source != MaskSource::Default);

    match extract_channel(buffer, dims, channel, options) {
        Ok(image) => {
            assert!(!invalid);
            assert_eq!(image.pixels().len(), dims.group_count());
            if options.mask_kind == MaskKind::None {
                assert!(image.pixels().iter().all(|p| p.a == 255));
            }
        }
        Err(TextureError::Configuration { .. }) => assert!(invalid),
        Err(e) => panic!("{channel:?} failed unexpectedly: {e}"),
    }
}
