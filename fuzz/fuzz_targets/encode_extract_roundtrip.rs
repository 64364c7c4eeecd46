#![no_main]

// Encodes an arbitrary picture and extracts its Light channel. The result must be the
// picture quantized to RGB565, with every other slot left zeroed.

use libfuzzer_sys::{arbitrary, fuzz_target};
use sv_profile_texture::{
    encode_image, encoded_len, extract_channel, Color8888, ExtractOptions, LogicalChannel,
    RgbaImage, TextureDimensions,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub pixels: Vec<[u8; 4]>,
    pub padding: u8,
}

fuzz_target!(|input: Input| {
    let width = (input.width as usize).max(1);
    let height = input.pixels.len() / width;
    let pixels: Vec<Color8888> = input
        .pixels
        .iter()
        .take(width * height)
        .map(|&[r, g, b, a]| Color8888::new(r, g, b, a))
        .collect();
    let Ok(image) = RgbaImage::from_pixels(width, height, pixels) else {
        return;
    };

    let dest_len = encoded_len(&image) + input.padding as usize;
    let encoded = encode_image(&image, dest_len).expect("destination is large enough");
    assert_eq!(encoded.len(), dest_len);
    assert!(encoded
        .chunks_exact(8)
        .all(|group| group[2..].iter().all(|&b| b == 0)));

    let dims = TextureDimensions::from_output(width, height);
    let decoded =
        extract_channel(&encoded, dims, LogicalChannel::Light, &ExtractOptions::default())
            .expect("encoded buffer holds the whole texture");

    for (original, decoded) in image.pixels().iter().zip(decoded.pixels()) {
        assert_eq!(*decoded, original.to_color_565().to_color_8888());
    }
});
