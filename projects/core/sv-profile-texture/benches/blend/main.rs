use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use sv_profile_texture::{
    blend, encode_image, BlendStrategy, Color8888, RgbaImage, TextureDimensions,
};

// Profile picture as declared in the save's metadata blocks.
const PICTURE: TextureDimensions = TextureDimensions::new(1440, 832);

fn picture_buffer() -> Vec<u8> {
    // Scrambled words in every slot, so masks are neither all black nor all white.
    (0..PICTURE.required_len() / 2)
        .flat_map(|x| (x.wrapping_mul(2_654_435_761) as u16).to_le_bytes())
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let buffer = picture_buffer();

    let mut group = c.benchmark_group("Blend Profile Picture");
    group.throughput(Throughput::Bytes(PICTURE.required_len() as u64));
    for &strategy in BlendStrategy::all_values() {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy),
            &strategy,
            |b, &strategy| b.iter(|| blend(black_box(&buffer), PICTURE, strategy)),
        );
    }
    group.finish();

    let pixels = (0..PICTURE.group_count())
        .map(|x| Color8888::opaque(x as u8, (x >> 8) as u8, (x >> 16) as u8))
        .collect();
    let image = RgbaImage::from_pixels(PICTURE.output_width(), PICTURE.output_height(), pixels)
        .expect("pixel count matches dimensions");

    let mut group = c.benchmark_group("Encode Profile Picture");
    group.throughput(Throughput::Bytes(PICTURE.required_len() as u64));
    group.bench_function("encode_image", |b| {
        b.iter(|| encode_image(black_box(&image), 622_080))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
