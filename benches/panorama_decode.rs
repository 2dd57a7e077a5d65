// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image_rs::{ImageFormat, Rgba, RgbaImage};
use panotour::config::MAX_TEXTURE_WIDTH;
use panotour::panorama::decode_panorama;
use std::hint::black_box;
use std::io::Cursor;

/// PNG bytes of a color ramp so the encoder cannot collapse the rows.
fn encoded_panorama(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode sample panorama");
    bytes.into_inner()
}

fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("panorama_decode");
    group.sample_size(10);

    // The second size exceeds the texture cap and goes through the resize.
    for (width, height) in [(2048, 1024), (MAX_TEXTURE_WIDTH + 1024, 2560)] {
        let bytes = encoded_panorama(width, height);
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{width}x{height}")),
            &bytes,
            |b, bytes| b.iter(|| black_box(decode_panorama(black_box(bytes)))),
        );
    }

    group.finish();
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
