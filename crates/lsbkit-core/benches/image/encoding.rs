use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb};
use lsbkit_core::media::ImageCodecOptions;
use lsbkit_core::{encode_image, BitSequence};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let img = ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let bits = BitSequence::from_message(&"Hello World! ".repeat(100))
            .expect("Message is single byte");
        let opts = ImageCodecOptions::default();

        b.iter(|| {
            let mut carrier = img.clone();
            encode_image(&mut carrier, &bits, &opts).expect("Cannot encode image");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
