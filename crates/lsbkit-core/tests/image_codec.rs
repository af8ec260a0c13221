use image::{ImageBuffer, Rgb, RgbImage};
use lsbkit_core::media::image::LsbCodec;
use lsbkit_core::media::{ImageCodecOptions, ImageTail};
use lsbkit_core::*;

fn carrier(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 7 + y) as u8 | 1, (y * 5 + x) as u8 | 1, (x + y) as u8 | 1])
    })
}

#[test]
fn should_unveil_the_hidden_bits_first() {
    let bits = BitSequence::from_message("Hello").unwrap();
    let mut img = carrier(6, 5);

    encode_image(&mut img, &bits, &ImageCodecOptions::default()).unwrap();

    let unveiled = LsbCodec::decoder(&img).unveil_bits();
    assert_eq!(&unveiled.as_slice()[..bits.len()], bits.as_slice());
    assert!(decode_image(&img).starts_with("Hello"));
}

#[test]
fn should_walk_columns_first() {
    let mut img = RgbImage::new(2, 2);

    encode_image(
        &mut img,
        &BitSequence::from_digits("000111").unwrap(),
        &ImageCodecOptions::default(),
    )
    .unwrap();

    assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
    assert_eq!(img.get_pixel(0, 1), &Rgb([1, 1, 1]));
    assert_eq!(img.get_pixel(1, 0), &Rgb([0, 0, 0]));
}

#[test]
fn empty_message_should_leave_the_image_unchanged() {
    let mut img = carrier(4, 4);

    encode_image(&mut img, &BitSequence::default(), &ImageCodecOptions::default()).unwrap();

    assert_eq!(img, carrier(4, 4));
}

#[test]
fn legacy_tail_should_even_out_red_and_green_only() {
    let opts = ImageCodecOptions {
        tail: ImageTail::EvenOutRedGreen,
        ..ImageCodecOptions::default()
    };
    let mut img = carrier(3, 3);

    encode_image(&mut img, &BitSequence::from_digits("111").unwrap(), &opts).unwrap();

    assert_eq!(img.get_pixel(0, 0), carrier(3, 3).get_pixel(0, 0));
    for (x, y, pixel) in img.enumerate_pixels().filter(|(x, y, _)| (*x, *y) != (0, 0)) {
        let original = carrier(3, 3).get_pixel(x, y).0;
        assert_eq!(pixel.0[0], original[0] & !1, "red at {x},{y}");
        assert_eq!(pixel.0[1], original[1] & !1, "green at {x},{y}");
        assert_eq!(pixel.0[2], original[2], "blue at {x},{y}");
    }
}

#[test]
fn should_reject_more_bits_than_channels() {
    let mut img = carrier(2, 2);
    let bits = BitSequence::from_digits(&"1".repeat(13)).unwrap();

    match encode_image(&mut img, &bits, &ImageCodecOptions::default()) {
        Err(LsbError::CapacityError {
            needed, available, ..
        }) => {
            assert_eq!(needed, 13);
            assert_eq!(available, 12);
        }
        other => panic!("expected a capacity error, got {other:?}"),
    }
    assert_eq!(img, carrier(2, 2));
}
