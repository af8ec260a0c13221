use std::fs;

use image::{ImageBuffer, Rgb, RgbImage};
use lsbkit_core::commands::{hide, merge, unmerge, unveil, unveil_raw};
use lsbkit_core::*;
use tempfile::TempDir;

fn carrier_image() -> RgbImage {
    ImageBuffer::from_fn(16, 16, |x, y| Rgb([x as u8 * 9, y as u8 * 13, 77]))
}

#[test]
fn should_hide_and_unveil_in_every_media_kind() {
    let out_dir = TempDir::new().unwrap();
    let opts = CodecOptions::default();
    let text = out_dir.path().join("carrier.txt");
    let image = out_dir.path().join("carrier.png");
    let audio = out_dir.path().join("carrier.wav");
    fs::write(&text, "x".repeat(200)).unwrap();
    Media::from_image(carrier_image()).save_as(&image).unwrap();
    Media::from_audio(WavAudio::mono(8000, vec![100; 300]))
        .save_as(&audio)
        .unwrap();

    for carrier in [text, image, audio] {
        let file_name = carrier.file_name().unwrap().to_str().unwrap();
        let secret = out_dir.path().join(format!("secret-{file_name}"));

        hide(&carrier, &secret, "Secret Message", &opts).unwrap();

        assert_eq!(
            unveil(&secret, Some(14), &opts).unwrap(),
            "Secret Message",
            "{file_name}"
        );
    }
}

#[test]
fn should_dump_the_raw_bytes() {
    let out_dir = TempDir::new().unwrap();
    let image = out_dir.path().join("carrier.png");
    let secret = out_dir.path().join("secret.png");
    let raw = out_dir.path().join("raw.bin");
    Media::from_image(carrier_image()).save_as(&image).unwrap();

    hide(&image, &secret, "raw", &CodecOptions::default()).unwrap();
    unveil_raw(&secret, &raw, &CodecOptions::default()).unwrap();

    let raw = fs::read(raw).unwrap();
    assert_eq!(raw.len(), 16 * 16 * 3 / 8);
    assert_eq!(&raw[..3], b"raw");
}

#[test]
fn should_merge_and_unmerge_files() {
    let out_dir = TempDir::new().unwrap();
    let image = out_dir.path().join("image.png");
    let audio = out_dir.path().join("audio.wav");
    let text = out_dir.path().join("text.txt");
    let container = out_dir.path().join("merged.bin");
    Media::from_image(carrier_image()).save_as(&image).unwrap();
    Media::from_audio(WavAudio::mono(44100, vec![-3, 4, 5, -6]))
        .save_as(&audio)
        .unwrap();
    fs::write(&text, "some text").unwrap();

    for layout in [ContainerLayout::Classic, ContainerLayout::Dimensioned] {
        merge(&image, &audio, &text, &container, layout).unwrap();
        let opts = UnmergeOptions {
            layout,
            image_dimensions: None,
        };
        unmerge(
            &container,
            &out_dir.path().join("out.png"),
            &out_dir.path().join("out.wav"),
            &out_dir.path().join("out.txt"),
            &opts,
        )
        .unwrap();

        assert_eq!(
            Media::from_file(&out_dir.path().join("out.png")).unwrap(),
            Media::from_image(carrier_image())
        );
        assert_eq!(
            Media::from_file(&out_dir.path().join("out.wav")).unwrap(),
            Media::from_audio(WavAudio::mono(44100, vec![-3, 4, 5, -6]))
        );
        assert_eq!(
            fs::read(out_dir.path().join("out.txt")).unwrap(),
            b"some text"
        );
    }
}

#[test]
fn should_report_a_capacity_error_for_the_carrier() {
    let out_dir = TempDir::new().unwrap();
    let audio = out_dir.path().join("carrier.wav");
    Media::from_audio(WavAudio::mono(8000, vec![0; 10]))
        .save_as(&audio)
        .unwrap();

    let result = hide(
        &audio,
        &out_dir.path().join("secret.wav"),
        "too long",
        &CodecOptions::default(),
    );

    assert!(matches!(
        result,
        Err(LsbError::CapacityError {
            carrier: CarrierKind::Audio,
            needed: 64,
            available: 10,
        })
    ));
}
