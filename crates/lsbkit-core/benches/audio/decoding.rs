use criterion::{criterion_group, criterion_main, Criterion};
use lsbkit_core::media::audio::LsbCodec;
use lsbkit_core::media::AudioCodecOptions;
use lsbkit_core::{encode_audio, WavAudio};
use std::io::Read;

pub fn audio_decoding(c: &mut Criterion) {
    c.bench_function("Audio Decoding", |b| {
        let mut audio = WavAudio::mono(44100, (0..44100).map(|i| (i % 512) as i16).collect());
        let opts = AudioCodecOptions::default();
        encode_audio(&mut audio, "Hello World!", &opts).expect("Cannot encode audio");
        let mut buf = [0; 12];

        b.iter(|| {
            LsbCodec::decoder_with_options(&audio, &opts)
                .read_exact(&mut buf)
                .expect("Cannot read 12 bytes from decoder");
        })
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
