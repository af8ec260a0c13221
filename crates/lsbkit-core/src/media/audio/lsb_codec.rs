use log::debug;

use super::wav_audio::{ensure_supported, WavAudio, SAMPLE_WIDTH};
use super::wav_iter::{AudioFrameStrideIter, AudioWavIter, AudioWavIterMut};
use crate::media::{
    ensure_capacity, AudioCodecOptions, CapacityCheck, CarrierKind, MediaPrimitive,
    MediaPrimitiveMut,
};
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};
use crate::{BitSequence, Result};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Audio Decoder that reads at the configured byte stride
    pub fn decoder_with_options<'a>(
        audio: &'a WavAudio,
        opts: &AudioCodecOptions,
    ) -> UniversalDecoder<Box<dyn Iterator<Item = MediaPrimitive> + 'a>, OneBitUnveil> {
        let width = audio.sample_width() as usize;
        let stride = opts.decode_stride.bytes(width);
        let input: Box<dyn Iterator<Item = MediaPrimitive> + 'a> = if stride == width {
            Box::new(AudioWavIter::new(audio.samples.iter().copied()))
        } else {
            debug!("Decoding audio at a stride of {stride} bytes");
            Box::new(AudioFrameStrideIter::new(audio.frame_bytes(), stride))
        };

        UniversalDecoder::new(input, OneBitUnveil)
    }

    /// builds a LSB Audio Encoder, one bit per sample
    pub fn encoder(
        input: &mut [i16],
    ) -> UniversalEncoder<impl Iterator<Item = MediaPrimitiveMut<'_>>, OneBitHide> {
        UniversalEncoder::new(AudioWavIterMut::new(input.iter_mut()), OneBitHide)
    }
}

/// Hides the message in the sample LSBs, in place. The carrier becomes single channel.
pub fn encode_audio(carrier: &mut WavAudio, message: &str, opts: &AudioCodecOptions) -> Result<()> {
    ensure_supported(&carrier.spec)?;
    let bits = BitSequence::from_message(message)?;

    let (needed, available) = match opts.capacity {
        CapacityCheck::Exact => (bits.len(), carrier.samples.len()),
        CapacityCheck::Legacy => {
            let frame_bytes = carrier.samples.len() * SAMPLE_WIDTH as usize;
            (
                message.chars().count(),
                frame_bytes * 8 / SAMPLE_WIDTH as usize,
            )
        }
    };
    ensure_capacity(CarrierKind::Audio, needed, available)?;

    let hidden = LsbCodec::encoder(&mut carrier.samples).hide_bits(bits.iter())?;
    carrier.spec.channels = 1;
    debug!(
        "Hid {hidden} of {} message bits in {} audio samples",
        bits.len(),
        carrier.samples.len()
    );

    Ok(())
}

/// Decodes one LSB per sample read, the caller knows where the message ends.
pub fn decode_audio(carrier: &WavAudio, opts: &AudioCodecOptions) -> String {
    LsbCodec::decoder_with_options(carrier, opts)
        .unveil_bits()
        .to_message()
}
