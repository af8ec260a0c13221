use std::io::{Read, Seek, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
pub use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::error;

use crate::{LsbError, Result};

/// Bytes per sample, the only PCM layout the audio codec handles
pub const SAMPLE_WIDTH: u16 = 2;

/// 16-bit integer PCM audio, interleaved samples of all channels
#[derive(Debug, Clone, PartialEq)]
pub struct WavAudio {
    pub spec: WavSpec,
    pub samples: Vec<i16>,
}

impl WavAudio {
    pub fn new(spec: WavSpec, samples: Vec<i16>) -> Result<Self> {
        ensure_supported(&spec)?;

        Ok(Self { spec, samples })
    }

    /// single channel audio at the given sample rate
    pub fn mono(sample_rate: u32, samples: Vec<i16>) -> Self {
        Self {
            spec: WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: SAMPLE_WIDTH * 8,
                sample_format: SampleFormat::Int,
            },
            samples,
        }
    }

    pub fn open(f: &Path) -> Result<Self> {
        let reader = WavReader::open(f).map_err(|e| {
            error!("Error opening audio carrier {f:?}: {e}");
            LsbError::InvalidAudioMedia
        })?;

        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        ensure_supported(&spec)?;

        let samples = reader
            .into_samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Error reading audio samples: {e}");
                LsbError::InvalidAudioMedia
            })?;

        Ok(Self { spec, samples })
    }

    /// Rebuilds single channel audio from raw little endian frame bytes
    pub fn from_frame_bytes(sample_rate: u32, sample_width: u32, frames: &[u8]) -> Result<Self> {
        if sample_width != u32::from(SAMPLE_WIDTH) {
            return Err(LsbError::UnsupportedAudioFormat {
                bits_per_sample: sample_width.saturating_mul(8),
                sample_format: format!("{:?}", SampleFormat::Int),
            });
        }
        if frames.len() % SAMPLE_WIDTH as usize != 0 {
            error!(
                "Audio frame buffer of {} bytes is not a multiple of the sample width",
                frames.len()
            );
            return Err(LsbError::InvalidAudioMedia);
        }

        let mut samples = vec![0; frames.len() / SAMPLE_WIDTH as usize];
        LittleEndian::read_i16_into(frames, &mut samples);

        Ok(Self::mono(sample_rate, samples))
    }

    /// The raw frame buffer, little endian samples
    pub fn frame_bytes(&self) -> Vec<u8> {
        let mut frames = vec![0; self.samples.len() * SAMPLE_WIDTH as usize];
        LittleEndian::write_i16_into(&self.samples, &mut frames);

        frames
    }

    pub fn sample_rate(&self) -> u32 {
        self.spec.sample_rate
    }

    /// bytes per sample
    pub fn sample_width(&self) -> u16 {
        self.spec.bits_per_sample / 8
    }

    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut wav_writer =
            WavWriter::new(writer, self.spec).map_err(|_| LsbError::AudioCreationError)?;
        for s in self.samples.iter() {
            wav_writer
                .write_sample(*s)
                .map_err(|_| LsbError::AudioEncodingError)?;
        }
        wav_writer
            .finalize()
            .map_err(|_| LsbError::AudioEncodingError)?;

        Ok(())
    }
}

pub(crate) fn ensure_supported(spec: &WavSpec) -> Result<()> {
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != SAMPLE_WIDTH * 8 {
        error!(
            "Only 16-bit integer PCM is supported, got {} bits {:?}",
            spec.bits_per_sample, spec.sample_format
        );
        return Err(LsbError::UnsupportedAudioFormat {
            bits_per_sample: u32::from(spec.bits_per_sample),
            sample_format: format!("{:?}", spec.sample_format),
        });
    }

    Ok(())
}
