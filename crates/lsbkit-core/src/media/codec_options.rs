/// Byte stride the historic audio decoder used, regardless of the sample width
pub const LEGACY_AUDIO_DECODE_STRIDE: usize = 5000;

/// Codec configuration for all three carrier kinds
///
/// The defaults fix the historic quirks of the LSB format,
/// [`CodecOptions::legacy`] reproduces them for compatibility with existing carriers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    pub text: TextCodecOptions,
    pub image: ImageCodecOptions,
    pub audio: AudioCodecOptions,
}

impl CodecOptions {
    /// The good old historic options, quirks included
    pub fn legacy() -> Self {
        Self {
            text: TextCodecOptions {
                capacity: CapacityCheck::Legacy,
            },
            image: ImageCodecOptions {
                capacity: CapacityCheck::Legacy,
                tail: ImageTail::EvenOutRedGreen,
            },
            audio: AudioCodecOptions {
                capacity: CapacityCheck::Legacy,
                decode_stride: AudioDecodeStride::Fixed(LEGACY_AUDIO_DECODE_STRIDE),
            },
        }
    }
}

/// How a message is checked against the carrier before anything is written
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CapacityCheck {
    /// The message bit count must not exceed the number of embeddable units.
    #[default]
    Exact,
    /// The historic per carrier bounds. Text compares characters against characters,
    /// audio compares characters against `frame bytes * 8 / sample width`.
    /// Bits that do not find a unit are dropped.
    Legacy,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextCodecOptions {
    pub capacity: CapacityCheck,
}

/// What happens to the colour channels after the last message bit
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ImageTail {
    /// Channels after the message keep their value.
    #[default]
    Preserve,
    /// Red and green channels after the message are cleared to even, blue is kept.
    EvenOutRedGreen,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImageCodecOptions {
    pub capacity: CapacityCheck,
    pub tail: ImageTail,
}

/// Byte distance between two samples read by the audio decoder
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AudioDecodeStride {
    /// Same stride the encoder writes with.
    #[default]
    SampleWidth,
    /// A fixed number of bytes.
    Fixed(usize),
}

impl AudioDecodeStride {
    pub fn bytes(&self, sample_width: usize) -> usize {
        match self {
            AudioDecodeStride::SampleWidth => sample_width,
            AudioDecodeStride::Fixed(stride) => *stride,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AudioCodecOptions {
    pub capacity: CapacityCheck,
    pub decode_stride: AudioDecodeStride,
}
