use thiserror::Error;

use crate::media::CarrierKind;

pub type Result<T> = std::result::Result<T, LsbError>;

#[derive(Error, Debug)]
pub enum LsbError {
    /// Represents a message that does not fit into the carrier, `needed` and `available`
    /// are counted in the unit the active capacity check compares
    #[error("Capacity Error: the {carrier} carrier offers {available} but the message needs {needed}")]
    CapacityError {
        carrier: CarrierKind,
        needed: usize,
        available: usize,
    },

    /// Represents a truncated or inconsistent length-prefixed container
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    /// Represents a message character that does not fit into 8 bits
    #[error("Character {character:?} at position {position} is outside the single byte range")]
    EncodingError { character: char, position: usize },

    /// Represents a bit digit string that contains something else than `0` and `1`
    #[error("Invalid bit digit {digit:?} at position {position}")]
    InvalidBitDigit { digit: char, position: usize },

    /// Represents an unsupported carrier media. For example, a movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an audio carrier with a sample layout other than 16-bit integer PCM
    #[error("Unsupported audio format: {bits_per_sample} bits per sample ({sample_format})")]
    UnsupportedAudioFormat {
        bits_per_sample: u32,
        sample_format: String,
    },

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a text carrier that is not valid UTF-8
    #[error("Text media is invalid")]
    InvalidTextMedia,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when creating an audio file.
    #[error("Audio creation error")]
    AudioCreationError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
