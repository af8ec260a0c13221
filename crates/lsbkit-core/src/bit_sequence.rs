use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::{LsbError, Result};

/// Flat sequence of message bits, 8 bits per message character, most significant bit first.
///
/// ## Example of usage
/// ```rust
/// use lsbkit_core::BitSequence;
///
/// let bits = BitSequence::from_message("A").expect("A is a single byte character");
/// assert_eq!(bits.to_digits(), "01000001");
/// assert_eq!(bits.to_message(), "A");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    /// Expands a message into its bits, every character must be representable in one byte.
    pub fn from_message(message: &str) -> Result<Self> {
        let bytes = message
            .chars()
            .enumerate()
            .map(|(position, character)| {
                u8::try_from(character).map_err(|_| LsbError::EncodingError {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self::from_bytes(&bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut reader = BitReader::endian(bytes, BigEndian);
        let bits = (0..bytes.len() << 3)
            .map_while(|_| reader.read_bit().ok())
            .collect();

        Self { bits }
    }

    /// Parses the textual form of a bit sequence, e.g. `"01000001"`.
    pub fn from_digits(digits: &str) -> Result<Self> {
        digits
            .chars()
            .enumerate()
            .map(|(position, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(LsbError::InvalidBitDigit { digit, position }),
            })
            .collect()
    }

    /// Groups the bits into bytes, a trailing chunk shorter than 8 bits is dropped.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, bit| (byte << 1) | u8::from(*bit)))
            .collect()
    }

    /// Maps every complete byte back to its character.
    pub fn to_message(&self) -> String {
        self.to_bytes().into_iter().map(char::from).collect()
    }

    pub fn to_digits(&self) -> String {
        self.bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}
