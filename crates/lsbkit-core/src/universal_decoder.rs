use std::io::{Cursor, Read, Result as IoResult};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::media::MediaPrimitive;
use crate::BitSequence;

/// generic unveil algorithm, used for specific ones like LSB
pub trait UnveilAlgorithm {
    /// reads one bit from a media primitive
    fn unveil(&self, primitive: MediaPrimitive) -> bool;
}

/// default 1 bit unveil strategy
#[derive(Debug, Default)]
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn unveil(&self, primitive: MediaPrimitive) -> bool {
        primitive.lsb()
    }
}

/// generic LSB decoder, reads one bit per media primitive
pub struct UniversalDecoder<I, A> {
    input: I,
    algorithm: A,
}

impl<I, A> UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }

    /// unveils the bits of all remaining primitives
    pub fn unveil_bits(self) -> BitSequence {
        let Self { input, algorithm } = self;
        input.map(|p| algorithm.unveil(p)).collect()
    }
}

/// bytes are assembled most significant bit first, a trailing partial byte is dropped
impl<I, A> Read for UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        // 1 bit per primitive
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(Cursor::new(buf), BigEndian);

        let mut bit_read = 0;
        for primitive in self.input.by_ref().take(items_to_take) {
            bit_buffer.write_bit(self.algorithm.unveil(primitive))?;
            bit_read += 1;
        }

        Ok(bit_read >> 3)
    }
}
