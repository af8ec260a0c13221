use std::slice::IterMut;

use byteorder::{ByteOrder, LittleEndian};

use crate::media::{MediaPrimitive, MediaPrimitiveMut};

/// Iterating audio samples, one primitive per sample
pub struct AudioWavIter<T> {
    samples: T,
}

impl<T> AudioWavIter<T>
where
    T: Iterator<Item = i16>,
{
    pub fn new(samples: T) -> Self {
        Self { samples }
    }
}

/// Audio samples iterator that yields immutable MediaPrimitives `MediaPrimitive`
impl<T> Iterator for AudioWavIter<T>
where
    T: Iterator<Item = i16>,
{
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(MediaPrimitive::AudioSample)
    }
}

/// Iterating mutable audio samples, one primitive per sample
pub struct AudioWavIterMut<'a, T> {
    samples: IterMut<'a, T>,
}

impl<'a> AudioWavIterMut<'a, i16> {
    pub fn new(samples: IterMut<'a, i16>) -> Self {
        Self { samples }
    }
}

/// Audio samples iterator that yields mutable MediaPrimitives `MediaPrimitiveMut`
impl<'a> Iterator for AudioWavIterMut<'a, i16> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(MediaPrimitiveMut::AudioSample)
    }
}

/// Iterating 16-bit little endian samples of a raw frame buffer at a fixed byte stride.
/// A trailing chunk shorter than one sample is skipped, a stride of 0 yields nothing.
pub struct AudioFrameStrideIter {
    frames: Vec<u8>,
    stride: usize,
    offset: usize,
}

impl AudioFrameStrideIter {
    pub fn new(frames: Vec<u8>, stride: usize) -> Self {
        Self {
            frames,
            stride,
            offset: 0,
        }
    }
}

impl Iterator for AudioFrameStrideIter {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stride == 0 {
            return None;
        }
        let sample = self.frames.get(self.offset..self.offset.checked_add(2)?)?;
        self.offset = self.offset.saturating_add(self.stride);

        Some(MediaPrimitive::AudioSample(LittleEndian::read_i16(sample)))
    }
}
