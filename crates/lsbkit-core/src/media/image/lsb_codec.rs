use image::RgbImage;
use log::debug;

use super::iterators::{ColorIter, ColorIterMut, Transpose, TransposeMut};
use crate::media::{
    ensure_capacity, CarrierKind, ImageCodecOptions, ImageTail, MediaPrimitive, MediaPrimitiveMut,
};
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{EvenOutRedGreenHide, HideAlgorithms, OneBitHide, UniversalEncoder};
use crate::{BitSequence, Result};

/// Number of colour channels that carry a bit, per pixel
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder, visits x outer, y inner and R, G, B per pixel
    pub fn decoder(
        input: &RgbImage,
    ) -> UniversalDecoder<impl Iterator<Item = MediaPrimitive> + '_, OneBitUnveil> {
        UniversalDecoder::new(
            ColorIter::from_transpose(Transpose::from_rows(input.rows(), input.width()))
                .map(|c| MediaPrimitive::ImageColorChannel(*c)),
            OneBitUnveil,
        )
    }

    /// builds a LSB Image Encoder with the same traversal as the decoder
    pub fn encoder<'i>(
        carrier: &'i mut RgbImage,
        opts: &ImageCodecOptions,
    ) -> UniversalEncoder<impl Iterator<Item = MediaPrimitiveMut<'i>>, HideAlgorithms> {
        let algorithm: HideAlgorithms = match opts.tail {
            ImageTail::Preserve => OneBitHide.into(),
            ImageTail::EvenOutRedGreen => EvenOutRedGreenHide.into(),
        };
        let w = carrier.width();

        UniversalEncoder::new(
            ColorIterMut::from_transpose(TransposeMut::from_rows_mut(carrier.rows_mut(), w))
                .map(MediaPrimitiveMut::ImageColorChannel),
            algorithm,
        )
    }

    /// number of bits the image can carry
    pub fn capacity(image: &RgbImage) -> usize {
        image.width() as usize * image.height() as usize * CHANNELS_PER_PIXEL
    }
}

/// Hides the bits in the colour channels of the image, in place.
pub fn encode_image(
    carrier: &mut RgbImage,
    bits: &BitSequence,
    opts: &ImageCodecOptions,
) -> Result<()> {
    // both capacity checks agree for images
    ensure_capacity(CarrierKind::Image, bits.len(), LsbCodec::capacity(carrier))?;

    let hidden = LsbCodec::encoder(carrier, opts).hide_bits(bits.iter())?;
    debug!(
        "Hid {hidden} bits in a {}x{} image",
        carrier.width(),
        carrier.height()
    );

    Ok(())
}

/// Decodes the LSBs of every colour channel, the caller knows where the message ends.
pub fn decode_image(carrier: &RgbImage) -> String {
    LsbCodec::decoder(carrier).unveil_bits().to_message()
}
