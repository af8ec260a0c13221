use log::debug;

use crate::media::{
    ensure_capacity, CapacityCheck, CarrierKind, MediaPrimitive, MediaPrimitiveMut,
    TextCodecOptions,
};
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};
use crate::{BitSequence, Result};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Text Decoder, one bit per character
    pub fn decoder(
        carrier: &str,
    ) -> UniversalDecoder<impl Iterator<Item = MediaPrimitive> + '_, OneBitUnveil> {
        UniversalDecoder::new(carrier.chars().map(MediaPrimitive::TextCharacter), OneBitUnveil)
    }

    /// builds a LSB Text Encoder, one bit per character
    pub fn encoder(
        carrier: &mut [char],
    ) -> UniversalEncoder<impl Iterator<Item = MediaPrimitiveMut<'_>>, OneBitHide> {
        UniversalEncoder::new(
            carrier.iter_mut().map(MediaPrimitiveMut::TextCharacter),
            OneBitHide,
        )
    }
}

/// Replaces the LSB of the leading carrier characters with the message bits,
/// the rest of the carrier is copied unchanged.
pub fn encode_text(carrier: &str, message: &str, opts: &TextCodecOptions) -> Result<String> {
    let bits = BitSequence::from_message(message)?;
    let mut chars: Vec<char> = carrier.chars().collect();

    let available = match opts.capacity {
        CapacityCheck::Exact => chars.len(),
        CapacityCheck::Legacy => chars.len() << 3,
    };
    ensure_capacity(CarrierKind::Text, bits.len(), available)?;

    let hidden = LsbCodec::encoder(&mut chars).hide_bits(bits.iter())?;
    debug!(
        "Hid {hidden} of {} message bits in {} text characters",
        bits.len(),
        chars.len()
    );

    Ok(chars.into_iter().collect())
}

/// Decodes the LSBs of the whole carrier, the caller knows where the message ends.
pub fn decode_text(carrier: &str) -> String {
    LsbCodec::decoder(carrier).unveil_bits().to_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LsbError;
    use std::io::Read;

    fn lsbs(text: &str) -> Vec<u32> {
        text.chars().map(|c| c as u32 & 1).collect()
    }

    #[test]
    fn should_encode_a_single_character() {
        let encoded = encode_text("AAAAAAAA", "A", &TextCodecOptions::default()).unwrap();

        assert_eq!(lsbs(&encoded), vec![0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encoded, "@A@@@@@A");
        assert_eq!(decode_text(&encoded), "A");
    }

    #[test]
    fn should_keep_the_upper_bits_and_the_unused_tail() {
        let carrier = "The quick brown fox jumps over the lazy dog";
        let encoded = encode_text(carrier, "ok", &TextCodecOptions::default()).unwrap();

        assert_eq!(encoded.chars().count(), carrier.chars().count());
        for (e, c) in encoded.chars().zip(carrier.chars()) {
            assert_eq!(e as u32 >> 1, c as u32 >> 1);
        }
        assert_eq!(&encoded[16..], &carrier[16..]);
        assert!(decode_text(&encoded).starts_with("ok"));
    }

    #[test]
    fn should_leave_the_carrier_untouched_for_an_empty_message() {
        let carrier = "unchanged carrier";
        let encoded = encode_text(carrier, "", &TextCodecOptions::default()).unwrap();

        assert_eq!(encoded, carrier);
    }

    #[test]
    fn should_decode_the_whole_carrier() {
        let encoded = encode_text("AAAAAAAAAAAAAAAAAAAA", "A", &TextCodecOptions::default())
            .unwrap();

        // 20 characters carry two whole bytes, the second one is unwritten noise
        let decoded = decode_text(&encoded);
        assert_eq!(decoded.chars().count(), 2);
        assert_eq!(decoded.chars().next(), Some('A'));
    }

    #[test]
    fn should_hide_in_multi_byte_carrier_characters() {
        let carrier = "ÄÖÜäöüßéèê€∑";
        let encoded = encode_text(carrier, "x", &TextCodecOptions::default()).unwrap();

        assert_eq!(decode_text(&encoded).chars().next(), Some('x'));
    }

    #[test]
    fn should_reject_a_message_with_more_bits_than_characters() {
        match encode_text("short", "A", &TextCodecOptions::default()) {
            Err(LsbError::CapacityError {
                carrier,
                needed,
                available,
            }) => {
                assert_eq!(carrier, CarrierKind::Text);
                assert_eq!(needed, 8);
                assert_eq!(available, 5);
            }
            other => panic!("expected a capacity error, got {other:?}"),
        }
    }

    #[test]
    fn legacy_capacity_should_reject_more_characters_than_the_carrier_has() {
        let opts = TextCodecOptions {
            capacity: CapacityCheck::Legacy,
        };

        assert!(matches!(
            encode_text("abc", "abcd", &opts),
            Err(LsbError::CapacityError { .. })
        ));
    }

    #[test]
    fn legacy_capacity_should_truncate_what_does_not_fit() {
        let opts = TextCodecOptions {
            capacity: CapacityCheck::Legacy,
        };
        let encoded = encode_text("AAAAAAAAAAAA", "AB", &opts).unwrap();

        assert_eq!(encoded.chars().count(), 12);
        assert_eq!(decode_text(&encoded), "A");
    }

    #[test]
    fn should_reject_messages_outside_the_byte_range() {
        assert!(matches!(
            encode_text("a very long carrier text", "€", &TextCodecOptions::default()),
            Err(LsbError::EncodingError { character: '€', .. })
        ));
    }

    #[test]
    fn should_read_raw_bytes() {
        let encoded = encode_text("AAAAAAAAAAAAAAAA", "Hi", &TextCodecOptions::default()).unwrap();
        let mut buf = vec![0; 2];
        LsbCodec::decoder(&encoded)
            .read_exact(&mut buf)
            .expect("Cannot read 2 bytes from codec");

        assert_eq!(buf, b"Hi");
    }
}
