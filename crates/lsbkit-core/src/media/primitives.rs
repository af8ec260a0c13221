use crate::{LsbError, Result};

/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitive {
    TextCharacter(char),
    ImageColorChannel(u8),
    AudioSample(i16),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl From<char> for MediaPrimitive {
    fn from(value: char) -> Self {
        MediaPrimitive::TextCharacter(value)
    }
}

impl MediaPrimitive {
    /// the least significant bit of the primitive
    pub fn lsb(&self) -> bool {
        match self {
            MediaPrimitive::TextCharacter(c) => *c as u32 & 1 == 1,
            MediaPrimitive::ImageColorChannel(c) => c & 1 == 1,
            MediaPrimitive::AudioSample(s) => s & 1 == 1,
        }
    }
}

/// mutable primitive for storing hidden bits
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    TextCharacter(&'a mut char),
    ImageColorChannel(&'a mut u8),
    AudioSample(&'a mut i16),
}

impl MediaPrimitiveMut<'_> {
    /// replaces the least significant bit, all other bits stay as they are
    pub fn set_lsb(self, bit: bool) -> Result<()> {
        match self {
            MediaPrimitiveMut::TextCharacter(c) => {
                let code_point = (*c as u32 & !1) | u32::from(bit);
                // surrogates span D800..=DFFF, so an LSB flip never enters or leaves them
                *c = char::from_u32(code_point).ok_or(LsbError::EncodingError {
                    character: *c,
                    position: 0,
                })?;
            }
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = (*c & (u8::MAX - 1)) | u8::from(bit);
            }
            MediaPrimitiveMut::AudioSample(s) => {
                *s = (*s & !1) | i16::from(bit);
            }
        }
        Ok(())
    }

    pub fn clear_lsb(self) -> Result<()> {
        self.set_lsb(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_to_mutate_colors() {
        let mut color: u8 = 8;
        MediaPrimitiveMut::ImageColorChannel(&mut color)
            .set_lsb(true)
            .unwrap();

        assert_eq!(color, 9);
    }

    #[test]
    fn should_keep_the_sign_of_negative_samples() {
        let mut sample: i16 = -3;
        MediaPrimitiveMut::AudioSample(&mut sample)
            .set_lsb(false)
            .unwrap();
        assert_eq!(sample, -4);

        MediaPrimitiveMut::AudioSample(&mut sample)
            .set_lsb(true)
            .unwrap();
        assert_eq!(sample, -3);
    }

    #[test]
    fn should_flip_character_lsb_without_leaving_valid_scalars() {
        for original in ['A', '\u{D7FF}', '\u{E000}', '\u{10FFFF}', 'é'] {
            let mut c = original;
            MediaPrimitiveMut::TextCharacter(&mut c)
                .set_lsb(true)
                .unwrap();
            assert_eq!(c as u32, original as u32 | 1);

            MediaPrimitiveMut::TextCharacter(&mut c).clear_lsb().unwrap();
            assert_eq!(c as u32, original as u32 & !1);
        }
    }

    #[test]
    fn should_read_the_lsb() {
        assert!(MediaPrimitive::from('A').lsb());
        assert!(!MediaPrimitive::from(0xFEu8).lsb());
        assert!(MediaPrimitive::AudioSample(-1).lsb());
    }
}
