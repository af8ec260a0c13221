use enum_dispatch::enum_dispatch;

use crate::media::MediaPrimitiveMut;
use crate::Result;

/// generic hiding algorithm, used for specific ones like LSB
#[enum_dispatch]
pub trait HideAlgorithm {
    /// hides one bit in the primitive at `position`, `bit` is `None` once the message is exhausted
    fn hide(&self, primitive: MediaPrimitiveMut, position: usize, bit: Option<bool>) -> Result<()>;

    /// whether primitives after the last message bit are visited at all
    fn touches_residual(&self) -> bool {
        false
    }
}

/// default 1 bit hiding strategy, leaves everything after the message untouched
#[derive(Debug, Default)]
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    fn hide(&self, primitive: MediaPrimitiveMut, _position: usize, bit: Option<bool>) -> Result<()> {
        match bit {
            Some(bit) => primitive.set_lsb(bit),
            None => Ok(()),
        }
    }
}

/// 1 bit hiding that evens out the red and green channels after the message,
/// blue channels (every third primitive) are left as they are
#[derive(Debug, Default)]
pub struct EvenOutRedGreenHide;

impl HideAlgorithm for EvenOutRedGreenHide {
    fn hide(&self, primitive: MediaPrimitiveMut, position: usize, bit: Option<bool>) -> Result<()> {
        match bit {
            Some(bit) => primitive.set_lsb(bit),
            None if position % 3 != 2 => primitive.clear_lsb(),
            None => Ok(()),
        }
    }

    fn touches_residual(&self) -> bool {
        true
    }
}

#[enum_dispatch(HideAlgorithm)]
#[derive(Debug)]
pub enum HideAlgorithms {
    OneBitHide,
    EvenOutRedGreenHide,
}

/// generic LSB encoder, hides one bit per media primitive
pub struct UniversalEncoder<I, A> {
    input: I,
    algorithm: A,
}

impl<'a, I, A> UniversalEncoder<I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }

    /// hides the given bits in order and returns how many of them found a primitive
    pub fn hide_bits<B: IntoIterator<Item = bool>>(self, bits: B) -> Result<usize> {
        let Self { input, algorithm } = self;
        let mut bits = bits.into_iter().fuse();
        let mut hidden = 0;

        for (position, primitive) in input.enumerate() {
            let bit = bits.next();
            if bit.is_none() && !algorithm.touches_residual() {
                break;
            }
            algorithm.hide(primitive, position, bit)?;
            hidden += usize::from(bit.is_some());
        }

        Ok(hidden)
    }
}
