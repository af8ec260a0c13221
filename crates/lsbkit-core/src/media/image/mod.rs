pub(crate) mod iterators;
pub mod lsb_codec;

pub use lsb_codec::{decode_image, encode_image, LsbCodec, CHANNELS_PER_PIXEL};
