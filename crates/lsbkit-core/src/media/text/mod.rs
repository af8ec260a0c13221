pub mod lsb_codec;

pub use lsb_codec::{decode_text, encode_text, LsbCodec};
