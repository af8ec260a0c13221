pub mod lsb_codec;
pub mod wav_audio;
pub mod wav_iter;

pub use lsb_codec::{decode_audio, encode_audio, LsbCodec};
pub use wav_audio::WavAudio;
