//! # lsbkit core
//!
//! Least significant bit steganography for three carrier kinds
//! - text, one bit per character via [`encode_text`] / [`decode_text`]
//! - RGB images, one bit per colour channel via [`encode_image`] / [`decode_image`]
//! - 16-bit PCM audio, one bit per sample via [`encode_audio`] / [`decode_audio`]
//!
//! plus a length prefixed container that bundles an image, an audio track and a text
//! via [`merge`] / [`unmerge`].
//!
//! Messages are stored without a terminator, decoding returns every character the carrier
//! holds and the caller cuts it to the known message length.
//!
//! # Usage Examples
//!
//! ## Hide a message in a text
//!
//! ```rust
//! use lsbkit_core::{decode_text, encode_text, CodecOptions};
//!
//! let opts = CodecOptions::default();
//! let secret = encode_text("AAAAAAAA", "A", &opts.text).expect("Cannot hide message");
//! assert_eq!(secret, "@A@@@@@A");
//! assert_eq!(decode_text(&secret), "A");
//! ```
//!
//! ## Hide a message in an image file
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::new(8, 8).save(&carrier).expect("Cannot save carrier");
//!
//! lsbkit_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_carrier(&carrier)
//!     .with_output(temp_dir.path().join("image-with-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = lsbkit_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-secret.png"))
//!     .with_length(13)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod bit_sequence;
pub mod commands;
pub mod container;
pub mod error;
pub mod media;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::bit_sequence::BitSequence;
pub use crate::container::{
    merge, unmerge, ContainerLayout, ContainerRecord, UnmergeOptions, Unmerged,
};
pub use crate::error::{LsbError, Result};
pub use crate::media::audio::{decode_audio, encode_audio, WavAudio};
pub use crate::media::image::{decode_image, encode_image};
pub use crate::media::text::{decode_text, encode_text};
pub use crate::media::{CarrierKind, CodecOptions, Media, Persist};
