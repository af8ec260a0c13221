use std::fmt;
use std::fs;
use std::io::{BufWriter, Read, Seek, Write};
use std::path::Path;

use image::RgbImage;
use log::{debug, error};

use super::audio::{self, WavAudio};
use super::image as image_media;
use super::text;
use super::{stage, CodecOptions, Persist, StagedFile};
use crate::error::{LsbError, Result};
use crate::BitSequence;

/// The three kinds of carrier a message can hide in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierKind {
    Text,
    Image,
    Audio,
}

impl CarrierKind {
    /// Determines the carrier kind by the file extension
    pub fn from_path(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or(LsbError::UnsupportedMedia)?;

        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "png" => Ok(Self::Image),
            "wav" => Ok(Self::Audio),
            _ => Err(LsbError::UnsupportedMedia),
        }
    }
}

impl fmt::Display for CarrierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarrierKind::Text => write!(f, "text"),
            CarrierKind::Image => write!(f, "image"),
            CarrierKind::Audio => write!(f, "audio"),
        }
    }
}

/// Fails with a capacity error when `needed` exceeds `available`, nothing is written in that case.
pub(crate) fn ensure_capacity(carrier: CarrierKind, needed: usize, available: usize) -> Result<()> {
    if needed > available {
        error!("Message does not fit into the {carrier} carrier: needs {needed}, has {available}");
        return Err(LsbError::CapacityError {
            carrier,
            needed,
            available,
        });
    }
    debug!("Message fits into the {carrier} carrier: needs {needed}, has {available}");

    Ok(())
}

/// a media container for steganography
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Text(String),
    Image(RgbImage),
    Audio(WavAudio),
}

impl Media {
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    pub fn from_image(img: RgbImage) -> Self {
        Self::Image(img)
    }

    pub fn from_audio(audio: WavAudio) -> Self {
        Self::Audio(audio)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        match CarrierKind::from_path(f)? {
            CarrierKind::Text => {
                let bytes = fs::read(f).map_err(|source| {
                    error!("Error reading text carrier {f:?}: {source}");
                    LsbError::ReadError { source }
                })?;
                let text = String::from_utf8(bytes).map_err(|_e| LsbError::InvalidTextMedia)?;

                Ok(Self::Text(text))
            }
            CarrierKind::Image => Ok(Self::Image(
                image::open(f)
                    .map_err(|e| {
                        error!("Error opening image carrier {f:?}: {e}");
                        LsbError::InvalidImageMedia
                    })?
                    .to_rgb8(),
            )),
            CarrierKind::Audio => Ok(Self::Audio(WavAudio::open(f)?)),
        }
    }

    pub fn kind(&self) -> CarrierKind {
        match self {
            Media::Text(_) => CarrierKind::Text,
            Media::Image(_) => CarrierKind::Image,
            Media::Audio(_) => CarrierKind::Audio,
        }
    }

    /// Hides a message in the carrier, images take the message expanded to its bits
    pub fn hide_message(&mut self, message: &str, opts: &CodecOptions) -> Result<&mut Self> {
        match self {
            Media::Text(t) => {
                *t = text::encode_text(t, message, &opts.text)?;
            }
            Media::Image(i) => {
                let bits = BitSequence::from_message(message)?;
                image_media::encode_image(i, &bits, &opts.image)?;
            }
            Media::Audio(a) => {
                audio::encode_audio(a, message, &opts.audio)?;
            }
        }

        Ok(self)
    }

    /// Decodes every unit of the carrier, trailing characters beyond the hidden message are noise
    pub fn unveil_message(&self, opts: &CodecOptions) -> String {
        match self {
            Media::Text(t) => text::decode_text(t),
            Media::Image(i) => image_media::decode_image(i),
            Media::Audio(a) => audio::decode_audio(a, &opts.audio),
        }
    }

    /// Just a raw binary dump of the bytes gathered by the LSB algorithm.
    pub fn unveil_raw(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        match self {
            Media::Text(t) => text::LsbCodec::decoder(t).read_to_end(&mut buf)?,
            Media::Image(i) => image_media::LsbCodec::decoder(i).read_to_end(&mut buf)?,
            Media::Audio(a) => audio::LsbCodec::decoder_with_options(a, &opts.audio)
                .read_to_end(&mut buf)?,
        };

        Ok(buf)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        match self {
            Media::Text(t) => writer
                .write_all(t.as_bytes())
                .map_err(|source| LsbError::WriteError { source }),
            Media::Image(i) => i
                .write_to(&mut writer, image::ImageFormat::Png)
                .map_err(|e| {
                    error!("Error saving image: {e}");
                    LsbError::ImageEncodingError
                }),
            Media::Audio(a) => a.write_to(writer),
        }
    }

    /// Writes the media into a temporary file next to `file`, the target appears on commit.
    pub(crate) fn stage_as(&self, file: &Path) -> Result<StagedFile> {
        stage(file, |f| {
            let mut writer = BufWriter::new(f);
            self.save_to_writer(&mut writer)?;
            writer
                .flush()
                .map_err(|source| LsbError::WriteError { source })
        })
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        self.stage_as(file)?.commit()
    }
}
