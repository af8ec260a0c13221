use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use image::RgbImage;

use crate::media::image::CHANNELS_PER_PIXEL;
use crate::media::audio::WavAudio;
use crate::{LsbError, Result};

const LENGTH_PREFIX: usize = 4;

/// Byte length of a `width` x `height` RGB raster, `None` if it does not fit into `usize`.
pub(crate) fn raster_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS_PER_PIXEL)
}

/// Byte layout of a container
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContainerLayout {
    /// `imgLen | img | audLen | aud | rate | width | txtLen | txt`
    Classic,
    /// `imgLen | imgWidth | imgHeight | img | audLen | aud | rate | width | txtLen | txt`
    #[default]
    Dimensioned,
}

/// Raw RGB raster, row major with 3 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSection {
    pub dimensions: Option<(u32, u32)>,
    pub data: Vec<u8>,
}

/// Raw little endian PCM frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSection {
    pub data: Vec<u8>,
    pub sample_rate: u32,
    pub sample_width: u32,
}

/// The three payloads of a container, each one opaque to the container itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    pub image: ImageSection,
    pub audio: AudioSection,
    pub text: Vec<u8>,
}

impl ContainerRecord {
    /// Takes the raster, the frames and the text as they are.
    pub fn from_media(image: &RgbImage, audio: &WavAudio, text: &[u8]) -> Self {
        Self {
            image: ImageSection {
                dimensions: Some(image.dimensions()),
                data: image.as_raw().clone(),
            },
            audio: AudioSection {
                data: audio.frame_bytes(),
                sample_rate: audio.sample_rate(),
                sample_width: u32::from(audio.sample_width()),
            },
            text: text.to_vec(),
        }
    }

    pub fn to_bytes(&self, layout: ContainerLayout) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(
            self.image.data.len() + self.audio.data.len() + self.text.len() + 7 * LENGTH_PREFIX,
        );

        write_len(&mut buf, "image", self.image.data.len())?;
        if layout == ContainerLayout::Dimensioned {
            let (width, height) = self.image.dimensions.ok_or_else(|| {
                LsbError::MalformedContainer(
                    "image dimensions are required by the dimensioned layout".to_string(),
                )
            })?;
            buf.write_u32::<LittleEndian>(width)?;
            buf.write_u32::<LittleEndian>(height)?;
        }
        buf.write_all(&self.image.data)?;

        write_len(&mut buf, "audio", self.audio.data.len())?;
        buf.write_all(&self.audio.data)?;
        buf.write_u32::<LittleEndian>(self.audio.sample_rate)?;
        buf.write_u32::<LittleEndian>(self.audio.sample_width)?;

        write_len(&mut buf, "text", self.text.len())?;
        buf.write_all(&self.text)?;

        Ok(buf)
    }

    /// Parses the whole buffer, every byte must belong to a section.
    pub fn from_bytes(bytes: &[u8], layout: ContainerLayout) -> Result<Self> {
        let mut reader = SectionReader::new(bytes);

        let image_len = reader.read_u32("image length")? as usize;
        let dimensions = match layout {
            ContainerLayout::Classic => None,
            ContainerLayout::Dimensioned => {
                let width = reader.read_u32("image width")?;
                let height = reader.read_u32("image height")?;
                if raster_len(width, height) != Some(image_len) {
                    return Err(LsbError::MalformedContainer(format!(
                        "image of {width}x{height} pixels does not match its section of {image_len} bytes"
                    )));
                }
                Some((width, height))
            }
        };
        let image = ImageSection {
            dimensions,
            data: reader.read_bytes("image data", image_len)?.to_vec(),
        };

        let audio_len = reader.read_u32("audio length")? as usize;
        let data = reader.read_bytes("audio data", audio_len)?.to_vec();
        let audio = AudioSection {
            data,
            sample_rate: reader.read_u32("sample rate")?,
            sample_width: reader.read_u32("sample width")?,
        };

        let text_len = reader.read_u32("text length")? as usize;
        let text = reader.read_bytes("text data", text_len)?.to_vec();

        if reader.remaining() > 0 {
            return Err(LsbError::MalformedContainer(format!(
                "{} bytes trail the text section",
                reader.remaining()
            )));
        }

        Ok(Self { image, audio, text })
    }
}

fn write_len(buf: &mut Vec<u8>, section: &str, len: usize) -> Result<()> {
    let len = u32::try_from(len).map_err(|_| {
        LsbError::MalformedContainer(format!(
            "{section} section of {len} bytes does not fit a 32 bit length"
        ))
    })?;
    buf.write_u32::<LittleEndian>(len)?;

    Ok(())
}

struct SectionReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> SectionReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn read_bytes(&mut self, field: &str, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(LsbError::MalformedContainer(format!(
                "{field} needs {len} bytes at offset {}, only {} left",
                self.offset,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;

        Ok(slice)
    }

    fn read_u32(&mut self, field: &str) -> Result<u32> {
        self.read_bytes(field, LENGTH_PREFIX)
            .map(LittleEndian::read_u32)
    }
}
