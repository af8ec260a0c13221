//! Length prefixed container bundling an image raster, audio frames and a text blob.

mod record;

use image::RgbImage;
use log::debug;

use record::raster_len;
pub use record::{AudioSection, ContainerLayout, ContainerRecord, ImageSection};

use crate::media::image::CHANNELS_PER_PIXEL;
use crate::media::audio::WavAudio;
use crate::{LsbError, Result};

/// Serializes the three blobs in the classic layout.
///
/// ## Example of usage
/// ```rust
/// let container = lsbkit_core::merge(b"IMG", b"AUD", 44100, 2, b"TXT")
///     .expect("Cannot merge");
/// assert_eq!(container.len(), 29);
/// ```
pub fn merge(
    image: &[u8],
    audio: &[u8],
    sample_rate: u32,
    sample_width: u32,
    text: &[u8],
) -> Result<Vec<u8>> {
    ContainerRecord {
        image: ImageSection {
            dimensions: None,
            data: image.to_vec(),
        },
        audio: AudioSection {
            data: audio.to_vec(),
            sample_rate,
            sample_width,
        },
        text: text.to_vec(),
    }
    .to_bytes(ContainerLayout::Classic)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnmergeOptions {
    pub layout: ContainerLayout,
    /// width and height of the raster, persisted dimensions take precedence
    pub image_dimensions: Option<(u32, u32)>,
}

/// The artifacts restored from a container
#[derive(Debug, Clone, PartialEq)]
pub struct Unmerged {
    pub image: RgbImage,
    pub audio: WavAudio,
    pub text: Vec<u8>,
}

/// Parses and validates the whole container before building any artifact.
pub fn unmerge(bytes: &[u8], opts: &UnmergeOptions) -> Result<Unmerged> {
    let record = ContainerRecord::from_bytes(bytes, opts.layout)?;
    Unmerged::from_record(record, opts.image_dimensions)
}

impl Unmerged {
    pub fn from_record(record: ContainerRecord, hint: Option<(u32, u32)>) -> Result<Self> {
        let ContainerRecord { image, audio, text } = record;

        let (width, height) = match (image.dimensions, hint) {
            (Some(dimensions), _) => dimensions,
            (None, Some(dimensions)) => dimensions,
            (None, None) => square_dimensions(image.data.len())?,
        };
        debug!("Restoring a {width}x{height} image raster");
        let image_len = image.data.len();
        let mismatch = || {
            LsbError::MalformedContainer(format!(
                "image section of {image_len} bytes does not match {width}x{height} pixels"
            ))
        };
        if raster_len(width, height) != Some(image_len) {
            return Err(mismatch());
        }
        let image = RgbImage::from_raw(width, height, image.data).ok_or_else(mismatch)?;

        let audio = WavAudio::from_frame_bytes(audio.sample_rate, audio.sample_width, &audio.data)?;

        Ok(Self { image, audio, text })
    }
}

fn square_dimensions(len: usize) -> Result<(u32, u32)> {
    let pixels = len / CHANNELS_PER_PIXEL;
    let side = (pixels as f64).sqrt().round() as usize;
    if len % CHANNELS_PER_PIXEL != 0 || side * side != pixels {
        return Err(LsbError::MalformedContainer(format!(
            "image section of {len} bytes is no square raster, dimensions are needed"
        )));
    }
    let side = u32::try_from(side).map_err(|_| {
        LsbError::MalformedContainer(format!("image section of {len} bytes is too large"))
    })?;

    Ok((side, side))
}
