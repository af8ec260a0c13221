use std::path::{Path, PathBuf};

use log::{error, info};

use crate::container::{ContainerLayout, ContainerRecord};
use crate::media::{persist_bytes, read_bytes, Media};
use crate::{LsbError, Result};

pub fn prepare() -> MergeApi {
    MergeApi::default()
}

#[derive(Default, Debug)]
pub struct MergeApi {
    image: Option<PathBuf>,
    audio: Option<PathBuf>,
    text: Option<PathBuf>,
    output: Option<PathBuf>,
    layout: ContainerLayout,
}

impl MergeApi {
    pub fn with_layout(mut self, layout: ContainerLayout) -> Self {
        self.layout = layout;
        self
    }

    /// PNG file, its RGB raster goes into the container
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// WAV file, its frames and format go into the container
    pub fn with_audio<A: AsRef<Path>>(mut self, audio: A) -> Self {
        self.audio = Some(audio.as_ref().to_path_buf());
        self
    }

    /// Any file, its bytes go into the container unchanged
    pub fn with_text<A: AsRef<Path>>(mut self, text: A) -> Self {
        self.text = Some(text.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let (Some(image), Some(audio), Some(text)) = (self.image, self.audio, self.text) else {
            return Err(LsbError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(LsbError::TargetNotSet);
        };

        let Media::Image(raster) = Media::from_file(&image)? else {
            error!("{image:?} is not an image");
            return Err(LsbError::UnsupportedMedia);
        };
        let Media::Audio(frames) = Media::from_file(&audio)? else {
            error!("{audio:?} is not an audio file");
            return Err(LsbError::UnsupportedMedia);
        };
        let text = read_bytes(&text)?;

        let container =
            ContainerRecord::from_media(&raster, &frames, &text).to_bytes(self.layout)?;
        persist_bytes(&output, &container)?;
        info!(
            "Merged {} bytes into {output:?} ({:?} layout)",
            container.len(),
            self.layout
        );

        Ok(())
    }
}
