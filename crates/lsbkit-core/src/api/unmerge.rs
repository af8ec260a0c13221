use std::path::{Path, PathBuf};

use log::info;

use crate::container::{unmerge, ContainerLayout, UnmergeOptions};
use crate::media::{read_bytes, stage_bytes, Media};
use crate::{LsbError, Result};

pub fn prepare() -> UnmergeApi {
    UnmergeApi::default()
}

#[derive(Default, Debug)]
pub struct UnmergeApi {
    container: Option<PathBuf>,
    image_output: Option<PathBuf>,
    audio_output: Option<PathBuf>,
    text_output: Option<PathBuf>,
    options: UnmergeOptions,
}

impl UnmergeApi {
    pub fn with_options(mut self, options: UnmergeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_layout(mut self, layout: ContainerLayout) -> Self {
        self.options.layout = layout;
        self
    }

    /// Raster dimensions for containers that do not persist them
    pub fn use_image_dimensions(mut self, dimensions: Option<(u32, u32)>) -> Self {
        self.options.image_dimensions = dimensions;
        self
    }

    pub fn from_container<A: AsRef<Path>>(mut self, container: A) -> Self {
        self.container = Some(container.as_ref().to_path_buf());
        self
    }

    pub fn into_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image_output = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn into_audio<A: AsRef<Path>>(mut self, audio: A) -> Self {
        self.audio_output = Some(audio.as_ref().to_path_buf());
        self
    }

    pub fn into_text<A: AsRef<Path>>(mut self, text: A) -> Self {
        self.text_output = Some(text.as_ref().to_path_buf());
        self
    }

    /// Nothing is written unless the whole container is valid. All three outputs are
    /// written to temporary files first and renamed onto their targets afterwards.
    pub fn execute(self) -> Result<()> {
        let Some(container) = self.container else {
            return Err(LsbError::CarrierNotSet);
        };
        let (Some(image_output), Some(audio_output), Some(text_output)) =
            (self.image_output, self.audio_output, self.text_output)
        else {
            return Err(LsbError::TargetNotSet);
        };

        let unmerged = unmerge(&read_bytes(&container)?, &self.options)?;
        let (width, height) = unmerged.image.dimensions();
        let text_len = unmerged.text.len();

        let staged = [
            Media::from_image(unmerged.image).stage_as(&image_output)?,
            Media::from_audio(unmerged.audio).stage_as(&audio_output)?,
            stage_bytes(&text_output, &unmerged.text)?,
        ];
        for file in staged {
            file.commit()?;
        }
        info!("Unmerged {container:?} into a {width}x{height} image, audio and {text_len} text bytes");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Persist;
    use crate::test_utils::{prepare_5x5_image, prepare_mono_audio};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = temp_dir.path().join("image.png");
        let audio = temp_dir.path().join("audio.wav");
        let text = temp_dir.path().join("text.txt");
        let bundle = temp_dir.path().join("bundle.bin");
        Media::from_image(prepare_5x5_image()).save_as(&image).unwrap();
        Media::from_audio(prepare_mono_audio(16)).save_as(&audio).unwrap();
        fs::write(&text, "TXT").unwrap();
        crate::api::merge::prepare()
            .with_image(&image)
            .with_audio(&audio)
            .with_text(&text)
            .with_output(&bundle)
            .execute()
            .expect("Failed to merge");

        crate::api::unmerge::prepare()
            .from_container(&bundle)
            .into_image(temp_dir.path().join("out.png"))
            .into_audio(temp_dir.path().join("out.wav"))
            .into_text(temp_dir.path().join("out.txt"))
            .execute()
            .expect("Failed to unmerge");

        assert_eq!(
            Media::from_file(&temp_dir.path().join("out.png")).unwrap(),
            Media::from_image(prepare_5x5_image())
        );
        assert_eq!(
            Media::from_file(&temp_dir.path().join("out.wav")).unwrap(),
            Media::from_audio(prepare_mono_audio(16))
        );
        assert_eq!(fs::read(temp_dir.path().join("out.txt")).unwrap(), b"TXT");
    }

    #[test]
    fn should_write_nothing_for_a_malformed_container() {
        let temp_dir = tempdir().unwrap();
        let bundle = temp_dir.path().join("bundle.bin");
        fs::write(&bundle, [3, 0, 0, 0, 1]).unwrap();

        let result = prepare()
            .from_container(&bundle)
            .into_image(temp_dir.path().join("out.png"))
            .into_audio(temp_dir.path().join("out.wav"))
            .into_text(temp_dir.path().join("out.txt"))
            .execute();

        assert!(matches!(result, Err(LsbError::MalformedContainer(_))));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn should_write_no_output_when_a_later_output_fails() {
        let temp_dir = tempdir().unwrap();
        let bundle = temp_dir.path().join("bundle.bin");
        let bytes = crate::ContainerRecord::from_media(
            &prepare_5x5_image(),
            &prepare_mono_audio(16),
            b"TXT",
        )
        .to_bytes(ContainerLayout::Dimensioned)
        .unwrap();
        fs::write(&bundle, bytes).unwrap();
        let image_output = temp_dir.path().join("out.png");
        let audio_output = temp_dir.path().join("out.wav");

        let result = prepare()
            .from_container(&bundle)
            .into_image(&image_output)
            .into_audio(&audio_output)
            .into_text(temp_dir.path().join("missing").join("out.txt"))
            .execute();

        assert!(matches!(result, Err(LsbError::WriteError { .. })));
        assert!(!image_output.exists());
        assert!(!audio_output.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
