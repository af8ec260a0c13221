use std::path::{Path, PathBuf};

use log::info;

use crate::media::{persist_bytes, Media};
use crate::{CodecOptions, LsbError, Result};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the carrier that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(LsbError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(LsbError::TargetNotSet);
        };

        let raw = Media::from_file(&secret_media)?.unveil_raw(&self.options)?;
        persist_bytes(&destination_file, &raw)?;
        info!("Dumped {} raw bytes to {destination_file:?}", raw.len());

        Ok(())
    }
}
