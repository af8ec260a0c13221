use std::path::{Path, PathBuf};

use crate::media::Media;
use crate::{CodecOptions, LsbError, Result};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    length: Option<usize>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the carrier that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Cuts the decoded characters to the known message length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn use_length(mut self, length: Option<usize>) -> Self {
        self.length = length;
        self
    }

    /// Decodes the whole carrier, without a length the result contains trailing noise.
    pub fn execute(self) -> Result<String> {
        let Some(secret_media) = self.secret_media else {
            return Err(LsbError::CarrierNotSet);
        };

        let message = Media::from_file(&secret_media)?.unveil_message(&self.options);

        Ok(match self.length {
            Some(length) => message.chars().take(length).collect(),
            None => message,
        })
    }
}
