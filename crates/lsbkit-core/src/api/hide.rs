use std::path::{Path, PathBuf};

use log::{error, info};

use crate::media::{CarrierKind, Media, Persist};
use crate::{CodecOptions, LsbError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The text, image or audio file the message is hidden in, picked by extension
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    /// Target file, must be of the same media kind as the carrier
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(message) = self.message else {
            return Err(LsbError::MissingMessage);
        };
        let Some(carrier) = self.carrier else {
            return Err(LsbError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(LsbError::TargetNotSet);
        };

        let mut media = Media::from_file(&carrier)?;
        if CarrierKind::from_path(&output)? != media.kind() {
            error!(
                "Output {output:?} cannot hold a {} carrier",
                media.kind()
            );
            return Err(LsbError::UnsupportedMedia);
        }

        media.hide_message(&message, &self.options)?.save_as(&output)?;
        info!(
            "Hid {} characters from {carrier:?} in {output:?}",
            message.chars().count()
        );

        Ok(())
    }
}
