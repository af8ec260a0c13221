use std::path::PathBuf;

use clap::Args;

use super::LayoutArg;
use crate::CliResult;

/// Bundles a PNG image, a WAV audio file and a text file into one container
#[derive(Args, Debug)]
pub struct MergeArgs {
    #[arg(long, value_name = "png file", required = true)]
    pub image: PathBuf,

    #[arg(long, value_name = "wav file", required = true)]
    pub audio: PathBuf,

    /// Stored as raw bytes
    #[arg(long, value_name = "text file", required = true)]
    pub text: PathBuf,

    #[arg(
        short = 'o',
        long = "out",
        value_name = "container file",
        required = true
    )]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = LayoutArg::default())]
    pub layout: LayoutArg,
}

impl MergeArgs {
    pub fn run(self) -> CliResult<()> {
        lsbkit_core::commands::merge(
            &self.image,
            &self.audio,
            &self.text,
            &self.output,
            self.layout.into(),
        )
    }
}
