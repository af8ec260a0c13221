use std::path::PathBuf;

use clap::Args;
use lsbkit_core::UnmergeOptions;

use super::LayoutArg;
use crate::CliResult;

/// Restores the PNG image, WAV audio file and text file of a container
#[derive(Args, Debug)]
pub struct UnmergeArgs {
    #[arg(
        short = 'i',
        long = "in",
        value_name = "container file",
        required = true
    )]
    pub container: PathBuf,

    #[arg(long, value_name = "png file", required = true)]
    pub image_out: PathBuf,

    #[arg(long, value_name = "wav file", required = true)]
    pub audio_out: PathBuf,

    #[arg(long, value_name = "text file", required = true)]
    pub text_out: PathBuf,

    #[arg(long, value_enum, default_value_t = LayoutArg::default())]
    pub layout: LayoutArg,

    /// Image width for classic containers
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Image height for classic containers
    #[arg(long, requires = "width")]
    pub height: Option<u32>,
}

impl UnmergeArgs {
    pub fn run(self) -> CliResult<()> {
        let options = UnmergeOptions {
            layout: self.layout.into(),
            image_dimensions: self.width.zip(self.height),
        };

        lsbkit_core::commands::unmerge(
            &self.container,
            &self.image_out,
            &self.audio_out,
            &self.text_out,
            &options,
        )
    }
}
