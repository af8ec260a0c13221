use std::path::PathBuf;

use clap::Args;
use lsbkit_core::CodecOptions;

use crate::CliResult;

/// Hides a message in TXT texts, PNG images and WAV audio files
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Media file such as TXT text, PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, same kind as the input
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, single byte characters only
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        lsbkit_core::commands::hide(&self.media, &self.write_to_file, &self.message, &options)
    }
}
