use std::path::PathBuf;

use clap::Args;
use lsbkit_core::CodecOptions;

use crate::CliResult;

/// Unveils a message and prints it
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source media that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Number of message characters, everything after is noise
    #[arg(short, long, value_name = "chars")]
    pub length: Option<usize>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = lsbkit_core::commands::unveil(&self.media, self.length, &options)?;
        println!("{message}");

        Ok(())
    }
}
