mod cli;
mod commands;

use clap::Parser;
use log::debug;
use lsbkit_core::CodecOptions;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = lsbkit_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");
    let options = if args.legacy {
        CodecOptions::legacy()
    } else {
        CodecOptions::default()
    };

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(options),
        Commands::Merge(merge) => merge.run(),
        Commands::Unmerge(unmerge) => unmerge.run(),
    }
}
