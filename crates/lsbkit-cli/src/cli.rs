use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Reproduce the historic codec quirks: capacity bounds, image tail and 5000 byte audio stride
    #[arg(long, global = true)]
    pub legacy: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Merge(merge::MergeArgs),
    Unmerge(unmerge::UnmergeArgs),
}
