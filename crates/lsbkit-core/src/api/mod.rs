//! Builders for the file level operations, every input and output is an explicit path.

pub mod hide;
pub mod merge;
pub mod unmerge;
pub mod unveil;
pub mod unveil_raw;
