pub mod audio;
pub mod codec_options;
pub mod image;
pub mod text;
mod primitives;
mod types;

use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, error};
use tempfile::NamedTempFile;

pub use codec_options::{
    AudioCodecOptions, AudioDecodeStride, CapacityCheck, CodecOptions, ImageCodecOptions,
    ImageTail, TextCodecOptions, LEGACY_AUDIO_DECODE_STRIDE,
};
pub use primitives::*;
pub use types::*;
pub(crate) use types::ensure_capacity;

use crate::{LsbError, Result};

pub trait Persist {
    fn save_as(&self, _: &Path) -> Result<()>;
}

/// A completely written temporary file next to its target, removed again when dropped
pub(crate) struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// Renames the temporary file onto the target.
    pub(crate) fn commit(self) -> Result<()> {
        let Self { temp, target } = self;
        temp.persist(&target).map_err(|e| {
            error!("Error moving temporary file to {target:?}: {}", e.error);
            LsbError::WriteError { source: e.error }
        })?;
        debug!("Wrote {target:?}");

        Ok(())
    }
}

/// Runs `write` against a temporary file in the directory of `target`, so a failing write
/// never leaves a half written target behind.
pub(crate) fn stage<F>(target: &Path, write: F) -> Result<StagedFile>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let folder = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(folder).map_err(|e| {
        error!("Error creating temporary file in {folder:?}: {e}");
        LsbError::WriteError { source: e }
    })?;

    write(temp.as_file_mut())?;

    Ok(StagedFile {
        temp,
        target: target.to_path_buf(),
    })
}

/// Reads a whole file, failures are logged and mapped to a read error.
pub(crate) fn read_bytes(source: &Path) -> Result<Vec<u8>> {
    std::fs::read(source).map_err(|source_err| {
        error!("Error reading {source:?}: {source_err}");
        LsbError::ReadError { source: source_err }
    })
}

pub(crate) fn stage_bytes(target: &Path, bytes: &[u8]) -> Result<StagedFile> {
    use std::io::Write;

    stage(target, |f| {
        f.write_all(bytes)
            .map_err(|source| LsbError::WriteError { source })
    })
}

/// Atomically writes plain bytes to `target`.
pub(crate) fn persist_bytes(target: &Path, bytes: &[u8]) -> Result<()> {
    stage_bytes(target, bytes)?.commit()
}
