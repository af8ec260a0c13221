use std::path::Path;

use crate::container::{ContainerLayout, UnmergeOptions};
use crate::{api, CodecOptions, Result};

/// Hides `message` in the carrier and writes the result to `output`.
pub fn hide(carrier: &Path, output: &Path, message: &str, opts: &CodecOptions) -> Result<()> {
    api::hide::prepare()
        .with_options(opts.clone())
        .with_carrier(carrier)
        .with_output(output)
        .with_message(message)
        .execute()
}

/// Decodes the message hidden in the carrier, cut to `length` characters if given.
pub fn unveil(secret_media: &Path, length: Option<usize>, opts: &CodecOptions) -> Result<String> {
    api::unveil::prepare()
        .with_options(opts.clone())
        .from_secret_file(secret_media)
        .use_length(length)
        .execute()
}

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the data gathered by the LSB algorithm.
pub fn unveil_raw(secret_media: &Path, destination_file: &Path, opts: &CodecOptions) -> Result<()> {
    api::unveil_raw::prepare()
        .with_options(opts.clone())
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}

pub fn merge(
    image: &Path,
    audio: &Path,
    text: &Path,
    output: &Path,
    layout: ContainerLayout,
) -> Result<()> {
    api::merge::prepare()
        .with_image(image)
        .with_audio(audio)
        .with_text(text)
        .with_output(output)
        .with_layout(layout)
        .execute()
}

pub fn unmerge(
    container: &Path,
    image_output: &Path,
    audio_output: &Path,
    text_output: &Path,
    opts: &UnmergeOptions,
) -> Result<()> {
    api::unmerge::prepare()
        .with_options(opts.clone())
        .from_container(container)
        .into_image(image_output)
        .into_audio(audio_output)
        .into_text(text_output)
        .execute()
}
