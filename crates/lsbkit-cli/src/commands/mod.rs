pub mod hide;
pub mod merge;
pub mod unmerge;
pub mod unveil;
pub mod unveil_raw;

use clap::ValueEnum;
use lsbkit_core::ContainerLayout;

/// Container byte layout
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// Length prefixed sections only, the image is assumed square unless dimensions are given
    Classic,
    /// Persists the image width and height
    #[default]
    Dimensioned,
}

impl From<LayoutArg> for ContainerLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Classic => ContainerLayout::Classic,
            LayoutArg::Dimensioned => ContainerLayout::Dimensioned,
        }
    }
}
