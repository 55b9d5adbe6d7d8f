use std::fmt;
use std::io;
use std::path::PathBuf;

use image::ImageError;

use crate::concat::ConcatError;

/// Which concatenation pass failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatStage {
    /// Joining the tiles of one grid row side by side.
    Row(usize),
    /// Stacking the finished rows on top of each other.
    Rows,
}

impl fmt::Display for ConcatStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcatStage::Row(row) => write!(f, "row {row}"),
            ConcatStage::Rows => f.write_str("rows"),
        }
    }
}

/// Every failure is fatal to the run; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't open tile directory {}: {source}", path.display())]
    DirectoryOpen { path: PathBuf, source: io::Error },

    #[error("failed while walking tile directory {}: {source}", path.display())]
    DirectoryRead { path: PathBuf, source: io::Error },

    #[error("no file named like <col>_<row>.<ext> in {}", path.display())]
    NoTilesFound { path: PathBuf },

    #[error("no tile for column {col}, row {row}")]
    TileNotFound { col: usize, row: usize },

    #[error("couldn't decode image {}: {source}", path.display())]
    ImageDecode { path: PathBuf, source: ImageError },

    #[error("image {} has no pixels", path.display())]
    EmptyImage { path: PathBuf },

    #[error("concatenation of {stage} failed: {source}")]
    Concatenation { stage: ConcatStage, source: ConcatError },

    #[error("couldn't write image {}: {source}", path.display())]
    ImageWrite { path: PathBuf, source: ImageError },
}

pub type Result<T> = std::result::Result<T, Error>;
