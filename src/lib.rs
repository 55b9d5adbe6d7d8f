//! Reassembles one large image from a directory of `<col>_<row>.<ext>` tiles.

pub mod assemble;
pub mod concat;
pub mod coords;
pub mod error;
pub mod grid;
pub mod report;

pub use assemble::{AssembleConfig, assemble, concatenate, decode_tile, write_image};
pub use coords::{TilePosition, lenient_parse, parse_coordinates};
pub use error::{ConcatStage, Error, Result};
pub use grid::{GridDimensions, TileIndex, locate_tile, scan_grid};
pub use report::{Event, LogSink, ProgressSink};
