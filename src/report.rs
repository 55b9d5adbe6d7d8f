//! Progress reporting.
//!
//! Library code never prints. Operations that have something to say take a
//! [`ProgressSink`] and hand it [`Event`]s; the binary plugs in [`LogSink`],
//! tests collect into a `Vec<Event>`.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::coords::TilePosition;
use crate::grid::GridDimensions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    GridScanned {
        dir: PathBuf,
        dims: GridDimensions,
    },
    /// A second file claims an already seen cell. Which one wins depends on
    /// directory iteration order.
    DuplicateTile {
        position: TilePosition,
        kept: OsString,
        ignored: OsString,
    },
    TileLocated {
        position: TilePosition,
        file_name: OsString,
    },
    TileDecoded {
        position: TilePosition,
        path: PathBuf,
        width: u32,
        height: u32,
    },
    RowStarted {
        row: usize,
    },
    RowFinished {
        row: usize,
        width: u32,
        height: u32,
    },
    RowsStacking {
        count: usize,
    },
    RowsStacked {
        width: u32,
        height: u32,
    },
    WriteStarted {
        path: PathBuf,
    },
    WriteFinished {
        path: PathBuf,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::GridScanned { dir, dims } => write!(
                f,
                "{}: {} columns x {} rows",
                dir.display(),
                dims.cols,
                dims.rows
            ),
            Event::DuplicateTile { position, kept, ignored } => write!(
                f,
                "tile {position} appears more than once, keeping {} and ignoring {}",
                kept.to_string_lossy(),
                ignored.to_string_lossy()
            ),
            Event::TileLocated { position, file_name } => {
                write!(f, "{position} image is {}, reading it", file_name.to_string_lossy())
            }
            Event::TileDecoded { position, path, width, height } => {
                write!(f, "{position} image {} read ({width}x{height})", path.display())
            }
            Event::RowStarted { row } => write!(f, "concatenating row {row}"),
            Event::RowFinished { row, width, height } => {
                write!(f, "row {row} done ({width}x{height})")
            }
            Event::RowsStacking { count } => write!(f, "stacking {count} rows"),
            Event::RowsStacked { width, height } => {
                write!(f, "rows stacked ({width}x{height})")
            }
            Event::WriteStarted { path } => write!(f, "writing {}", path.display()),
            Event::WriteFinished { path } => write!(f, "written {}", path.display()),
        }
    }
}

pub trait ProgressSink {
    fn report(&mut self, event: Event);
}

impl ProgressSink for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event);
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn report(&mut self, event: Event) {
        (**self).report(event);
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn report(&mut self, event: Event) {
        match event {
            Event::DuplicateTile { .. } => warn!("{event}"),
            Event::TileDecoded { .. } => debug!("{event}"),
            _ => info!("{event}"),
        }
    }
}
