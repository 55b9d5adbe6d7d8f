//! Grid discovery and tile lookup over a directory listing.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ffi::OsString;
use std::fs;
use std::ops::ControlFlow;
use std::path::Path;

use crate::coords::{TilePosition, parse_coordinates};
use crate::error::{Error, Result};
use crate::report::{Event, ProgressSink};

/// Grid extent inferred from the largest column and row seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub cols: usize,
    pub rows: usize,
}

/// Calls `visit` for every directory entry whose name parses as a tile, in
/// directory iteration order. The directory handle is dropped before
/// returning, on every path.
fn walk_tiles<F>(dir: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(OsString, TilePosition) -> ControlFlow<()>,
{
    let entries = fs::read_dir(dir).map_err(|source| Error::DirectoryOpen {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| Error::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name();
        let Some(position) = parse_coordinates(&file_name.to_string_lossy()) else {
            continue;
        };
        if visit(file_name, position).is_break() {
            break;
        }
    }
    Ok(())
}

/// Walks `dir` once and returns the largest column and row among tile names.
///
/// Does not check that the grid is dense; holes show up at lookup time.
pub fn scan_grid(dir: &Path, sink: &mut impl ProgressSink) -> Result<GridDimensions> {
    let mut max: Option<GridDimensions> = None;
    walk_tiles(dir, |_, position| {
        let dims = max.get_or_insert(GridDimensions { cols: 0, rows: 0 });
        dims.cols = dims.cols.max(position.col);
        dims.rows = dims.rows.max(position.row);
        ControlFlow::Continue(())
    })?;

    let dims = max.ok_or_else(|| Error::NoTilesFound {
        path: dir.to_path_buf(),
    })?;
    sink.report(Event::GridScanned {
        dir: dir.to_path_buf(),
        dims,
    });
    Ok(dims)
}

/// Rescans `dir` and returns the first file name whose coordinates match.
pub fn locate_tile(dir: &Path, col: usize, row: usize) -> Result<OsString> {
    let mut found = None;
    walk_tiles(dir, |file_name, position| {
        if position.col == col && position.row == row {
            found = Some(file_name);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;
    found.ok_or(Error::TileNotFound { col, row })
}

/// Coordinate to file name table built from a single directory pass.
///
/// Keeps the first file seen for each cell, which is what [`locate_tile`]
/// returns for the same listing.
#[derive(Debug, Clone, Default)]
pub struct TileIndex {
    tiles: HashMap<TilePosition, OsString>,
}

impl TileIndex {
    pub fn build(dir: &Path, sink: &mut impl ProgressSink) -> Result<Self> {
        let mut tiles: HashMap<TilePosition, OsString> = HashMap::new();
        walk_tiles(dir, |file_name, position| {
            match tiles.entry(position) {
                Entry::Vacant(slot) => {
                    slot.insert(file_name);
                }
                Entry::Occupied(slot) => sink.report(Event::DuplicateTile {
                    position,
                    kept: slot.get().clone(),
                    ignored: file_name,
                }),
            }
            ControlFlow::Continue(())
        })?;
        Ok(Self { tiles })
    }

    pub fn get(&self, col: usize, row: usize) -> Result<&OsString> {
        TilePosition::new(col, row)
            .and_then(|position| self.tiles.get(&position))
            .ok_or(Error::TileNotFound { col, row })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
