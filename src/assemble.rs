//! Stitches a directory of `<col>_<row>.<ext>` tiles into one image.
//!
//! Row 1 is the bottom of the picture, so rows are emitted from the highest
//! index down. Columns run left to right.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::concat::{hconcat, vconcat};
use crate::coords::TilePosition;
use crate::error::{ConcatStage, Error, Result};
use crate::grid::{GridDimensions, TileIndex, scan_grid};
use crate::report::{Event, ProgressSink};

const DEFAULT_QUALITY: u8 = 100;

/// Output settings.
#[derive(Debug, Clone)]
pub struct AssembleConfig {
    /// Encoder quality, 1..=100. Only lossy formats (JPEG) use it.
    pub quality: u8,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Decodes one tile, sniffing the format from the file contents.
pub fn decode_tile(path: &Path) -> Result<RgbaImage> {
    let decode_error = |source: ImageError| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    };
    let image = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?
        .into_rgba8();

    if image.width() == 0 || image.height() == 0 {
        return Err(Error::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    Ok(image)
}

/// Encodes `image` to `path`, picking the format from the extension.
///
/// JPEG is written without alpha at `quality`. HDR, OpenEXR and farbfeld get
/// the float or 16-bit layout their encoders require. If encoding fails,
/// whatever was written to `path` is removed again.
pub fn write_image(image: RgbaImage, path: &Path, quality: u8) -> std::result::Result<(), ImageError> {
    let format = ImageFormat::from_path(path)?;

    let image = DynamicImage::ImageRgba8(image);
    let result = match format {
        ImageFormat::Jpeg => File::create(path).map_err(ImageError::IoError).and_then(|file| {
            let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality.clamp(1, 100));
            image.to_rgb8().write_with_encoder(encoder)
        }),
        // float and 16-bit only encoders
        ImageFormat::Hdr => DynamicImage::ImageRgb32F(image.to_rgb32f()).save_with_format(path, format),
        ImageFormat::OpenExr => DynamicImage::ImageRgba32F(image.to_rgba32f()).save_with_format(path, format),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(image.to_rgba16()).save_with_format(path, format),
        _ => image.save_with_format(path, format),
    };

    if result.is_err() && path.exists() {
        let _ = fs::remove_file(path);
    }
    result
}

fn assemble_row(
    dir: &Path,
    index: &TileIndex,
    row: usize,
    cols: usize,
    sink: &mut impl ProgressSink,
) -> Result<RgbaImage> {
    let mut tiles = Vec::with_capacity(cols.min(index.len()));
    for col in 1..=cols {
        let file_name = index.get(col, row)?;
        let position = TilePosition { col, row };
        sink.report(Event::TileLocated {
            position,
            file_name: file_name.clone(),
        });

        let path = dir.join(file_name);
        let tile = decode_tile(&path)?;
        sink.report(Event::TileDecoded {
            position,
            path,
            width: tile.width(),
            height: tile.height(),
        });
        tiles.push(tile);
    }

    sink.report(Event::RowStarted { row });
    let image = hconcat(&tiles).map_err(|source| Error::Concatenation {
        stage: ConcatStage::Row(row),
        source,
    })?;
    sink.report(Event::RowFinished {
        row,
        width: image.width(),
        height: image.height(),
    });
    Ok(image)
}

/// Builds the full image for `dims` and writes it to `dir/output_file`.
///
/// Aborts on the first missing tile, undecodable file, size mismatch or write
/// failure. Nothing is written unless every tile made it in.
pub fn assemble(
    dir: &Path,
    output_file: &Path,
    dims: GridDimensions,
    config: &AssembleConfig,
    sink: &mut impl ProgressSink,
) -> Result<PathBuf> {
    let index = TileIndex::build(dir, sink)?;

    let mut rows = Vec::with_capacity(dims.rows.min(index.len()));
    for row in (1..=dims.rows).rev() {
        rows.push(assemble_row(dir, &index, row, dims.cols, sink)?);
    }

    sink.report(Event::RowsStacking { count: rows.len() });
    let image = vconcat(&rows).map_err(|source| Error::Concatenation {
        stage: ConcatStage::Rows,
        source,
    })?;
    drop(rows);
    sink.report(Event::RowsStacked {
        width: image.width(),
        height: image.height(),
    });

    let path = dir.join(output_file);
    sink.report(Event::WriteStarted { path: path.clone() });
    write_image(image, &path, config.quality).map_err(|source| Error::ImageWrite {
        path: path.clone(),
        source,
    })?;
    sink.report(Event::WriteFinished { path: path.clone() });
    Ok(path)
}

/// Scans `dir` for the grid size, then assembles it. Returns the grid size
/// that was used.
pub fn concatenate(
    dir: &Path,
    output_file: &Path,
    config: &AssembleConfig,
    sink: &mut impl ProgressSink,
) -> Result<GridDimensions> {
    let dims = scan_grid(dir, sink)?;
    assemble(dir, output_file, dims, config, sink)?;
    Ok(dims)
}
