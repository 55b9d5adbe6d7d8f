#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh, empty directory under the cargo scratch area.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("failed to clear scratch dir");
    }
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

/// Distinct opaque colour per cell, so placement can be checked pixel by pixel.
pub fn tile_color(col: usize, row: usize) -> Rgba<u8> {
    Rgba([(col * 40) as u8, (row * 40) as u8, 7, 255])
}

pub fn write_tile(dir: &Path, col: usize, row: usize, width: u32, height: u32) -> PathBuf {
    let path = dir.join(format!("{col}_{row}.png"));
    RgbaImage::from_pixel(width, height, tile_color(col, row))
        .save(&path)
        .expect("failed to write tile");
    path
}

pub fn write_grid(dir: &Path, cols: usize, rows: usize, width: u32, height: u32) {
    for row in 1..=rows {
        for col in 1..=cols {
            write_tile(dir, col, row, width, height);
        }
    }
}
