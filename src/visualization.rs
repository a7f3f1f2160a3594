//! Debug views of the global map.
//!
//! The raw view prints storage in memory order. The centered view rotates the
//! torus so the first row/column is the window's top-left world corner and the
//! robot ends up in the middle.

use std::fmt::Write;

use glam::IVec2;
use image::{GrayImage, Luma};

use crate::grid::{GlobalMap, fold_index};
use crate::types::{CELL_NEUTRAL, CellClass};

/// Storage row by row, comma-separated, row 0 first.
pub fn dump_raw(map: &GlobalMap) -> String {
    dump_with(map, IVec2::new)
}

/// Window row by row starting at its top-left world corner.
pub fn dump_centered(map: &GlobalMap) -> String {
    let origin = map.window_origin();
    let width = map.info().width as i32;
    let height = map.info().height as i32;
    dump_with(map, |x, y| {
        IVec2::new(
            fold_index(origin.x + x, width),
            fold_index(origin.y + y, height),
        )
    })
}

fn dump_with(map: &GlobalMap, storage: impl Fn(i32, i32) -> IVec2) -> String {
    let width = map.info().width as i32;
    let height = map.info().height as i32;
    let mut out = String::with_capacity(map.info().len() * 4);
    for y in 0..height {
        for x in 0..width {
            let value = map.grid().get(&storage(x, y)).unwrap_or(CELL_NEUTRAL);
            if x > 0 {
                out.push(',');
            }
            let _ = write!(out, "{value}");
        }
        out.push('\n');
    }
    out
}

/// Grayscale preview of the map, either in storage order or re-centered.
pub fn map_to_image(map: &GlobalMap, centered: bool) -> GrayImage {
    let width = map.info().width;
    let height = map.info().height;
    let origin = if centered {
        map.window_origin()
    } else {
        IVec2::ZERO
    };
    let mut img = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pos = IVec2::new(
                fold_index(origin.x + x as i32, width as i32),
                fold_index(origin.y + y as i32, height as i32),
            );
            let value = map.grid().get(&pos).unwrap_or(CELL_NEUTRAL);
            img.put_pixel(x, y, Luma([cell_to_gray(value)]));
        }
    }

    img
}

fn cell_to_gray(value: i8) -> u8 {
    // - unexplored: mid-gray
    // - walkable: lighter the more negative (visited is near white)
    // - occupied: darker with probability
    // - edge: black
    match CellClass::classify(value) {
        CellClass::Unexplored => 205,
        CellClass::Walkable => (230 - value as i16).clamp(0, 255) as u8,
        CellClass::Occupied => {
            let v = value as i16;
            (180 - (v * 170) / 100) as u8
        }
        CellClass::Edge => 0,
        CellClass::Invalid => 128,
    }
}
