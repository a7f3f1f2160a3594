//! Fixed-size 2D buffer with toroidal addressing.
//!
//! Moving the robot never shifts the stored cells. Instead the caller keeps a
//! center index into this buffer and addresses cells relative to it; indices
//! that fall off one edge come back in on the opposite edge.

use glam::IVec2;

use crate::types::{MapError, MapInfo};

/// Fold `i` into `[0, n)` with a single wraparound correction.
///
/// This is not a modulo. The caller must guarantee `-n <= i < 2n`, which holds
/// whenever the index is a valid index offset by at most one buffer width.
#[inline]
pub fn fold_index(i: i32, n: i32) -> i32 {
    debug_assert!(n > 0);
    debug_assert!((-n..2 * n).contains(&i), "index {i} is outside [-{n}, 2*{n})");
    if i < 0 {
        i + n
    } else if i >= n {
        i - n
    } else {
        i
    }
}

/// True modulo into `[0, n)`. Works for any `i`.
#[inline]
pub fn wrap_index(i: i64, n: i64) -> i32 {
    debug_assert!(n > 0);
    i.rem_euclid(n) as i32
}

#[derive(Debug, Clone)]
pub struct TorusGrid<T> {
    info: MapInfo,
    data: Vec<T>,
}

impl<T: Copy + Default> TorusGrid<T> {
    /// Allocate a buffer filled with `T::default()`.
    pub fn new(info: MapInfo) -> Self {
        Self::new_with_value(info, T::default())
    }

    pub fn new_with_value(info: MapInfo, value: T) -> Self {
        let data = vec![value; info.len()];
        Self { info, data }
    }

    /// Reset every cell to `T::default()`.
    pub fn clear(&mut self) {
        self.fill(T::default());
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Overwrite storage column `x` (already in range) across all rows.
    pub(crate) fn fill_column(&mut self, x: u32, value: T) {
        debug_assert!(x < self.info.width);
        let width = self.info.width as usize;
        for cell in self.data.iter_mut().skip(x as usize).step_by(width) {
            *cell = value;
        }
    }

    /// Overwrite storage row `y` (already in range).
    pub(crate) fn fill_row(&mut self, y: u32, value: T) {
        debug_assert!(y < self.info.height);
        let width = self.info.width as usize;
        let start = (y as usize) * width;
        self.data[start..start + width].fill(value);
    }
}

impl<T: Copy> TorusGrid<T> {
    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Read the cell at an unfolded storage coordinate.
    ///
    /// Each axis is folded once (see [`fold_index`]); `None` means the
    /// coordinate was more than one buffer width out of range.
    pub fn get(&self, pos: &IVec2) -> Option<T> {
        let idx = self.folded_index(pos)?;
        Some(self.data[idx])
    }

    /// Write the cell at an unfolded storage coordinate.
    pub fn set(&mut self, pos: &IVec2, value: T) -> Result<(), MapError> {
        let Some(idx) = self.folded_index(pos) else {
            return Err(MapError::OutOfBounds(format!(
                "cell ({}, {}) is more than one width outside map {}x{}",
                pos.x, pos.y, self.info.width, self.info.height
            )));
        };
        self.data[idx] = value;
        Ok(())
    }

    /// Write a cell whose coordinates are already folded into `[0, width)` x
    /// `[0, height)`. Panics otherwise.
    pub(crate) fn set_folded(&mut self, x: i32, y: i32, value: T) {
        assert!(
            (0..self.info.width as i32).contains(&x) && (0..self.info.height as i32).contains(&y),
            "cell ({x}, {y}) is not a storage index of a {}x{} map",
            self.info.width,
            self.info.height
        );
        let idx = self.index(x as usize, y as usize);
        self.data[idx] = value;
    }

    /// Raw storage in row-major order, `y * width + x`.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn folded_index(&self, pos: &IVec2) -> Option<usize> {
        let width = self.info.width as i32;
        let height = self.info.height as i32;
        if !(-width..2 * width).contains(&pos.x) || !(-height..2 * height).contains(&pos.y) {
            return None;
        }
        let x = fold_index(pos.x, width);
        let y = fold_index(pos.y, height);
        Some(self.index(x as usize, y as usize))
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * (self.info.width as usize) + x
    }
}
