//! Sub-cell motion accumulation.

use glam::{IVec2, Vec2};

/// Carries the part of the robot's motion that is smaller than one cell from
/// one cycle to the next, so slow motion still moves the map eventually.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualTracker {
    resolution: f32,
    residual: Vec2,
}

/// Result of splitting a motion into whole cells and a carried remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualStep {
    pub pixels: IVec2,
    pub residual: Vec2,
}

impl ResidualTracker {
    pub fn new(resolution: f32) -> Self {
        Self {
            resolution,
            residual: Vec2::ZERO,
        }
    }

    /// Motion (mm) not yet large enough to move the map by a whole cell.
    pub fn residual(&self) -> Vec2 {
        self.residual
    }

    pub fn reset(&mut self) {
        self.residual = Vec2::ZERO;
    }

    /// Split `delta_mm` plus the stored residual into whole cells and a new
    /// residual without committing it.
    ///
    /// Cells are truncated toward zero, not floored: -15 mm at 10 mm per cell
    /// is -1 cell with -5 mm carried.
    pub fn preview(&self, delta_mm: Vec2) -> ResidualStep {
        let total = delta_mm + self.residual;
        let (x, rx) = split_cells(total.x, self.resolution);
        let (y, ry) = split_cells(total.y, self.resolution);
        ResidualStep {
            pixels: IVec2::new(x, y),
            residual: Vec2::new(rx, ry),
        }
    }

    pub fn commit(&mut self, step: ResidualStep) {
        self.residual = step.residual;
    }

    /// Preview and commit in one go. Returns the whole-cell delta.
    pub fn accumulate(&mut self, delta_mm: Vec2) -> IVec2 {
        let step = self.preview(delta_mm);
        self.commit(step);
        step.pixels
    }
}

/// `(trunc(mm / resolution), remainder)`.
///
/// The remainder comes from `%`, which is exact and keeps the sign of `mm`, so
/// it is always strictly smaller than one cell. The cell count is derived from
/// it rather than from a separate division so both halves always agree.
#[inline]
fn split_cells(mm: f32, resolution: f32) -> (i32, f32) {
    let remainder = mm % resolution;
    // Saturates for motions beyond the i32 range; those clear the whole map anyway.
    let cells = ((mm - remainder) / resolution).round() as i32;
    (cells, remainder)
}
