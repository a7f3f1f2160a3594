//! Robot footprint as a disc approximated on the grid.
//!
//! The footprint is scanned as a `(D + 1) x (D + 1)` square anchored at
//! `center - R`. Row `j` skips `insets[j]` cells on both sides, which trims the
//! square's corners into a roughly circular, axis-symmetric shape.

use glam::IVec2;

use super::global::GlobalMap;
use super::torus::fold_index;
use crate::types::{CELL_VISITED, MapError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    diameter: u32,
    insets: Vec<u32>,
}

impl Footprint {
    /// Generate the inset table for a disc `diameter` cells across.
    ///
    /// A cell is kept when its center lies within half a cell of the disc edge.
    pub fn disc(diameter: u32) -> Self {
        let c = diameter as f32 * 0.5;
        let limit = (c + 0.5) * (c + 0.5);
        let insets = (0..=diameter)
            .map(|j| {
                let dy = j as f32 - c;
                (0..=diameter / 2)
                    .find(|&i| {
                        let dx = i as f32 - c;
                        dx * dx + dy * dy <= limit
                    })
                    .unwrap_or(diameter / 2)
            })
            .collect();
        Self { diameter, insets }
    }

    /// Use a hand-tuned inset table, one entry per scan row.
    pub fn from_insets(insets: Vec<u32>) -> Result<Self, MapError> {
        let Some(diameter) = insets.len().checked_sub(1) else {
            return Err(MapError::InvalidConfig(
                "footprint inset table must not be empty".to_string(),
            ));
        };
        let diameter = diameter as u32;
        let radius = diameter / 2;
        if let Some(&inset) = insets.iter().find(|&&inset| inset > radius) {
            return Err(MapError::InvalidConfig(format!(
                "footprint inset {inset} exceeds radius {radius}"
            )));
        }
        if !insets.iter().eq(insets.iter().rev()) {
            return Err(MapError::InvalidConfig(
                "footprint inset table must be symmetric".to_string(),
            ));
        }
        Ok(Self { diameter, insets })
    }

    /// Diameter in cells.
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Offset from the robot's cell to the first scanned row and column.
    pub fn radius(&self) -> u32 {
        self.diameter / 2
    }

    pub fn insets(&self) -> &[u32] {
        &self.insets
    }

    /// Cells covered by the footprint, relative to the scan square's corner
    /// (`center - radius`), as `(column, row)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let diameter = self.diameter;
        self.insets
            .iter()
            .enumerate()
            .flat_map(move |(j, &inset)| (inset..=diameter - inset).map(move |i| (i, j as u32)))
    }

    pub fn cell_count(&self) -> usize {
        self.insets
            .iter()
            .map(|&inset| (self.diameter - 2 * inset + 1) as usize)
            .sum()
    }
}

impl GlobalMap {
    /// Mark every cell under the robot's footprint at the current center as
    /// visited. Idempotent.
    pub fn clear_footprint(&mut self) {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        let radius = self.footprint.radius() as i32;
        let corner = self.center - IVec2::splat(radius);

        // The footprint is narrower than the map, so one fold per axis suffices.
        for (i, j) in self.footprint.cells() {
            let x = fold_index(corner.x + i as i32, width);
            let y = fold_index(corner.y + j as i32, height);
            self.grid.set_folded(x, y, CELL_VISITED);
        }
    }
}
