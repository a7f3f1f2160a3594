//! Map metadata.

use glam::IVec2;

use super::MapError;

#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub width: u32,
    pub height: u32,
    /// Edge length of one cell in millimeters.
    pub resolution: f32,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: 101,
            height: 101,
            resolution: 10.0,
        }
    }
}

impl MapInfo {
    pub fn square(width: u32, resolution: f32) -> Self {
        Self {
            width,
            height: width,
            resolution,
        }
    }

    /// Square map covering `edge_mm` on each side: `floor(edge / resolution) + 1`
    /// cells, so the robot's cell sits exactly in the middle.
    pub fn from_edge(edge_mm: f32, resolution: f32) -> Result<Self, MapError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "resolution must be positive, got {resolution}"
            )));
        }
        if !edge_mm.is_finite() || edge_mm < resolution {
            return Err(MapError::InvalidConfig(format!(
                "edge size {edge_mm} mm must be at least one cell ({resolution} mm)"
            )));
        }
        let edge_cells = (edge_mm / resolution).floor();
        if edge_cells >= i32::MAX as f32 {
            return Err(MapError::InvalidConfig(format!(
                "edge size {edge_mm} mm is too large for resolution {resolution} mm"
            )));
        }
        Ok(Self::square(edge_cells as u32 + 1, resolution))
    }

    /// Number of cells in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage index the robot maps to right after initialization.
    #[inline]
    pub fn default_center(&self) -> IVec2 {
        IVec2::new(
            (self.width.saturating_sub(1) / 2) as i32,
            (self.height.saturating_sub(1) / 2) as i32,
        )
    }
}
