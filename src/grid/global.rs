//! Robot-centered global map.
//!
//! ```text
//!      +------+------ W = E + 1 ------+
//!      |      | 0   ...  E/2  ...   E |
//!      +------+-----------------------+
//!      | 0    |                       |
//!      | .    |                       |
//!      | E/2  |        robot          |   H = E + 1
//!      | .    |                       |
//!      | E    |                       |
//!      +------+-----------------------+
//! ```
//!
//! Right after initialization the robot sits in the middle of the buffer. As
//! it moves, only the center index changes; the cells stay where they are and
//! the rows/columns that leave the window are reset to unexplored, ready to be
//! reused for the opposite edge.

use glam::{IVec2, Vec2};

use super::footprint::Footprint;
use super::residual::ResidualTracker;
use super::torus::TorusGrid;
use crate::types::{MapError, MapInfo};

#[derive(Debug, Clone)]
pub struct GlobalMap {
    pub(super) grid: TorusGrid<i8>,
    pub(super) center: IVec2,
    pub(super) residual: ResidualTracker,
    pub(super) footprint: Footprint,
}

impl GlobalMap {
    /// Allocate a zero-filled map with the robot in the middle.
    ///
    /// Fails if the footprint does not fit strictly inside the buffer.
    pub fn new(info: MapInfo, footprint: Footprint) -> Result<Self, MapError> {
        if info.is_empty() {
            return Err(MapError::InvalidConfig("map must not be empty".to_string()));
        }
        if footprint.diameter() >= info.width || footprint.diameter() >= info.height {
            return Err(MapError::InvalidConfig(format!(
                "footprint diameter {} cells does not fit a {}x{} map",
                footprint.diameter(),
                info.width,
                info.height
            )));
        }
        let center = info.default_center();
        let residual = ResidualTracker::new(info.resolution);
        Ok(Self {
            grid: TorusGrid::new(info),
            center,
            residual,
            footprint,
        })
    }

    /// Zero-fill the buffer and recenter without reallocating.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.center = self.info().default_center();
        self.residual.reset();
    }

    pub fn info(&self) -> &MapInfo {
        self.grid.info()
    }

    pub fn grid(&self) -> &TorusGrid<i8> {
        &self.grid
    }

    /// Storage index of the robot's cell, always inside `[0, W) x [0, H)`.
    pub fn center(&self) -> IVec2 {
        self.center
    }

    /// Motion (mm) carried over because it is smaller than one cell.
    pub fn residual(&self) -> Vec2 {
        self.residual.residual()
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Storage index of the window's top-left corner. May be negative; fold it
    /// before use.
    pub fn window_origin(&self) -> IVec2 {
        self.center - self.info().default_center()
    }

    /// Read a cell relative to the robot's cell.
    ///
    /// `rel` must lie within one buffer width/height of the robot; further
    /// offsets return `None`.
    pub fn get_relative(&self, rel: IVec2) -> Option<i8> {
        self.grid.get(&(self.center + rel))
    }

    pub fn set_relative(&mut self, rel: IVec2, value: i8) -> Result<(), MapError> {
        self.grid.set(&(self.center + rel), value)
    }

    /// Cell offset of a point given in millimeters relative to the robot.
    pub fn world_to_relative(&self, offset_mm: Vec2) -> IVec2 {
        ((offset_mm + self.residual()) / self.info().resolution)
            .round()
            .as_ivec2()
    }

    /// Robot-relative position (mm) of the center of a cell at offset `rel`.
    pub fn relative_to_world(&self, rel: IVec2) -> Vec2 {
        rel.as_vec2() * self.info().resolution - self.residual()
    }

    /// Fold a pose delta (mm) into the map for this cycle: accumulate it with
    /// the residual, translate by the whole cells, then mark the robot's
    /// footprint as visited. Returns the applied cell delta.
    ///
    /// A non-finite delta is rejected before anything changes.
    pub fn apply_pose_delta(&mut self, delta_mm: Vec2) -> Result<IVec2, MapError> {
        if !delta_mm.is_finite() {
            return Err(MapError::NonFiniteDelta {
                x: delta_mm.x,
                y: delta_mm.y,
            });
        }
        let pixels = self.residual.accumulate(delta_mm);
        self.translate(pixels);
        self.clear_footprint();
        Ok(pixels)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::types::{CELL_NEUTRAL, CELL_VISITED};

    fn map() -> GlobalMap {
        let info = MapInfo::from_edge(1000.0, 10.0).unwrap();
        GlobalMap::new(info, Footprint::disc(10)).unwrap()
    }

    #[test]
    fn starts_zeroed_and_centered() {
        let map = map();
        assert_eq!(map.center(), IVec2::new(50, 50));
        assert_eq!(map.residual(), Vec2::ZERO);
        assert_eq!(map.window_origin(), IVec2::ZERO);
        assert!(map.grid().data().iter().all(|&v| v == CELL_NEUTRAL));
    }

    #[test]
    fn rejects_footprint_wider_than_map() {
        let info = MapInfo::square(11, 10.0);
        assert!(GlobalMap::new(info.clone(), Footprint::disc(11)).is_err());
        assert!(GlobalMap::new(info, Footprint::disc(10)).is_ok());
    }

    #[test]
    fn relative_access_wraps_around_the_buffer() {
        let mut map = map();
        map.set_relative(IVec2::new(-60, 0), 42).unwrap();
        // 50 - 60 = -10 folds to column 91.
        assert_eq!(map.grid().get(&IVec2::new(91, 50)), Some(42));
        assert_eq!(map.get_relative(IVec2::new(41, 0)), Some(42));
        assert_eq!(map.get_relative(IVec2::new(200, 0)), None);
    }

    #[test]
    fn world_and_relative_offsets_account_for_residual() {
        let mut map = map();
        assert_eq!(map.world_to_relative(Vec2::new(24.0, -26.0)), IVec2::new(2, -3));

        map.apply_pose_delta(Vec2::new(4.0, 0.0)).unwrap();
        assert_eq!(map.world_to_relative(Vec2::new(2.0, 0.0)), IVec2::new(1, 0));
        let back = map.relative_to_world(IVec2::new(1, 0));
        assert_abs_diff_eq!(back.x, 6.0);
        assert_abs_diff_eq!(back.y, 0.0);
    }

    #[test]
    fn pose_update_marks_footprint_at_new_center() {
        let mut map = map();
        let pixels = map.apply_pose_delta(Vec2::new(-30.0, 20.0)).unwrap();
        assert_eq!(pixels, IVec2::new(-3, 2));
        assert_eq!(map.center(), IVec2::new(47, 52));
        assert_eq!(map.get_relative(IVec2::ZERO), Some(CELL_VISITED));
        assert_eq!(map.grid().get(&IVec2::new(47, 52)), Some(CELL_VISITED));
    }

    #[test]
    fn non_finite_delta_leaves_map_untouched() {
        let mut map = map();
        map.apply_pose_delta(Vec2::new(5.0, 0.0)).unwrap();
        let before = map.grid().data().to_vec();

        let err = map.apply_pose_delta(Vec2::new(f32::NAN, 1.0)).unwrap_err();
        assert!(matches!(err, MapError::NonFiniteDelta { .. }));
        assert!(map.apply_pose_delta(Vec2::new(0.0, f32::INFINITY)).is_err());

        assert_eq!(map.grid().data(), &before[..]);
        assert_eq!(map.center(), IVec2::new(50, 50));
        assert_abs_diff_eq!(map.residual().x, 5.0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut map = map();
        map.apply_pose_delta(Vec2::new(123.0, -77.0)).unwrap();
        map.reset();
        assert_eq!(map.center(), IVec2::new(50, 50));
        assert_eq!(map.residual(), Vec2::ZERO);
        assert!(map.grid().data().iter().all(|&v| v == CELL_NEUTRAL));
    }
}
