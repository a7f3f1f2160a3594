//! Moving the map window by whole cells.
//!
//! On a torus the columns the window slides away from are exactly the columns
//! it slides onto: for `dx > 0` the window's old leading columns
//! `[x00, x00 + dx)` become its new trailing columns, and for `dx < 0` the
//! storage columns `[x00 + dx, x00)` are reused at the front. Clearing those
//! columns before moving the center is therefore enough to keep stale data
//! out of the newly entered region, for any buffer width.

use glam::IVec2;
use log::trace;

use super::global::GlobalMap;
use super::torus::wrap_index;
use crate::types::CELL_NEUTRAL;

impl GlobalMap {
    /// Shift the window by `delta` cells and invalidate the swept region.
    ///
    /// Writes `min(|dx|, W) * H + min(|dy|, H) * W` cells. A jump of a whole
    /// width or more on an axis leaves nothing to keep, so that axis is cleared
    /// entirely and the center still advances modulo the buffer size.
    pub fn translate(&mut self, delta: IVec2) {
        let width = self.grid.width() as i64;
        let height = self.grid.height() as i64;
        let origin = self.window_origin();

        if delta.x != 0 {
            let (start, count) = swept_range(origin.x, delta.x, width);
            trace!("clearing {count} columns from {start}");
            for i in start..start + count {
                self.grid.fill_column(wrap_index(i, width) as u32, CELL_NEUTRAL);
            }
        }

        if delta.y != 0 {
            let (start, count) = swept_range(origin.y, delta.y, height);
            trace!("clearing {count} rows from {start}");
            for j in start..start + count {
                self.grid.fill_row(wrap_index(j, height) as u32, CELL_NEUTRAL);
            }
        }

        self.center = IVec2::new(
            wrap_index(self.center.x as i64 + delta.x as i64, width),
            wrap_index(self.center.y as i64 + delta.y as i64, height),
        );
    }
}

/// First unwrapped index and length of the range swept by moving the window
/// edge `edge` by `delta` on an axis of `len` cells.
fn swept_range(edge: i32, delta: i32, len: i64) -> (i64, i64) {
    let edge = edge as i64;
    let delta = delta as i64;
    let count = delta.abs().min(len);
    let start = if delta > 0 { edge } else { edge + delta };
    (start, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Footprint;
    use crate::types::MapInfo;

    fn map(width: u32) -> GlobalMap {
        GlobalMap::new(MapInfo::square(width, 10.0), Footprint::disc(0)).unwrap()
    }

    fn fill_all(map: &mut GlobalMap, value: i8) {
        map.grid.fill(value);
    }

    fn cleared_columns(map: &GlobalMap) -> Vec<i32> {
        let width = map.info().width as i32;
        (0..width)
            .filter(|&x| map.grid.get(&IVec2::new(x, 0)) == Some(CELL_NEUTRAL))
            .collect()
    }

    #[test]
    fn swept_range_for_both_directions() {
        assert_eq!(swept_range(0, 3, 101), (0, 3));
        assert_eq!(swept_range(0, -3, 101), (-3, 3));
        assert_eq!(swept_range(-20, 500, 101), (-20, 101));
        assert_eq!(swept_range(7, -500, 101), (-493, 101));
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut map = map(11);
        fill_all(&mut map, 7);
        map.translate(IVec2::ZERO);
        assert_eq!(map.center(), IVec2::new(5, 5));
        assert!(map.grid.data().iter().all(|&v| v == 7));
    }

    #[test]
    fn positive_move_clears_old_leading_columns() {
        let mut map = map(11);
        fill_all(&mut map, 7);
        map.translate(IVec2::new(2, 0));
        assert_eq!(map.center(), IVec2::new(7, 5));
        assert_eq!(cleared_columns(&map), vec![0, 1]);
        // Rows are untouched by a horizontal move.
        assert_eq!(map.grid.get(&IVec2::new(5, 3)), Some(7));
    }

    #[test]
    fn negative_move_wraps_the_sweep() {
        let mut map = map(11);
        fill_all(&mut map, 7);
        map.translate(IVec2::new(-3, 0));
        assert_eq!(map.center(), IVec2::new(2, 5));
        assert_eq!(cleared_columns(&map), vec![8, 9, 10]);
    }

    #[test]
    fn vertical_move_clears_rows() {
        let mut map = map(11);
        fill_all(&mut map, 7);
        map.translate(IVec2::new(0, -1));
        assert_eq!(map.center(), IVec2::new(5, 4));
        for x in 0..11 {
            assert_eq!(map.grid.get(&IVec2::new(x, 10)), Some(CELL_NEUTRAL));
            assert_eq!(map.grid.get(&IVec2::new(x, 9)), Some(7));
        }
    }

    #[test]
    fn cells_leaving_the_window_come_back_unexplored() {
        let mut map = map(101);
        map.set_relative(IVec2::new(50, 0), 99).unwrap();
        map.set_relative(IVec2::new(-10, 0), 88).unwrap();
        map.translate(IVec2::new(-1, 0));

        // The right edge left the window; its slot is now the left edge.
        assert_eq!(map.get_relative(IVec2::new(-50, 0)), Some(CELL_NEUTRAL));
        // Cells still inside the window keep their value at the shifted offset.
        assert_eq!(map.get_relative(IVec2::new(-9, 0)), Some(88));
    }

    #[test]
    fn consecutive_moves_across_the_boundary_keep_the_window_consistent() {
        let mut map = map(9);
        // Walk the window several times around the torus in both axes.
        for step in [IVec2::new(3, -2), IVec2::new(4, 4), IVec2::new(-7, 1), IVec2::new(5, -8)] {
            fill_all(&mut map, 7);
            let before = map.center();
            map.translate(step);

            let expected = IVec2::new(
                (before.x + step.x).rem_euclid(9),
                (before.y + step.y).rem_euclid(9),
            );
            assert_eq!(map.center(), expected);

            // Relative cells in the newly entered strip read as unexplored,
            // everything else in the window kept its value.
            for ry in -4..=4 {
                for rx in -4..=4 {
                    let entered_x = if step.x > 0 { rx > 4 - step.x } else { rx < -4 - step.x };
                    let entered_y = if step.y > 0 { ry > 4 - step.y } else { ry < -4 - step.y };
                    let expected = if entered_x || entered_y { CELL_NEUTRAL } else { 7 };
                    assert_eq!(
                        map.get_relative(IVec2::new(rx, ry)),
                        Some(expected),
                        "step {step:?} rel ({rx}, {ry})"
                    );
                }
            }
        }
    }

    #[test]
    fn oversize_move_clears_everything() {
        let mut map = map(11);
        fill_all(&mut map, 7);
        map.translate(IVec2::new(25, -11));
        assert_eq!(map.center(), IVec2::new((5 + 25) % 11, (5 - 11i32).rem_euclid(11)));
        assert!(map.grid.data().iter().all(|&v| v == CELL_NEUTRAL));

        fill_all(&mut map, 7);
        map.translate(IVec2::new(i32::MAX, i32::MIN));
        assert!(map.grid.data().iter().all(|&v| v == CELL_NEUTRAL));
        let center = map.center();
        assert!((0..11).contains(&center.x) && (0..11).contains(&center.y));
    }
}
