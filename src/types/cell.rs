//! Classification of raw cell values.

use super::constants::{
    CELL_EDGE_MAX, CELL_EDGE_MIN, CELL_NEUTRAL, CELL_OCCUPANCY_MAX, CELL_WALKABLE_MAX,
    CELL_WALKABLE_MIN,
};

/// Coarse meaning of a cell value.
///
/// Values belong to several bands at once; `classify` resolves the overlap with
/// the priority `Unexplored > Edge > Walkable > Occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Unexplored,
    Walkable,
    Occupied,
    Edge,
    /// Outside every band (below the walkable minimum or above the edge maximum).
    Invalid,
}

impl CellClass {
    pub fn classify(value: i8) -> Self {
        if value == CELL_NEUTRAL {
            Self::Unexplored
        } else if in_range_inclusive(value, CELL_EDGE_MIN, CELL_EDGE_MAX) {
            Self::Edge
        } else if is_walkable(value) {
            Self::Walkable
        } else if in_range_inclusive(value, CELL_WALKABLE_MAX, CELL_OCCUPANCY_MAX) {
            Self::Occupied
        } else {
            Self::Invalid
        }
    }
}

#[inline]
fn in_range_inclusive(value: i8, min: i8, max: i8) -> bool {
    (min..=max).contains(&value)
}

/// True when `value` lies in the inclusive walkable band.
#[inline]
pub fn is_walkable(value: i8) -> bool {
    in_range_inclusive(value, CELL_WALKABLE_MIN, CELL_WALKABLE_MAX)
}

/// True when `value` is a sensor occupancy at or above `threshold`, or a hard edge.
#[inline]
pub fn is_collision(value: i8, threshold: i8) -> bool {
    value >= threshold.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CELL_VISITED;

    #[test]
    fn classify_resolves_overlapping_bands() {
        assert_eq!(CellClass::classify(CELL_NEUTRAL), CellClass::Unexplored);
        assert_eq!(CellClass::classify(CELL_VISITED), CellClass::Walkable);
        assert_eq!(CellClass::classify(15), CellClass::Walkable);
        assert_eq!(CellClass::classify(20), CellClass::Walkable);
        assert_eq!(CellClass::classify(21), CellClass::Occupied);
        assert_eq!(CellClass::classify(100), CellClass::Occupied);
        assert_eq!(CellClass::classify(101), CellClass::Edge);
        assert_eq!(CellClass::classify(120), CellClass::Edge);
        assert_eq!(CellClass::classify(121), CellClass::Invalid);
        assert_eq!(CellClass::classify(-21), CellClass::Invalid);
    }

    #[test]
    fn walkable_band_is_inclusive() {
        assert!(is_walkable(-20));
        assert!(is_walkable(20));
        assert!(!is_walkable(-21));
        assert!(!is_walkable(21));
    }

    #[test]
    fn collision_threshold_ignores_free_values() {
        assert!(is_collision(60, 50));
        assert!(!is_collision(49, 50));
        assert!(is_collision(110, 50));
        // A non-positive threshold must not turn free space into obstacles.
        assert!(!is_collision(CELL_NEUTRAL, 0));
        assert!(!is_collision(CELL_VISITED, -20));
    }
}
