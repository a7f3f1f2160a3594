//! Cell value encoding for the global map.
//!
//! The bands overlap on purpose: a visited cell (`CELL_VISITED`) is also
//! walkable, and low sensor occupancies still fall in the walkable band.

/// Unexplored. Must stay the zero value: resets are a raw default fill.
pub const CELL_NEUTRAL: i8 = 0;
/// Cell the robot body has already covered.
pub const CELL_VISITED: i8 = -10;

/// Inclusive walkable band. The magnitude is a path-planning regularization cost.
pub const CELL_WALKABLE_MIN: i8 = -20;
pub const CELL_WALKABLE_MAX: i8 = 20;

/// Highest occupancy probability a ranging sensor or the collision switch writes.
pub const CELL_OCCUPANCY_MAX: i8 = 100;

/// Inclusive hard-edge band. Cells in here must never be entered.
pub const CELL_EDGE_MIN: i8 = 101;
pub const CELL_EDGE_MAX: i8 = 120;

pub const DEFAULT_EDGE_SIZE_MM: f32 = 1000.0;
pub const DEFAULT_RESOLUTION_MM: f32 = 10.0;
pub const DEFAULT_ROBOT_DIAMETER_MM: f32 = 100.0;
pub const DEFAULT_PERIOD_MS: u64 = 100;
