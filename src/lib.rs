//! Robot-centered occupancy grid for fixed-period control loops.
//!
//! The map is a fixed toroidal buffer: moving the robot only moves a center
//! index and resets the rows/columns that leave the window, so each cycle costs
//! a few strips of writes instead of a full copy.

pub mod config;
pub mod cycle;
pub mod grid;
pub mod types;
#[cfg(feature = "debug-dump")]
pub mod visualization;

pub use config::{SlamConfig, load_config};
pub use cycle::{MapConsumer, PoseSource, SlamCycle};
pub use grid::{Footprint, GlobalMap, TorusGrid};
pub use types::{MapError, MapInfo};
