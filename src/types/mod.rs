pub mod cell;
pub mod constants;
pub mod error;
pub mod info;

pub use cell::{CellClass, is_collision, is_walkable};
pub use constants::*;
pub use error::MapError;
pub use info::MapInfo;
