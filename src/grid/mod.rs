pub mod footprint;
pub mod global;
pub mod residual;
pub mod torus;
mod translate;

pub use footprint::Footprint;
pub use global::GlobalMap;
pub use residual::{ResidualStep, ResidualTracker};
pub use torus::{TorusGrid, fold_index, wrap_index};
