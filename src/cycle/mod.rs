//! Fixed-period control cycle around the global map.

pub mod orchestrator;
pub mod phase;
pub mod schedule;

pub use orchestrator::{CycleReport, CycleState, RunSummary, SlamCycle};
pub use phase::{ConstantPoseSource, MapConsumer, PoseSource, ScriptedPoseSource};
pub use schedule::{PeriodicSchedule, Tick};
