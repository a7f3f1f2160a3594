//! Capabilities the cycle plugs in around the map core.
//!
//! Localization feeds the map through [`PoseSource`]; obstacle detection and
//! planning read it through [`MapConsumer`]. Neither is implemented here.

use std::collections::VecDeque;

use glam::Vec2;

use crate::grid::GlobalMap;

/// Produces the robot's motion since the previous cycle, in millimeters.
pub trait PoseSource {
    fn pose_delta(&mut self) -> Vec2;
}

/// A downstream phase that reads the map once per cycle, after it has been
/// translated and the footprint cleared. Consumers run in registration order.
pub trait MapConsumer {
    fn name(&self) -> &str;

    fn on_map(&mut self, map: &GlobalMap);
}

/// Reports the same motion every cycle. Stands in for localization until a
/// real estimator is wired in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantPoseSource {
    pub delta_mm: Vec2,
}

impl ConstantPoseSource {
    pub fn new(delta_mm: Vec2) -> Self {
        Self { delta_mm }
    }
}

impl Default for ConstantPoseSource {
    /// 10 mm per 100 ms cycle diagonally backwards.
    fn default() -> Self {
        Self::new(Vec2::new(-10.0, -10.0))
    }
}

impl PoseSource for ConstantPoseSource {
    fn pose_delta(&mut self) -> Vec2 {
        self.delta_mm
    }
}

/// Replays a fixed sequence of deltas, then reports no motion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPoseSource {
    deltas: VecDeque<Vec2>,
}

impl ScriptedPoseSource {
    pub fn new(deltas: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.deltas.len()
    }
}

impl PoseSource for ScriptedPoseSource {
    fn pose_delta(&mut self) -> Vec2 {
        self.deltas.pop_front().unwrap_or(Vec2::ZERO)
    }
}

impl<P: PoseSource + ?Sized> PoseSource for Box<P> {
    fn pose_delta(&mut self) -> Vec2 {
        (**self).pose_delta()
    }
}
