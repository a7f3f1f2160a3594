//! YAML configuration for the map and the control cycle.
//!
//! Every field has a default, so an empty document is a valid configuration
//! matching the reference robot: a 1 m window at 10 mm per cell, a 100 mm
//! robot and a 100 ms period.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::grid::{Footprint, GlobalMap};
use crate::types::{
    DEFAULT_EDGE_SIZE_MM, DEFAULT_PERIOD_MS, DEFAULT_RESOLUTION_MM, DEFAULT_ROBOT_DIAMETER_MM,
    MapError, MapInfo,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlamConfig {
    pub map: MapConfig,
    pub cycle: CycleConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Side of the square window around the robot (mm).
    pub edge_size_mm: f32,
    /// Side of one cell (mm).
    pub resolution_mm: f32,
    pub robot_diameter_mm: f32,
    /// Hand-tuned footprint inset table. Generated from the diameter when absent.
    pub footprint_insets: Option<Vec<u32>>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            edge_size_mm: DEFAULT_EDGE_SIZE_MM,
            resolution_mm: DEFAULT_RESOLUTION_MM,
            robot_diameter_mm: DEFAULT_ROBOT_DIAMETER_MM,
            footprint_insets: None,
        }
    }
}

/// What to do when a cycle runs past its deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrunPolicy {
    /// Drop the late ticks and realign to the next period boundary.
    #[default]
    Resync,
    /// Run the next cycles back-to-back until the schedule is caught up.
    CatchUp,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CycleConfig {
    pub period_ms: u64,
    pub overrun: OverrunPolicy,
    /// Periodic map dumps to the log. Off when absent.
    pub debug: Option<DebugDumpConfig>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            overrun: OverrunPolicy::default(),
            debug: None,
        }
    }
}

impl CycleConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugDumpConfig {
    pub every_n_cycles: u64,
    /// Dump the window re-centered on the robot instead of raw storage order.
    pub centered: bool,
}

impl Default for DebugDumpConfig {
    fn default() -> Self {
        Self {
            every_n_cycles: 10,
            centered: true,
        }
    }
}

impl MapConfig {
    pub fn map_info(&self) -> Result<MapInfo, MapError> {
        MapInfo::from_edge(self.edge_size_mm, self.resolution_mm)
    }

    /// The footprint table, checked to fit inside the window before it is built.
    pub fn footprint(&self) -> Result<Footprint, MapError> {
        let info = self.map_info()?;
        let max_diameter = info.width.min(info.height);
        if let Some(insets) = &self.footprint_insets {
            if insets.len() > max_diameter as usize {
                return Err(oversized_footprint(insets.len() - 1, &info));
            }
            return Footprint::from_insets(insets.clone());
        }
        if !self.robot_diameter_mm.is_finite() || self.robot_diameter_mm < 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "robot diameter must be non-negative, got {}",
                self.robot_diameter_mm
            )));
        }
        let diameter = (self.robot_diameter_mm / self.resolution_mm).floor();
        if diameter >= max_diameter as f32 {
            return Err(oversized_footprint(diameter, &info));
        }
        Ok(Footprint::disc(diameter as u32))
    }

    /// Build a fresh map from this configuration.
    pub fn build(&self) -> Result<GlobalMap, MapError> {
        GlobalMap::new(self.map_info()?, self.footprint()?)
    }
}

impl SlamConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MapError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MapError> {
        // Building the map checks resolution, edge size and footprint fit.
        self.map.build()?;
        if self.cycle.period_ms == 0 {
            return Err(MapError::InvalidConfig(
                "cycle period must be positive".to_string(),
            ));
        }
        if let Some(debug) = &self.cycle.debug
            && debug.every_n_cycles == 0
        {
            return Err(MapError::InvalidConfig(
                "debug dump interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn oversized_footprint(diameter: impl std::fmt::Display, info: &MapInfo) -> MapError {
    MapError::InvalidConfig(format!(
        "footprint diameter {diameter} cells does not fit a {}x{} map",
        info.width, info.height
    ))
}

pub fn load_config(yaml_path: impl AsRef<Path>) -> Result<SlamConfig, MapError> {
    let yaml_str = std::fs::read_to_string(yaml_path.as_ref())?;
    SlamConfig::from_yaml_str(&yaml_str)
}
