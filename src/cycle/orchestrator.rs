//! The per-cycle sequence around the global map.
//!
//! Each cycle runs, in order: localization (the pose source), the global map
//! update (residual, translation, footprint), then every registered consumer
//! (obstacle detection, path planning, motion planning). Nothing overlaps and
//! nothing is skipped; the period is enforced by [`PeriodicSchedule`] between
//! cycles.

use std::time::{Duration, Instant};

use glam::{IVec2, Vec2};
use log::{debug, info, trace};

use super::phase::{MapConsumer, PoseSource};
use super::schedule::PeriodicSchedule;
use crate::config::SlamConfig;
use crate::grid::GlobalMap;
use crate::types::MapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Uninitialized,
    Ready,
}

/// Outcome of one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// 1-based count of cycles since the last `init`.
    pub cycle: u64,
    pub pose_delta: Vec2,
    pub pixel_delta: IVec2,
    pub center: IVec2,
    pub residual: Vec2,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub missed_periods: u64,
}

pub struct SlamCycle<P> {
    config: SlamConfig,
    pose_source: P,
    consumers: Vec<Box<dyn MapConsumer>>,
    map: Option<GlobalMap>,
    cycle: u64,
}

impl<P: PoseSource> SlamCycle<P> {
    /// Create an uninitialized cycle. No map is allocated until [`init`](Self::init).
    pub fn new(config: SlamConfig, pose_source: P) -> Self {
        Self {
            config,
            pose_source,
            consumers: Vec::new(),
            map: None,
            cycle: 0,
        }
    }

    pub fn state(&self) -> CycleState {
        if self.map.is_some() {
            CycleState::Ready
        } else {
            CycleState::Uninitialized
        }
    }

    pub fn config(&self) -> &SlamConfig {
        &self.config
    }

    /// The map, once initialized.
    pub fn map(&self) -> Option<&GlobalMap> {
        self.map.as_ref()
    }

    /// Register a downstream phase. Consumers run in insertion order.
    pub fn add_consumer(&mut self, consumer: Box<dyn MapConsumer>) {
        self.consumers.push(consumer);
    }

    /// Zero the map, put the robot back in the middle and drop the residual.
    ///
    /// Reuses the existing buffer on reinitialization.
    pub fn init(&mut self) -> Result<(), MapError> {
        let map = match self.map.take() {
            Some(mut map) => {
                map.reset();
                map
            }
            None => self.config.map.build()?,
        };
        info!("[GMAP] Size: ({} x {})", map.info().width, map.info().height);
        self.map = Some(map);
        self.cycle = 0;
        Ok(())
    }

    /// Run one full cycle.
    pub fn run_once(&mut self) -> Result<CycleReport, MapError> {
        let started = Instant::now();
        let Some(map) = self.map.as_mut() else {
            return Err(MapError::NotInitialized);
        };

        let pose_delta = self.pose_source.pose_delta();
        let pixel_delta = map.apply_pose_delta(pose_delta)?;
        for consumer in &mut self.consumers {
            trace!("running {}", consumer.name());
            consumer.on_map(map);
        }

        self.cycle += 1;
        let report = CycleReport {
            cycle: self.cycle,
            pose_delta,
            pixel_delta,
            center: map.center(),
            residual: map.residual(),
            elapsed: started.elapsed(),
        };
        debug!(
            "cycle {}: delta {:?} mm -> {:?} cells, center {:?}, residual {:?}",
            report.cycle, report.pose_delta, report.pixel_delta, report.center, report.residual
        );

        #[cfg(feature = "debug-dump")]
        self.dump_if_due();

        Ok(report)
    }

    /// Run cycles on the configured period until `max_cycles` have completed,
    /// or forever when `None`. Stops at the first failing cycle.
    pub fn run(&mut self, max_cycles: Option<u64>) -> Result<RunSummary, MapError> {
        if self.state() == CycleState::Uninitialized {
            return Err(MapError::NotInitialized);
        }
        let mut schedule = PeriodicSchedule::new(
            Instant::now(),
            self.config.cycle.period(),
            self.config.cycle.overrun,
        );
        let mut summary = RunSummary::default();

        while max_cycles.is_none_or(|max| summary.cycles < max) {
            self.run_once()?;
            summary.cycles += 1;
            if max_cycles.is_some_and(|max| summary.cycles >= max) {
                break;
            }
            let tick = schedule.complete(Instant::now());
            summary.missed_periods += tick.missed;
            if !tick.wait.is_zero() {
                std::thread::sleep(tick.wait);
            }
        }
        Ok(summary)
    }

    #[cfg(feature = "debug-dump")]
    fn dump_if_due(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        if let Some((label, dump)) = self.due_dump() {
            debug!("{label}: {}\n{dump}", self.cycle);
        }
    }

    /// The labelled map dump for the current cycle, if one is configured and due.
    #[cfg(feature = "debug-dump")]
    fn due_dump(&self) -> Option<(&'static str, String)> {
        let (Some(debug), Some(map)) = (&self.config.cycle.debug, &self.map) else {
            return None;
        };
        if self.cycle == 0 || self.cycle % debug.every_n_cycles != 0 {
            return None;
        }
        Some(if debug.centered {
            ("MAP-Centered", crate::visualization::dump_centered(map))
        } else {
            ("MAP-Memory", crate::visualization::dump_raw(map))
        })
    }
}
