//! Simulation configuration.
//!
//! All scalar knobs the driver needs, loadable from TOML. Defaults match
//! the canonical validation arena (500-unit square, 20-unit vehicle,
//! 10-unit step, goal in the far corner).

use serde::Deserialize;
use std::path::Path;

use crate::core::Point2;
use crate::error::{NavError, Result};

/// Driver configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    /// Arena side length (the arena is square)
    #[serde(default = "default_arena_size")]
    pub arena_size: f64,

    /// Vehicle side length (the vehicle is a square AABB)
    #[serde(default = "default_vehicle_size")]
    pub vehicle_size: f64,

    /// Nominal displacement magnitude per frame
    #[serde(default = "default_step_size")]
    pub step_size: f64,

    /// Occupancy grid cell side length; must divide `arena_size`
    #[serde(default = "default_cell_step")]
    pub cell_step: f64,

    /// Sensor sweep radius used to mark grid cells explored
    #[serde(default = "default_sensor_radius")]
    pub sensor_radius: f64,

    /// Maximum number of frames per run
    #[serde(default = "default_frame_budget")]
    pub frame_budget: usize,

    /// Vehicle start position (top-left corner of its AABB)
    #[serde(default)]
    pub start: Point2,

    /// Goal position; the run ends when the vehicle is within one step of it
    #[serde(default = "default_goal")]
    pub goal: Point2,

    /// Planning strategy key; unknown keys fall back to the default patrol
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// RNG seed for sampling strategies and scene scatter
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_arena_size() -> f64 {
    500.0
}
fn default_vehicle_size() -> f64 {
    20.0
}
fn default_step_size() -> f64 {
    10.0
}
fn default_cell_step() -> f64 {
    10.0
}
fn default_sensor_radius() -> f64 {
    50.0
}
fn default_frame_budget() -> usize {
    200
}
fn default_goal() -> Point2 {
    Point2::new(default_arena_size() - default_vehicle_size(), default_arena_size() - default_vehicle_size())
}
fn default_strategy() -> String {
    "default".to_string()
}
fn default_seed() -> u64 {
    42
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_size: default_arena_size(),
            vehicle_size: default_vehicle_size(),
            step_size: default_step_size(),
            cell_step: default_cell_step(),
            sensor_radius: default_sensor_radius(),
            frame_budget: default_frame_budget(),
            start: Point2::ZERO,
            goal: default_goal(),
            strategy: default_strategy(),
            seed: default_seed(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Largest valid coordinate for the vehicle's top-left corner.
    #[inline]
    pub fn max_coord(&self) -> f64 {
        self.arena_size - self.vehicle_size
    }

    /// Validate the configuration.
    ///
    /// This is the only failure point of the whole core: a driver built
    /// from a config that passes here never errors mid-run.
    pub fn validate(&self) -> Result<()> {
        if self.arena_size <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "arena_size must be positive, got {}",
                self.arena_size
            )));
        }
        if self.vehicle_size <= 0.0 || self.vehicle_size > self.arena_size {
            return Err(NavError::InvalidConfig(format!(
                "vehicle_size must be in (0, arena_size], got {}",
                self.vehicle_size
            )));
        }
        if self.step_size <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "step_size must be positive, got {}",
                self.step_size
            )));
        }
        if self.cell_step <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "cell_step must be positive, got {}",
                self.cell_step
            )));
        }
        let cells = self.arena_size / self.cell_step;
        if (cells - cells.round()).abs() > 1e-9 || cells.round() < 1.0 {
            return Err(NavError::InvalidConfig(format!(
                "arena_size {} is not divisible by cell_step {}",
                self.arena_size, self.cell_step
            )));
        }
        if self.sensor_radius <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "sensor_radius must be positive, got {}",
                self.sensor_radius
            )));
        }
        if self.frame_budget == 0 {
            return Err(NavError::InvalidConfig(
                "frame_budget must be at least 1".to_string(),
            ));
        }
        for (name, p) in [("start", &self.start), ("goal", &self.goal)] {
            if p.x < 0.0 || p.x > self.max_coord() || p.y < 0.0 || p.y > self.max_coord() {
                return Err(NavError::InvalidConfig(format!(
                    "{} ({}, {}) outside [0, {}]",
                    name,
                    p.x,
                    p.y,
                    self.max_coord()
                )));
            }
        }
        Ok(())
    }
}
