//! # autoval-nav
//!
//! Navigation and exploration core for the autoVal vehicle validation
//! simulator: a vehicle crosses a bounded arena toward a fixed goal,
//! avoiding obstacles under configurable environmental (ODD) conditions.
//!
//! The crate owns the hard parts and nothing else: pluggable avoidance
//! strategies, a frontier-tracking occupancy grid, AABB collision
//! detection, and the per-frame driver tying them together. Rendering,
//! map editing, ODD schema parsing and report serialization live with
//! external collaborators that talk to the driver through per-frame
//! snapshots and reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use autoval_nav::{OddSnapshot, SceneSnapshot, SimConfig, SimulationDriver};
//!
//! let scene = SceneSnapshot::empty();
//! let mut driver = SimulationDriver::new(SimConfig::default(), &scene)?;
//! let summary = driver.run(&scene, &OddSnapshot::clear());
//! println!("{} frames, {:?}", summary.frames, summary.status);
//! # Ok::<(), autoval_nav::NavError>(())
//! ```
//!
//! ## Frame Cycle
//!
//! Each [`SimulationDriver::step`] runs one frame:
//!
//! 1. Partition the borrowed scene snapshot into obstacles and walls
//! 2. Ask the active [`Strategy`] for a displacement
//! 3. Add it to the position and clamp into the arena
//! 4. Sweep the sensor radius over the [`OccupancyGrid`] and grow frontiers
//! 5. Detect (and only detect) collisions, appending to the event log
//! 6. Terminate on goal proximity or frame-budget exhaustion
//!
//! The core is single-threaded and makes no timing assumptions; the caller
//! paces the frames.

pub mod collision;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod grid;
pub mod odd;
pub mod scene;
pub mod strategy;

pub use config::SimConfig;
pub use core::{Point2, Rect};
pub use driver::{
    EventKind, FrameReport, MoveEvent, RunEvent, RunStatus, RunSummary, SimulationDriver,
};
pub use error::{NavError, Result};
pub use grid::{CellCounts, CellDelta, CellState, OccupancyGrid};
pub use odd::{OddParam, OddSnapshot, Weather};
pub use scene::{ObjectId, ObstacleKind, SceneObject, SceneSnapshot};
pub use strategy::{Strategy, StrategyParams};
