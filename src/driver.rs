//! Simulation driver.
//!
//! One `SimulationDriver` owns everything that changes during a run: the
//! vehicle position, the occupancy grid, the event log, the active strategy
//! and the frame counter. Each [`step`](SimulationDriver::step) runs one
//! full frame cycle; the caller decides pacing, so tests run delay-free and
//! a UI can animate at whatever rate it likes.
//!
//! A collision never halts or rewinds a frame — it is recorded and the run
//! continues. The run ends when the vehicle is within one step of the goal
//! or the frame budget is spent.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::collision::first_hit;
use crate::config::SimConfig;
use crate::core::Point2;
use crate::error::Result;
use crate::grid::{CellDelta, OccupancyGrid};
use crate::odd::OddSnapshot;
use crate::scene::{ObjectId, ObstacleKind, SceneObject, SceneSnapshot};
use crate::strategy::{Strategy, StrategyParams};

/// What a collision event detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ObstacleDetected,
    WallDetected,
}

impl EventKind {
    fn for_object(kind: ObstacleKind) -> EventKind {
        match kind.collision_kind() {
            ObstacleKind::Wall => EventKind::WallDetected,
            _ => EventKind::ObstacleDetected,
        }
    }
}

/// One detected collision.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveEvent {
    /// Frame index the collision was detected on
    pub frame: usize,
    /// Collision class
    pub kind: EventKind,
    /// Vehicle position at detection time
    pub position: Point2,
    /// Object the vehicle overlapped
    pub object_id: ObjectId,
    /// The object's own label (a second vehicle reports as `vehicle`
    /// even though it collides as an obstacle)
    pub object_kind: ObstacleKind,
}

/// Entry in the run's event log.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunEvent {
    /// The vehicle overlapped a scene object.
    Collision(MoveEvent),
    /// The configured strategy key was unknown and the default patrol was
    /// substituted. A warning, not a failure.
    StrategyFallback { requested: String },
}

/// Run progress after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    GoalReached { frame: usize },
    BudgetExhausted { frames: usize },
}

impl RunStatus {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

/// Everything a renderer needs after one frame.
#[derive(Clone, Debug)]
pub struct FrameReport {
    /// Frame index of this step
    pub frame: usize,
    /// Committed (clamped) vehicle position
    pub position: Point2,
    /// Collision detected this frame, if any
    pub collision: Option<MoveEvent>,
    /// Grid cells that changed this frame
    pub deltas: Vec<CellDelta>,
    /// Run progress after this frame
    pub status: RunStatus,
}

/// End-of-run summary for the export collaborator.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    /// Strategy that actually ran (after any fallback)
    pub strategy: &'static str,
    /// Frames executed
    pub frames: usize,
    /// How the run ended
    pub status: RunStatus,
    /// Final vehicle position
    pub final_position: Point2,
    /// Cells observed clear or frontier
    pub explored_cells: usize,
    /// Full event log
    pub events: Vec<RunEvent>,
}

/// Per-frame simulation driver.
pub struct SimulationDriver {
    config: SimConfig,
    strategy: Strategy,
    grid: OccupancyGrid,
    position: Point2,
    frame: usize,
    status: RunStatus,
    events: Vec<RunEvent>,
}

impl SimulationDriver {
    /// Build a driver for a validated config and the scene's static set.
    ///
    /// This is the only fallible point of a run: a bad config fails here,
    /// never mid-frame.
    pub fn new(config: SimConfig, scene: &SceneSnapshot) -> Result<Self> {
        config.validate()?;
        let grid = OccupancyGrid::new(config.arena_size, config.cell_step, scene.objects())?;

        let params = StrategyParams {
            arena_size: config.arena_size,
            vehicle_size: config.vehicle_size,
            step_size: config.step_size,
            goal: config.goal,
        };
        let (strategy, fallback) = Strategy::resolve(&config.strategy, params, config.seed);

        let mut events = Vec::new();
        if fallback {
            warn!(
                requested = %config.strategy,
                "unknown strategy key, substituting default patrol"
            );
            events.push(RunEvent::StrategyFallback {
                requested: config.strategy.clone(),
            });
        }

        Ok(Self {
            position: config.start,
            strategy,
            grid,
            frame: 0,
            status: RunStatus::Running,
            events,
            config,
        })
    }

    /// Current vehicle position.
    #[inline]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Frames executed so far.
    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Run progress.
    #[inline]
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Event log so far.
    #[inline]
    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    /// The occupancy grid.
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Key of the strategy actually running.
    #[inline]
    pub fn strategy_key(&self) -> &'static str {
        self.strategy.key()
    }

    /// Rebuild for a changed static scene: fresh grid, fresh strategy
    /// state, cleared log, vehicle back at the start position.
    pub fn reset_with_scene(&mut self, scene: &SceneSnapshot) -> Result<()> {
        *self = Self::new(self.config.clone(), scene)?;
        Ok(())
    }

    /// Execute one frame.
    ///
    /// After the run has terminated this is a no-op that re-reports the
    /// final state; no further frames execute.
    pub fn step(&mut self, scene: &SceneSnapshot, odd: &OddSnapshot) -> FrameReport {
        if self.status.is_terminal() {
            return FrameReport {
                frame: self.frame,
                position: self.position,
                collision: None,
                deltas: Vec::new(),
                status: self.status,
            };
        }

        let frame = self.frame;

        // Copy-on-read: the frame works on its own partition of the scene
        // even if the collaborator mutates its live set mid-run.
        let mut obstacles: Vec<SceneObject> = Vec::new();
        let mut walls: Vec<SceneObject> = Vec::new();
        for obj in scene.objects() {
            if obj.kind.is_wall() {
                walls.push(*obj);
            } else {
                obstacles.push(*obj);
            }
        }

        let displacement =
            self.strategy
                .compute_next_move(self.position, &obstacles, &walls, odd);

        // Commit, clamped into the arena
        let max = self.config.max_coord();
        let next = self.position + displacement;
        self.position = Point2::new(next.x.clamp(0.0, max), next.y.clamp(0.0, max));

        // Sensor sweep around the vehicle center, then grow the frontier
        let half = self.config.vehicle_size / 2.0;
        self.grid.mark_area_clear(
            Point2::new(self.position.x + half, self.position.y + half),
            self.config.sensor_radius,
        );
        self.grid.update_frontier();

        // Detection-only collision check: log and keep going
        let vehicle_rect = crate::core::Rect::new(
            self.position.x,
            self.position.y,
            self.config.vehicle_size,
            self.config.vehicle_size,
        );
        let collision = first_hit(&vehicle_rect, scene.objects(), None).map(|obj| {
            let event = MoveEvent {
                frame,
                kind: EventKind::for_object(obj.kind),
                position: self.position,
                object_id: obj.id,
                object_kind: obj.kind,
            };
            debug!(
                frame,
                object = %obj.id,
                kind = obj.kind.label(),
                x = self.position.x,
                y = self.position.y,
                "collision detected"
            );
            event
        });
        if let Some(event) = &collision {
            self.events.push(RunEvent::Collision(event.clone()));
        }

        self.frame += 1;
        self.status = if self.position.distance(&self.config.goal) < self.config.step_size {
            info!(frame, "goal reached");
            RunStatus::GoalReached { frame }
        } else if self.frame >= self.config.frame_budget {
            RunStatus::BudgetExhausted { frames: self.frame }
        } else {
            RunStatus::Running
        };

        FrameReport {
            frame,
            position: self.position,
            collision,
            deltas: self.grid.take_deltas(),
            status: self.status,
        }
    }

    /// Step against a fixed scene and ODD until the run terminates.
    ///
    /// Convenience for static worlds; callers with dynamic scenes drive
    /// [`step`](Self::step) themselves with a fresh snapshot per frame.
    pub fn run(&mut self, scene: &SceneSnapshot, odd: &OddSnapshot) -> RunSummary {
        while !self.status.is_terminal() {
            self.step(scene, odd);
        }
        self.summary()
    }

    /// Snapshot of the run's outcome so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            strategy: self.strategy.key(),
            frames: self.frame,
            status: self.status,
            final_position: self.position,
            explored_cells: self.grid.counts().explored(),
            events: self.events.clone(),
        }
    }
}
