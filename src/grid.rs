//! Occupancy grid with frontier tracking.
//!
//! The grid records what the vehicle has seen: cells start `Unexplored`,
//! the static scene scan seeds terminal `ObstacleDetected`/`WallDetected`
//! cells, and each frame's sensor sweep promotes cells to `Clear` and grows
//! the `Frontier` boundary outward by one cell.
//!
//! Out-of-range accesses are deliberate no-ops so neighbor math near the
//! edges needs no guards in callers. State changes are queued as
//! [`CellDelta`]s for the renderer to drain, so a redraw never has to walk
//! the full grid.

use serde::{Deserialize, Serialize};

use crate::core::{Point2, Rect};
use crate::error::{NavError, Result};
use crate::scene::{ObstacleKind, SceneObject};

/// Exploration state of one grid cell.
///
/// `ObstacleDetected` and `WallDetected` are terminal: once seeded from the
/// static scan they are never overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Unexplored,
    Clear,
    ObstacleDetected,
    WallDetected,
    Frontier,
}

impl CellState {
    /// Terminal states never change again.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, CellState::ObstacleDetected | CellState::WallDetected)
    }
}

/// One cell state change, for incremental redraw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellDelta {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

/// Per-state cell counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub unexplored: usize,
    pub clear: usize,
    pub obstacle: usize,
    pub wall: usize,
    pub frontier: usize,
}

impl CellCounts {
    /// Cells the vehicle has observed (clear or frontier).
    pub fn explored(&self) -> usize {
        self.clear + self.frontier
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unexplored + self.clear + self.obstacle + self.wall + self.frontier
    }
}

/// Cell-state map over the arena.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
    cell_step: f64,
    deltas: Vec<CellDelta>,
}

impl OccupancyGrid {
    /// Allocate a fresh grid and seed it from the static scene scan.
    ///
    /// Every cell whose extent overlaps a static object's bounds becomes
    /// `ObstacleDetected` or `WallDetected`; ties between overlapping
    /// objects go to the first in scene order.
    pub fn new(arena_size: f64, cell_step: f64, statics: &[SceneObject]) -> Result<Self> {
        if cell_step <= 0.0 || arena_size <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "grid needs positive arena_size and cell_step, got {} / {}",
                arena_size, cell_step
            )));
        }
        let cells_per_axis = arena_size / cell_step;
        if (cells_per_axis - cells_per_axis.round()).abs() > 1e-9 || cells_per_axis.round() < 1.0 {
            return Err(NavError::InvalidConfig(format!(
                "arena_size {} is not divisible by cell_step {}",
                arena_size, cell_step
            )));
        }
        let side = cells_per_axis.round() as usize;

        let mut grid = Self {
            cells: vec![CellState::Unexplored; side * side],
            rows: side,
            cols: side,
            cell_step,
            deltas: Vec::new(),
        };
        grid.seed_statics(statics);
        Ok(grid)
    }

    fn seed_statics(&mut self, statics: &[SceneObject]) {
        for obj in statics {
            let state = match obj.kind {
                ObstacleKind::Wall => CellState::WallDetected,
                _ => CellState::ObstacleDetected,
            };
            // Conservative cell range around the object, then an exact
            // strict-overlap test per cell.
            let b = &obj.bounds;
            let r0 = ((b.y / self.cell_step).floor() as i64 - 1).max(0) as usize;
            let c0 = ((b.x / self.cell_step).floor() as i64 - 1).max(0) as usize;
            let r1 = (((b.y + b.height) / self.cell_step).ceil() as usize).min(self.rows);
            let c1 = (((b.x + b.width) / self.cell_step).ceil() as usize).min(self.cols);
            for row in r0..r1 {
                for col in c0..c1 {
                    if self.cell_extent(row, col).intersects(b) {
                        self.transition(row as i64, col as i64, state);
                    }
                }
            }
        }
    }

    /// Rows in the grid.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns in the grid.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell side length in arena units.
    #[inline]
    pub fn cell_step(&self) -> f64 {
        self.cell_step
    }

    /// State of a cell, or `None` out of range.
    #[inline]
    pub fn state(&self, row: usize, col: usize) -> Option<CellState> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// World-space extent of a cell.
    #[inline]
    fn cell_extent(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            col as f64 * self.cell_step,
            row as f64 * self.cell_step,
            self.cell_step,
            self.cell_step,
        )
    }

    /// World-space center of a cell.
    #[inline]
    fn cell_center(&self, row: usize, col: usize) -> Point2 {
        Point2::new(
            col as f64 * self.cell_step + self.cell_step / 2.0,
            row as f64 * self.cell_step + self.cell_step / 2.0,
        )
    }

    /// Apply a state change if it is legal.
    ///
    /// Out-of-range coordinates and terminal-state overwrites are no-ops;
    /// unchanged states produce no delta.
    fn transition(&mut self, row: i64, col: i64, next: CellState) {
        if row < 0 || col < 0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return;
        }
        let idx = row * self.cols + col;
        let current = self.cells[idx];
        if current == next || current.is_terminal() {
            return;
        }
        self.cells[idx] = next;
        self.deltas.push(CellDelta {
            row,
            col,
            state: next,
        });
    }

    /// Sensor sweep: mark every cell whose center lies within `radius` of
    /// `center` as `Clear`, promoting only `Unexplored` and `Frontier`
    /// cells. Detected obstacles and walls are untouched.
    pub fn mark_area_clear(&mut self, center: Point2, radius: f64) {
        let r2 = radius * radius;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let state = self.cells[row * self.cols + col];
                if !matches!(state, CellState::Unexplored | CellState::Frontier) {
                    continue;
                }
                if self.cell_center(row, col).distance_squared(&center) <= r2 {
                    self.transition(row as i64, col as i64, CellState::Clear);
                }
            }
        }
    }

    /// Promote `Unexplored` neighbors of `Clear` cells to `Frontier`.
    ///
    /// One non-iterative pass: no promotion made during the pass can enable
    /// another (a `Frontier` cell is not `Clear`), so frontiers grow one
    /// cell per call along the explored boundary, and calling this twice
    /// without new `Clear` cells in between changes nothing.
    pub fn update_frontier(&mut self) {
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                if self.cells[row as usize * self.cols + col as usize] != CellState::Clear {
                    continue;
                }
                for dr in -1..=1i64 {
                    for dc in -1..=1i64 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let (nr, nc) = (row + dr, col + dc);
                        if self.state_signed(nr, nc) == Some(CellState::Unexplored) {
                            self.transition(nr, nc, CellState::Frontier);
                        }
                    }
                }
            }
        }
    }

    #[inline]
    fn state_signed(&self, row: i64, col: i64) -> Option<CellState> {
        if row < 0 || col < 0 {
            None
        } else {
            self.state(row as usize, col as usize)
        }
    }

    /// Drain the state changes accumulated since the last call.
    pub fn take_deltas(&mut self) -> Vec<CellDelta> {
        std::mem::take(&mut self.deltas)
    }

    /// Count cells by state.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for state in &self.cells {
            match state {
                CellState::Unexplored => counts.unexplored += 1,
                CellState::Clear => counts.clear += 1,
                CellState::ObstacleDetected => counts.obstacle += 1,
                CellState::WallDetected => counts.wall += 1,
                CellState::Frontier => counts.frontier += 1,
            }
        }
        counts
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        (0..self.cells.len()).map(move |i| (i / self.cols, i % self.cols, self.cells[i]))
    }

    /// Render the grid as ASCII, row 0 at the top.
    ///
    /// `.` unexplored, space clear, `+` frontier, `o` obstacle, `#` wall.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(match self.cells[row * self.cols + col] {
                    CellState::Unexplored => '.',
                    CellState::Clear => ' ',
                    CellState::ObstacleDetected => 'o',
                    CellState::WallDetected => '#',
                    CellState::Frontier => '+',
                });
            }
            out.push('\n');
        }
        out
    }
}
