//! Random-sampling escape planner.
//!
//! Stands in for roadmap/tree planners at this abstraction level: pursue
//! the goal directly, and when the direct step is blocked, commit one full
//! step along a uniformly random heading. No path memory; the escape step
//! is not collision-checked, so progress is attempted every frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Point2;
use crate::odd::OddSnapshot;
use crate::scene::SceneObject;

use super::{blocked_at, StrategyParams};

/// Sampling-escape strategy with a seeded RNG.
#[derive(Clone, Debug)]
pub struct SamplingEscape {
    params: StrategyParams,
    rng: StdRng,
}

impl SamplingEscape {
    pub fn new(params: StrategyParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn compute_next_move(
        &mut self,
        current: Point2,
        obstacles: &[SceneObject],
        walls: &[SceneObject],
        odd: &OddSnapshot,
    ) -> Point2 {
        let step = self.params.step_size * odd.speed_factor();
        let direct = current.direction_to(&self.params.goal) * step;
        if !blocked_at(&self.params, current + direct, obstacles, walls) {
            return direct;
        }

        // Escape: exactly one nominal step, derating ignored
        let angle = self.rng.gen_range(0.0..std::f64::consts::TAU);
        Point2::from_angle(angle) * self.params.step_size
    }
}
