//! Artificial potential field planner.
//!
//! Attraction pulls toward the goal with a fixed gain; every object within
//! the safe distance pushes away from its center, harder the closer it is.
//! The summed field is re-normalized to one (possibly derated) step.

use crate::core::Point2;
use crate::odd::OddSnapshot;
use crate::scene::SceneObject;

use super::StrategyParams;

/// Gain applied to the goal-attraction term.
const ATTRACT_GAIN: f64 = 0.8;

/// Objects beyond this clearance exert no repulsion.
const SAFE_DISTANCE: f64 = 50.0;

/// Attractive/repulsive field strategy.
#[derive(Clone, Debug)]
pub struct PotentialField {
    params: StrategyParams,
}

impl PotentialField {
    pub fn new(params: StrategyParams) -> Self {
        Self { params }
    }

    pub fn compute_next_move(
        &mut self,
        current: Point2,
        obstacles: &[SceneObject],
        walls: &[SceneObject],
        odd: &OddSnapshot,
    ) -> Point2 {
        let vehicle = self.params.vehicle_rect(current);
        let center = vehicle.center();

        let mut field = current.direction_to(&self.params.goal) * ATTRACT_GAIN;
        for obj in obstacles.iter().chain(walls.iter()) {
            // Clearance between the boxes, not center spacing: repulsion
            // must reach full strength before the boxes can meet.
            let dist = vehicle.clearance(&obj.bounds);
            if dist < SAFE_DISTANCE {
                let away = (center - obj.bounds.center()).normalize();
                field = field + away * (1.0 - dist / SAFE_DISTANCE);
            }
        }

        field.normalize() * (self.params.step_size * odd.speed_factor())
    }
}
