//! Dynamic-window heading sampler.
//!
//! Samples a small window of headings around the goal direction, discards
//! the ones that collide, and scores the survivors by goal progress minus a
//! proximity penalty. Straight-ahead is sampled first, so it wins ties.

use crate::core::Point2;
use crate::odd::OddSnapshot;
use crate::scene::SceneObject;

use super::{blocked_at, StrategyParams};

/// Heading offsets from the goal direction, in sample order (radians).
const HEADING_OFFSETS: [f64; 3] = [0.0, -0.5, 0.5];

/// Objects within this clearance of a candidate position penalize it.
const PROXIMITY_RADIUS: f64 = 30.0;

/// Dynamic-window strategy.
#[derive(Clone, Debug)]
pub struct DynamicWindow {
    params: StrategyParams,
}

impl DynamicWindow {
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
        let step = self.params.step_size * odd.speed_factor();
        let base = current.angle_to(&self.params.goal);

        let mut best: Option<(f64, Point2)> = None;
        for offset in HEADING_OFFSETS {
            let disp = Point2::from_angle(base + offset) * step;
            let candidate = current + disp;
            if blocked_at(&self.params, candidate, obstacles, walls) {
                continue;
            }

            let candidate_rect = self.params.vehicle_rect(candidate);
            let mut penalty = 0.0;
            for obj in obstacles.iter().chain(walls.iter()) {
                let clearance = candidate_rect.clearance(&obj.bounds);
                if clearance < PROXIMITY_RADIUS {
                    penalty += PROXIMITY_RADIUS - clearance;
                }
            }

            let score = -candidate.distance(&self.params.goal) - penalty;
            // Strict comparison keeps the earlier sample on ties
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, disp));
            }
        }

        best.map_or(Point2::ZERO, |(_, disp)| disp)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::params;
    use super::*;
    use crate::core::Rect;
    use crate::scene::{ObstacleKind, SceneSnapshot};

    #[test]
    fn test_straight_ahead_when_clear() {
        let mut dwa = DynamicWindow::new(params());
        let current = Point2::new(50.0, 50.0);
        let disp = dwa.compute_next_move(current, &[], &[], &OddSnapshot::clear());

        let goal_dir = current.direction_to(&params().goal);
        assert!((disp.normalize().dot(&goal_dir) - 1.0).abs() < 1e-9);
        assert!((disp.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_blocked_straight_heading_turns() {
        let p = StrategyParams {
            goal: Point2::new(480.0, 100.0),
            ..params()
        };
        let mut scene = SceneSnapshot::empty();
        // Thin strip that clips the straight candidate (and the downward
        // turn) but clears the upward one
        scene.add(ObstacleKind::Obstacle, Rect::new(125.0, 116.0, 20.0, 4.0));

        let mut dwa = DynamicWindow::new(p);
        let disp = dwa.compute_next_move(
            Point2::new(100.0, 100.0),
            scene.objects(),
            &[],
            &OddSnapshot::clear(),
        );

        // Straight is rejected; the -0.5 rad (upward) turn survives
        assert!((disp.length() - 10.0).abs() < 1e-9);
        assert!(disp.y < -1.0);
    }

    #[test]
    fn test_proximity_penalty_prefers_the_open_side() {
        let p = StrategyParams {
            goal: Point2::new(480.0, 100.0),
            ..params()
        };
        let mut scene = SceneSnapshot::empty();
        // A slab hanging just above the corridor: no candidate collides,
        // but candidates closer to it pay a larger proximity penalty
        scene.add(ObstacleKind::Obstacle, Rect::new(100.0, 80.0, 40.0, 15.0));

        let mut dwa = DynamicWindow::new(p);
        let disp = dwa.compute_next_move(
            Point2::new(100.0, 100.0),
            scene.objects(),
            &[],
            &OddSnapshot::clear(),
        );
        // The downward turn (+0.5 rad) buys the most clearance
        assert!(disp.y > 0.0);
    }

    #[test]
    fn test_all_candidates_blocked_yields_zero() {
        let mut scene = SceneSnapshot::empty();
        scene.add(ObstacleKind::Wall, Rect::new(60.0, 70.0, 100.0, 30.0));
        scene.add(ObstacleKind::Wall, Rect::new(60.0, 120.0, 100.0, 30.0));
        scene.add(ObstacleKind::Wall, Rect::new(70.0, 60.0, 30.0, 100.0));
        scene.add(ObstacleKind::Wall, Rect::new(120.0, 60.0, 30.0, 100.0));

        let mut dwa = DynamicWindow::new(params());
        let disp = dwa.compute_next_move(
            Point2::new(100.0, 100.0),
            &[],
            scene.objects(),
            &OddSnapshot::clear(),
        );
        assert_eq!(disp, Point2::ZERO);
    }
}
