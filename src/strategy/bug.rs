//! Bug-style wall following.
//!
//! Head straight for the goal until a step would collide, then turn 90
//! degrees and creep along the blocker's boundary. Every frame re-tests the
//! direct step and abandons following as soon as the way is clear.

use crate::core::Point2;
use crate::odd::OddSnapshot;
use crate::scene::{ObjectId, SceneObject};

use super::{blocked_at, hit_at, StrategyParams};

/// Wall-following bug strategy.
#[derive(Clone, Debug)]
pub struct BugFollow {
    params: StrategyParams,
    following: bool,
    last_blocker: Option<ObjectId>,
}

impl BugFollow {
    pub fn new(params: StrategyParams) -> Self {
        Self {
            params,
            following: false,
            last_blocker: None,
        }
    }

    /// Whether the strategy is currently tracking an obstacle boundary.
    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn compute_next_move(
        &mut self,
        current: Point2,
        obstacles: &[SceneObject],
        walls: &[SceneObject],
        odd: &OddSnapshot,
    ) -> Point2 {
        let step = self.params.step_size * odd.speed_factor();
        let dir = current.direction_to(&self.params.goal);
        let direct = dir * step;

        match hit_at(&self.params, current + direct, obstacles, walls) {
            None => {
                self.following = false;
                self.last_blocker = None;
                direct
            }
            Some(blocker) => {
                self.following = true;
                if self.last_blocker != Some(blocker.id) {
                    self.last_blocker = Some(blocker.id);
                }

                // 90-degree turn along the boundary; fall back to the other
                // side if that is blocked too.
                let left = dir.perpendicular() * step;
                if !blocked_at(&self.params, current + left, obstacles, walls) {
                    return left;
                }
                let right = -dir.perpendicular() * step;
                if !blocked_at(&self.params, current + right, obstacles, walls) {
                    return right;
                }
                Point2::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::params;
    use super::*;
    use crate::core::Rect;
    use crate::scene::{ObstacleKind, SceneSnapshot};

    #[test]
    fn test_direct_pursuit_when_clear() {
        let mut bug = BugFollow::new(params());
        let disp = bug.compute_next_move(Point2::ZERO, &[], &[], &OddSnapshot::clear());
        assert!(!bug.is_following());
        assert!((disp.length() - 10.0).abs() < 1e-9);
        assert!(disp.x > 0.0 && disp.y > 0.0);
    }

    #[test]
    fn test_blocked_step_turns_perpendicular() {
        // Goal due east so the direct heading is +X
        let p = StrategyParams {
            goal: Point2::new(480.0, 100.0),
            ..params()
        };
        let mut scene = SceneSnapshot::empty();
        scene.add(ObstacleKind::Obstacle, Rect::new(125.0, 90.0, 20.0, 40.0));

        let mut bug = BugFollow::new(p);
        let pos = Point2::new(100.0, 100.0);
        let disp = bug.compute_next_move(pos, scene.objects(), &[], &OddSnapshot::clear());

        assert!(bug.is_following());
        // Perpendicular to the goal direction, full step
        let goal_dir = pos.direction_to(&p.goal);
        assert!(disp.dot(&goal_dir).abs() < 1e-9);
        assert!((disp.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_resumes_direct_pursuit_once_clear() {
        let mut scene = SceneSnapshot::empty();
        scene.add(ObstacleKind::Obstacle, Rect::new(100.0, 100.0, 40.0, 40.0));

        let mut bug = BugFollow::new(params());
        bug.compute_next_move(Point2::new(93.0, 93.0), scene.objects(), &[], &OddSnapshot::clear());
        assert!(bug.is_following());

        // From a position with a clear line, following mode ends
        let disp =
            bug.compute_next_move(Point2::new(93.0, 200.0), scene.objects(), &[], &OddSnapshot::clear());
        assert!(!bug.is_following());
        assert!((disp.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_boxed_in_yields_zero() {
        let mut scene = SceneSnapshot::empty();
        // Pocket walls flush against the vehicle's cell at (100..120)^2
        scene.add(ObstacleKind::Wall, Rect::new(60.0, 70.0, 100.0, 30.0));
        scene.add(ObstacleKind::Wall, Rect::new(60.0, 120.0, 100.0, 30.0));
        scene.add(ObstacleKind::Wall, Rect::new(70.0, 60.0, 30.0, 100.0));
        scene.add(ObstacleKind::Wall, Rect::new(120.0, 60.0, 30.0, 100.0));

        let mut bug = BugFollow::new(params());
        let disp =
            bug.compute_next_move(Point2::new(100.0, 100.0), &[], scene.objects(), &OddSnapshot::clear());
        assert_eq!(disp, Point2::ZERO);
    }
}
