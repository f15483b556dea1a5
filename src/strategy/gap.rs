//! Widest-gap heading search.
//!
//! Stands in for learned planners at this abstraction level: pursue the
//! goal directly, and when blocked, probe 16 evenly-spaced headings at
//! three steps out. Collision-free headings are ranked by the distance to
//! the nearest object inside a 45-degree cone around them; the widest gap
//! wins. If nothing is collision-free the vehicle stays put for the frame.

use std::f64::consts::{FRAC_PI_4, TAU};

use crate::core::{angle_diff, Point2};
use crate::odd::OddSnapshot;
use crate::scene::SceneObject;

use super::{blocked_at, StrategyParams};

/// Number of evenly-spaced candidate headings.
const HEADING_COUNT: usize = 16;

/// Probe distance, in steps.
const PROBE_FACTOR: f64 = 3.0;

/// Gap-seeking strategy.
#[derive(Clone, Debug)]
pub struct GapSeeking {
    params: StrategyParams,
}

impl GapSeeking {
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
        let direct = current.direction_to(&self.params.goal) * step;
        if !blocked_at(&self.params, current + direct, obstacles, walls) {
            return direct;
        }

        let center = self.params.vehicle_rect(current).center();
        let probe_distance = self.params.step_size * PROBE_FACTOR;

        let mut best: Option<(f64, f64)> = None; // (gap, heading)
        for k in 0..HEADING_COUNT {
            let heading = k as f64 * TAU / HEADING_COUNT as f64;
            let probe = current + Point2::from_angle(heading) * probe_distance;
            if blocked_at(&self.params, probe, obstacles, walls) {
                continue;
            }

            // Nearest object whose bearing falls inside the 45-degree cone
            // around this heading; an empty cone counts as an infinite gap.
            let mut gap = f64::INFINITY;
            for obj in obstacles.iter().chain(walls.iter()) {
                let obj_center = obj.bounds.center();
                let bearing = center.angle_to(&obj_center);
                if angle_diff(bearing, heading).abs() <= FRAC_PI_4 {
                    gap = gap.min(center.distance(&obj_center));
                }
            }

            if best.map_or(true, |(g, _)| gap > g) {
                best = Some((gap, heading));
            }
        }

        best.map_or(Point2::ZERO, |(_, heading)| {
            Point2::from_angle(heading) * step
        })
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
        let mut gap = GapSeeking::new(params());
        let disp = gap.compute_next_move(Point2::ZERO, &[], &[], &OddSnapshot::clear());
        let expected = Point2::ZERO.direction_to(&params().goal) * 10.0;
        assert!((disp.x - expected.x).abs() < 1e-9);
        assert!((disp.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn test_blocked_vehicle_heads_for_the_widest_gap() {
        let p = StrategyParams {
            goal: Point2::new(480.0, 100.0),
            ..params()
        };
        let mut scene = SceneSnapshot::empty();
        // Wall ahead blocks the direct step; everything rightward of the
        // vehicle is crowded, the left half-plane is open
        scene.add(ObstacleKind::Obstacle, Rect::new(125.0, 60.0, 20.0, 100.0));

        let mut gap = GapSeeking::new(p);
        let disp = gap.compute_next_move(
            Point2::new(100.0, 100.0),
            scene.objects(),
            &[],
            &OddSnapshot::clear(),
        );

        // One full step, heading out of the crowded right half-plane
        assert!((disp.length() - 10.0).abs() < 1e-9);
        assert!(disp.x < 1e-9);
        assert!(disp.y > 1.0);
    }

    #[test]
    fn test_enclosed_vehicle_stays_put() {
        let mut scene = SceneSnapshot::empty();
        // Thick slabs flush against the vehicle: the direct step and every
        // probe at 30 units land inside a wall
        scene.add(ObstacleKind::Wall, Rect::new(20.0, 50.0, 200.0, 50.0));
        scene.add(ObstacleKind::Wall, Rect::new(20.0, 120.0, 200.0, 50.0));
        scene.add(ObstacleKind::Wall, Rect::new(50.0, 20.0, 50.0, 200.0));
        scene.add(ObstacleKind::Wall, Rect::new(120.0, 20.0, 50.0, 200.0));

        let mut gap = GapSeeking::new(params());
        let disp = gap.compute_next_move(
            Point2::new(100.0, 100.0),
            &[],
            scene.objects(),
            &OddSnapshot::clear(),
        );
        assert_eq!(disp, Point2::ZERO);
    }
}
