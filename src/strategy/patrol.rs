//! Default square patrol.
//!
//! The zero-configuration fallback: sweep the arena perimeter
//! right, down, left, up, turning whenever the next step would leave the
//! arena. Obstacles and the ODD are ignored entirely.

use crate::core::Point2;
use crate::odd::OddSnapshot;
use crate::scene::SceneObject;

use super::StrategyParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    fn displacement(self, step: f64) -> Point2 {
        match self {
            Heading::Right => Point2::new(step, 0.0),
            Heading::Down => Point2::new(0.0, step),
            Heading::Left => Point2::new(-step, 0.0),
            Heading::Up => Point2::new(0.0, -step),
        }
    }

    fn next(self) -> Heading {
        match self {
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
            Heading::Up => Heading::Right,
        }
    }
}

/// Fixed square patrol strategy.
#[derive(Clone, Debug)]
pub struct DefaultPatrol {
    params: StrategyParams,
    heading: Heading,
}

impl DefaultPatrol {
    pub fn new(params: StrategyParams) -> Self {
        Self {
            params,
            heading: Heading::Right,
        }
    }

    pub fn compute_next_move(
        &mut self,
        current: Point2,
        _obstacles: &[SceneObject],
        _walls: &[SceneObject],
        _odd: &OddSnapshot,
    ) -> Point2 {
        let max = self.params.arena_size - self.params.vehicle_size;
        // At most one full rotation: if every heading runs off the arena
        // (degenerate tiny arena) the patrol stands still.
        for _ in 0..4 {
            let disp = self.heading.displacement(self.params.step_size);
            let candidate = current + disp;
            let eps = 1e-9;
            if candidate.x >= -eps
                && candidate.x <= max + eps
                && candidate.y >= -eps
                && candidate.y <= max + eps
            {
                return disp;
            }
            self.heading = self.heading.next();
        }
        Point2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::params;
    use super::*;

    #[test]
    fn test_patrol_starts_rightward() {
        let mut patrol = DefaultPatrol::new(params());
        let disp = patrol.compute_next_move(Point2::ZERO, &[], &[], &OddSnapshot::clear());
        assert_eq!(disp, Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_patrol_turns_down_at_right_edge() {
        let mut patrol = DefaultPatrol::new(params());
        // Vehicle flush against the right edge: 480 + 10 would leave
        let disp = patrol.compute_next_move(Point2::new(480.0, 0.0), &[], &[], &OddSnapshot::clear());
        assert_eq!(disp, Point2::new(0.0, 10.0));
    }

    #[test]
    fn test_patrol_traces_the_perimeter() {
        let mut patrol = DefaultPatrol::new(params());
        let odd = OddSnapshot::clear();
        let mut pos = Point2::ZERO;
        let mut corners = Vec::new();
        for _ in 0..200 {
            let disp = patrol.compute_next_move(pos, &[], &[], &odd);
            pos = pos + disp;
            if (pos.x == 480.0 || pos.x == 0.0) && (pos.y == 480.0 || pos.y == 0.0) {
                corners.push((pos.x, pos.y));
            }
        }
        // Hits the three remaining corners of the square in order
        assert_eq!(
            corners,
            vec![(480.0, 0.0), (480.0, 480.0), (0.0, 480.0), (0.0, 0.0)]
        );
    }
}
