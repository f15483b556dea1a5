//! Planning strategies.
//!
//! Every strategy answers one question each frame: given where the vehicle
//! is and what the scene looks like, what displacement should be added to
//! the position? Strategies never mutate shared state; the only memory they
//! carry is their own (patrol heading, wall-following mode, RNG).
//!
//! Selection is a runtime key lookup over a closed set of variants; an
//! unrecognized key substitutes the default patrol rather than failing.

mod bug;
mod dynamic_window;
mod gap;
mod patrol;
mod potential_field;
mod sampling;

pub use bug::BugFollow;
pub use dynamic_window::DynamicWindow;
pub use gap::GapSeeking;
pub use patrol::DefaultPatrol;
pub use potential_field::PotentialField;
pub use sampling::SamplingEscape;

use crate::collision::first_hit;
use crate::core::{Point2, Rect};
use crate::odd::OddSnapshot;
use crate::scene::SceneObject;

/// Kinematic parameters shared by all strategies, fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct StrategyParams {
    /// Arena side length
    pub arena_size: f64,
    /// Vehicle side length
    pub vehicle_size: f64,
    /// Nominal displacement magnitude per frame
    pub step_size: f64,
    /// Goal position
    pub goal: Point2,
}

impl StrategyParams {
    /// Vehicle AABB at a candidate position.
    #[inline]
    pub(crate) fn vehicle_rect(&self, pos: Point2) -> Rect {
        Rect::new(pos.x, pos.y, self.vehicle_size, self.vehicle_size)
    }
}

/// First object the vehicle would overlap at `pos`, obstacles before walls.
pub(crate) fn hit_at<'a>(
    params: &StrategyParams,
    pos: Point2,
    obstacles: &'a [SceneObject],
    walls: &'a [SceneObject],
) -> Option<&'a SceneObject> {
    let rect = params.vehicle_rect(pos);
    first_hit(&rect, obstacles, None).or_else(|| first_hit(&rect, walls, None))
}

/// Whether the vehicle would overlap anything at `pos`.
pub(crate) fn blocked_at(
    params: &StrategyParams,
    pos: Point2,
    obstacles: &[SceneObject],
    walls: &[SceneObject],
) -> bool {
    hit_at(params, pos, obstacles, walls).is_some()
}

/// Closed set of planning strategies, selected by configuration key.
#[derive(Clone, Debug)]
pub enum Strategy {
    Default(DefaultPatrol),
    PotentialField(PotentialField),
    BugFollow(BugFollow),
    DynamicWindow(DynamicWindow),
    SamplingEscape(SamplingEscape),
    GapSeeking(GapSeeking),
}

impl Strategy {
    /// Look up a strategy by key. Keys accept the algorithm-family aliases
    /// the selection UI uses (`apf`/`vff`, `rrt`/`prm`, `drl`/`ppo`, ...).
    pub fn from_key(key: &str, params: StrategyParams, seed: u64) -> Option<Self> {
        let strategy = match key.to_ascii_lowercase().as_str() {
            "default" => Strategy::Default(DefaultPatrol::new(params)),
            "potential-field" | "apf" | "vff" => {
                Strategy::PotentialField(PotentialField::new(params))
            }
            "bug" | "bug-follow" | "tangent-bug" => Strategy::BugFollow(BugFollow::new(params)),
            "dwa" | "dynamic-window" => Strategy::DynamicWindow(DynamicWindow::new(params)),
            "sampling" | "sampling-escape" | "rrt" | "prm" => {
                Strategy::SamplingEscape(SamplingEscape::new(params, seed))
            }
            "gap" | "gap-seeking" | "drl" | "ppo" => Strategy::GapSeeking(GapSeeking::new(params)),
            _ => return None,
        };
        Some(strategy)
    }

    /// Resolve a key, substituting the default patrol for unknown keys.
    /// The second element reports whether the fallback was taken.
    pub fn resolve(key: &str, params: StrategyParams, seed: u64) -> (Self, bool) {
        match Self::from_key(key, params, seed) {
            Some(strategy) => (strategy, false),
            None => (Strategy::Default(DefaultPatrol::new(params)), true),
        }
    }

    /// Canonical key of the active strategy.
    pub fn key(&self) -> &'static str {
        match self {
            Strategy::Default(_) => "default",
            Strategy::PotentialField(_) => "potential-field",
            Strategy::BugFollow(_) => "bug",
            Strategy::DynamicWindow(_) => "dwa",
            Strategy::SamplingEscape(_) => "sampling",
            Strategy::GapSeeking(_) => "gap",
        }
    }

    /// Compute the displacement for this frame.
    ///
    /// The returned displacement is bounded by one step size; the driver
    /// owns the actual position update and clamping.
    pub fn compute_next_move(
        &mut self,
        current: Point2,
        obstacles: &[SceneObject],
        walls: &[SceneObject],
        odd: &OddSnapshot,
    ) -> Point2 {
        match self {
            Strategy::Default(s) => s.compute_next_move(current, obstacles, walls, odd),
            Strategy::PotentialField(s) => s.compute_next_move(current, obstacles, walls, odd),
            Strategy::BugFollow(s) => s.compute_next_move(current, obstacles, walls, odd),
            Strategy::DynamicWindow(s) => s.compute_next_move(current, obstacles, walls, odd),
            Strategy::SamplingEscape(s) => s.compute_next_move(current, obstacles, walls, odd),
            Strategy::GapSeeking(s) => s.compute_next_move(current, obstacles, walls, odd),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::params;
    use super::*;
    use crate::odd::OddSnapshot;

    #[test]
    fn test_known_keys_resolve() {
        for key in ["default", "apf", "bug", "dwa", "rrt", "gap", "DWA"] {
            assert!(Strategy::from_key(key, params(), 1).is_some(), "{key}");
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert!(Strategy::from_key("warp-drive", params(), 1).is_none());

        let (strategy, fallback) = Strategy::resolve("warp-drive", params(), 1);
        assert!(fallback);
        assert_eq!(strategy.key(), "default");

        let (_, fallback) = Strategy::resolve("bug", params(), 1);
        assert!(!fallback);
    }

    #[test]
    fn test_displacement_bounded_by_step_size() {
        let mut scene = crate::scene::SceneSnapshot::empty();
        scene.add(
            crate::scene::ObstacleKind::Obstacle,
            crate::core::Rect::new(60.0, 40.0, 20.0, 20.0),
        );
        let obstacles: Vec<_> = scene.objects().to_vec();
        let odd = OddSnapshot::clear();
        let current = Point2::new(50.0, 50.0);

        for key in ["default", "potential-field", "bug", "dwa", "sampling", "gap"] {
            let (mut strategy, _) = Strategy::resolve(key, params(), 3);
            for _ in 0..20 {
                let disp = strategy.compute_next_move(current, &obstacles, &[], &odd);
                assert!(
                    disp.length() <= params().step_size + 1e-9,
                    "{key} overstepped: {}",
                    disp.length()
                );
            }
        }
    }
}
