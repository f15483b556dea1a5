//! AABB collision detection against the scene's object set.

use crate::core::Rect;
use crate::scene::{ObstacleKind, SceneObject};

/// Find the first scene object whose bounds intersect `vehicle`.
///
/// Objects are tested in the order supplied; callers needing a priority
/// order must sort before calling. `kind` restricts the test to one
/// collision class — `Vehicle`-kind objects collide as obstacles, so a
/// filter of `Obstacle` matches them too. Touching edges do not count.
pub fn first_hit<'a>(
    vehicle: &Rect,
    objects: &'a [SceneObject],
    kind: Option<ObstacleKind>,
) -> Option<&'a SceneObject> {
    objects.iter().find(|obj| {
        if let Some(k) = kind {
            if obj.kind.collision_kind() != k.collision_kind() {
                return false;
            }
        }
        vehicle.intersects(&obj.bounds)
    })
}
