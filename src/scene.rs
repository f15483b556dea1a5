//! Scene snapshot types.
//!
//! The scene (map editor, renderer) owns the live object set; the core only
//! borrows an immutable `SceneSnapshot` per frame. Builders here cover the
//! arenas the binary and tests need: an empty arena, a wall-ringed arena,
//! and a random scatter of obstacles.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::Rect;

/// Identifier of a scene object, allocated by the scene collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a scene object.
///
/// `Vehicle` covers other traffic participants: it collides like an
/// obstacle but is reported under its own label in events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Obstacle,
    Wall,
    Vehicle,
}

impl ObstacleKind {
    /// The kind this object collides as; `Vehicle` folds into `Obstacle`.
    #[inline]
    pub fn collision_kind(&self) -> ObstacleKind {
        match self {
            ObstacleKind::Vehicle => ObstacleKind::Obstacle,
            other => *other,
        }
    }

    /// Whether this is a wall.
    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, ObstacleKind::Wall)
    }

    /// Label used in logs and exported reports.
    pub fn label(&self) -> &'static str {
        match self {
            ObstacleKind::Obstacle => "obstacle",
            ObstacleKind::Wall => "wall",
            ObstacleKind::Vehicle => "vehicle",
        }
    }
}

/// One static or dynamic object in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ObstacleKind,
    pub bounds: Rect,
}

/// Ordered, immutable-per-frame view of the scene's object set.
///
/// Iteration order is meaningful: the collision detector reports the first
/// intersecting object in this order.
#[derive(Clone, Debug, Default)]
pub struct SceneSnapshot {
    objects: Vec<SceneObject>,
    next_id: u32,
}

impl SceneSnapshot {
    /// Empty scene.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append an object, allocating the next sequential id.
    pub fn add(&mut self, kind: ObstacleKind, bounds: Rect) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(SceneObject { id, kind, bounds });
        id
    }

    /// All objects in insertion order.
    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Number of objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Arena ringed by four wall slabs of `thickness`, flush to the edges.
    pub fn walled_arena(arena_size: f64, thickness: f64) -> Self {
        let mut scene = Self::empty();
        let inner = arena_size - thickness;
        scene.add(ObstacleKind::Wall, Rect::new(0.0, 0.0, arena_size, thickness));
        scene.add(ObstacleKind::Wall, Rect::new(0.0, inner, arena_size, thickness));
        scene.add(ObstacleKind::Wall, Rect::new(0.0, thickness, thickness, inner - thickness));
        scene.add(ObstacleKind::Wall, Rect::new(inner, thickness, thickness, inner - thickness));
        scene
    }

    /// Scatter 5 to 14 grid-aligned objects across the arena, half of them
    /// obstacles and half other vehicles, from the caller's RNG.
    pub fn scatter_random<R: Rng>(arena_size: f64, object_size: f64, rng: &mut R) -> Self {
        let mut scene = Self::empty();
        let slots = (arena_size / object_size) as u32;
        let count = rng.gen_range(5..15);
        for _ in 0..count {
            let x = rng.gen_range(0..slots) as f64 * object_size;
            let y = rng.gen_range(0..slots) as f64 * object_size;
            let kind = if rng.gen_bool(0.5) {
                ObstacleKind::Obstacle
            } else {
                ObstacleKind::Vehicle
            };
            scene.add(kind, Rect::new(x, y, object_size, object_size));
        }
        scene
    }
}
