//! A deliberately simple arena.
//!
//! Flat floor, one optional runnable wall plane, an optional ceiling, an
//! optional grabbable ledge — just enough geometry to exercise every movement
//! mode. The arena answers the controller's backend traits directly; it is a
//! stand-in for a real collision service, not a solver.

use freerun_locomotion::{CameraPivot, CollisionQuery, CollisionVolume, PhysicsBody};
use glam::Vec3;

/// Capsule radius used for wall clearance.
const BODY_RADIUS: f32 = 0.4;

/// How far above the floor the capsule base still counts as floor contact.
const FLOOR_PROBE: f32 = 0.1;

/// How far a wall plane is sensed.
const WALL_PROBE: f32 = 0.6;

/// Vertical clearance needed to stand.
const STAND_CLEARANCE: f32 = 2.1;

/// How far away a ledge can be grabbed from.
const LEDGE_REACH: f32 = 2.5;

/// Static arena geometry.
#[derive(Debug, Clone)]
pub struct Arena {
    /// Floor height across the whole arena.
    pub floor_height: f32,

    /// A runnable wall plane facing -X at this x coordinate, if any.
    pub wall_x: Option<f32>,

    /// A ceiling at this height, if any.
    pub roof_height: Option<f32>,

    /// A grabbable ledge point, if any.
    pub ledge: Option<Vec3>,
}

impl Arena {
    /// Just a floor.
    pub fn flat() -> Self {
        Self {
            floor_height: 0.0,
            wall_x: None,
            roof_height: None,
            ledge: None,
        }
    }

    /// Floor, a wall to run along on the +X side, and a ledge further down
    /// the track.
    pub fn runway() -> Self {
        Self {
            floor_height: 0.0,
            wall_x: Some(3.0),
            roof_height: None,
            ledge: Some(Vec3::new(2.5, 4.0, 30.0)),
        }
    }
}

/// Kinematic stand-in for an engine rigid body.
#[derive(Debug, Clone)]
pub struct ArenaBody {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl ArenaBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }

    /// Integrate gravity and motion, keeping the body out of the floor and
    /// the wall plane.
    pub fn integrate(&mut self, arena: &Arena, gravity: f32, delta: f32) {
        self.velocity.y -= gravity * delta;
        self.position += self.velocity * delta;

        if self.position.y <= arena.floor_height {
            self.position.y = arena.floor_height;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
        }

        if let Some(wall_x) = arena.wall_x {
            let limit = wall_x - BODY_RADIUS;
            if self.position.x > limit {
                self.position.x = limit;
                if self.velocity.x > 0.0 {
                    self.velocity.x = 0.0;
                }
            }
        }
    }
}

impl PhysicsBody for ArenaBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse;
    }
}

/// One tick's collision view: the arena as seen from a body position.
pub struct ArenaProbes<'a> {
    pub arena: &'a Arena,
    pub position: Vec3,
}

impl CollisionQuery for ArenaProbes<'_> {
    fn check_floor(&self, _direction: Vec3) -> bool {
        self.position.y <= self.arena.floor_height + FLOOR_PROBE
    }

    fn check_wall(&self, direction: Vec3) -> bool {
        match self.arena.wall_x {
            Some(wall_x) => {
                direction.x > 0.01 && self.position.x >= wall_x - BODY_RADIUS - WALL_PROBE
            }
            None => false,
        }
    }

    fn check_roof(&self, _direction: Vec3) -> bool {
        self.arena
            .roof_height
            .is_some_and(|roof| roof - self.position.y < STAND_CLEARANCE)
    }

    fn check_ledges(&self) -> Option<Vec3> {
        self.arena
            .ledge
            .filter(|point| point.y > self.position.y && point.distance(self.position) <= LEDGE_REACH)
    }
}

/// The character's collision capsule.
#[derive(Debug, Clone)]
pub struct Capsule {
    pub height: f32,
}

impl CollisionVolume for Capsule {
    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }
}

/// The head pivot: pitch plus field of view.
#[derive(Debug, Clone)]
pub struct HeadCamera {
    pub pitch: f32,
    pub fov: f32,
}

impl HeadCamera {
    pub fn new(fov: f32) -> Self {
        Self { pitch: 0.0, fov }
    }
}

impl CameraPivot for HeadCamera {
    fn set_pitch(&mut self, degrees: f32) {
        self.pitch = degrees;
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_contact() {
        let arena = Arena::flat();

        let on_floor = ArenaProbes {
            arena: &arena,
            position: Vec3::ZERO,
        };
        assert!(on_floor.check_floor(-Vec3::Y));

        let airborne = ArenaProbes {
            arena: &arena,
            position: Vec3::new(0.0, 1.0, 0.0),
        };
        assert!(!airborne.check_floor(-Vec3::Y));
    }

    #[test]
    fn test_wall_needs_proximity_and_direction() {
        let arena = Arena::runway();

        let near_wall = ArenaProbes {
            arena: &arena,
            position: Vec3::new(2.4, 1.0, 0.0),
        };
        assert!(near_wall.check_wall(Vec3::X));
        assert!(!near_wall.check_wall(Vec3::Z), "probe away from the wall misses");

        let far_away = ArenaProbes {
            arena: &arena,
            position: Vec3::new(0.0, 1.0, 0.0),
        };
        assert!(!far_away.check_wall(Vec3::X));
    }

    #[test]
    fn test_ledge_within_reach_only() {
        let arena = Arena::runway();
        let ledge = arena.ledge.unwrap();

        let close = ArenaProbes {
            arena: &arena,
            position: ledge - Vec3::new(0.0, 2.0, 0.0),
        };
        assert_eq!(close.check_ledges(), Some(ledge));

        let far = ArenaProbes {
            arena: &arena,
            position: Vec3::ZERO,
        };
        assert_eq!(far.check_ledges(), None);

        // A ledge below the body is not grabbable
        let above = ArenaProbes {
            arena: &arena,
            position: ledge + Vec3::new(0.0, 1.0, 0.0),
        };
        assert_eq!(above.check_ledges(), None);
    }

    #[test]
    fn test_integration_settles_on_floor() {
        let arena = Arena::flat();
        let mut body = ArenaBody::new(Vec3::new(0.0, 3.0, 0.0));

        for _ in 0..600 {
            body.integrate(&arena, 20.0, 1.0 / 60.0);
        }

        assert_eq!(body.position.y, 0.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_wall_plane_blocks_body() {
        let arena = Arena::runway();
        let mut body = ArenaBody::new(Vec3::new(2.0, 1.0, 0.0));
        body.velocity = Vec3::new(10.0, 0.0, 0.0);

        for _ in 0..60 {
            body.integrate(&arena, 0.0, 1.0 / 60.0);
        }

        assert!(body.position.x <= arena.wall_x.unwrap() - BODY_RADIUS + 0.0001);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_roof_blocks_standing() {
        let arena = Arena {
            floor_height: 0.0,
            wall_x: None,
            roof_height: Some(1.8),
            ledge: None,
        };

        let probes = ArenaProbes {
            arena: &arena,
            position: Vec3::ZERO,
        };
        assert!(probes.check_roof(Vec3::Y));
    }
}
