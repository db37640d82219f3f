//! Shared fake backends for the module test suites.

use glam::Vec3;

use crate::backend::{
    AnimationSample, AnimationSink, CameraPivot, CollisionQuery, CollisionVolume, PhysicsBody,
};

/// Unit-mass body that records the impulses it receives.
pub(crate) struct FakeBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub impulses: Vec<Vec3>,
}

impl FakeBody {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            impulses: Vec::new(),
        }
    }
}

impl PhysicsBody for FakeBody {
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
        self.impulses.push(impulse);
    }
}

/// Scripted probe answers, ignoring probe directions.
pub(crate) struct FakeProbes {
    pub floor: bool,
    pub wall: bool,
    pub roof: bool,
    pub ledge: Option<Vec3>,
}

impl FakeProbes {
    /// Flat ground, nothing else.
    pub fn floored() -> Self {
        Self {
            floor: true,
            wall: false,
            roof: false,
            ledge: None,
        }
    }

    /// Mid-air next to a runnable wall.
    pub fn walled() -> Self {
        Self {
            floor: false,
            wall: true,
            roof: false,
            ledge: None,
        }
    }

    /// Mid-air, nothing in reach.
    pub fn open_air() -> Self {
        Self {
            floor: false,
            wall: false,
            roof: false,
            ledge: None,
        }
    }
}

impl CollisionQuery for FakeProbes {
    fn check_floor(&self, _direction: Vec3) -> bool {
        self.floor
    }

    fn check_wall(&self, _direction: Vec3) -> bool {
        self.wall
    }

    fn check_roof(&self, _direction: Vec3) -> bool {
        self.roof
    }

    fn check_ledges(&self) -> Option<Vec3> {
        self.ledge
    }
}

pub(crate) struct FakeVolume {
    pub height: f32,
}

impl FakeVolume {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl CollisionVolume for FakeVolume {
    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }
}

pub(crate) struct FakeCamera {
    pub pitch: f32,
    pub fov: f32,
}

impl FakeCamera {
    pub fn new(fov: f32) -> Self {
        Self { pitch: 0.0, fov }
    }
}

impl CameraPivot for FakeCamera {
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

/// Sink that keeps every sample it is handed.
pub(crate) struct RecordingSink {
    pub samples: Vec<AnimationSample>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }
}

impl AnimationSink for RecordingSink {
    fn apply(&mut self, sample: &AnimationSample) {
        self.samples.push(*sample);
    }
}
