//! Engine backend abstraction.
//!
//! The controller never talks to an engine directly. Everything it needs from
//! the host — the rigid body, collision probes, the capsule it resizes when
//! crouching, the camera it pitches and zooms — is expressed as a small trait
//! here and borrowed for the duration of one tick via [`CharacterRig`].
//! Implement these traits to host the controller on any engine, or with plain
//! structs for scripted tests.

use glam::Vec3;

/// The rigid body carrying the character.
///
/// The controller reads and writes velocity, applies instantaneous impulses,
/// and (only while climbing a ledge) writes position directly. Impulses are
/// velocity changes; the host scales by mass if its body is not unit-mass.
pub trait PhysicsBody {
    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Teleport the body. Used by the scripted ledge climb only.
    fn set_position(&mut self, position: Vec3);

    /// Current world-space velocity.
    fn velocity(&self) -> Vec3;

    /// Overwrite the world-space velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Apply an instantaneous impulse (a velocity change).
    fn apply_impulse(&mut self, impulse: Vec3);
}

/// Collision probes around the character.
///
/// Every query is a yes/no (or point/none) answer about the character's
/// immediate surroundings. A negative answer is valid data, not an error.
pub trait CollisionQuery {
    /// Is there walkable ground in the given direction (normally straight down)?
    fn check_floor(&self, direction: Vec3) -> bool;

    /// Is there a runnable wall in the given direction?
    fn check_wall(&self, direction: Vec3) -> bool;

    /// Is there geometry blocking the character from standing up?
    fn check_roof(&self, direction: Vec3) -> bool;

    /// A grabbable ledge point in reach, if any.
    fn check_ledges(&self) -> Option<Vec3>;
}

/// The character's collision capsule, resized when crouching and standing.
pub trait CollisionVolume {
    /// Current capsule height.
    fn height(&self) -> f32;

    /// Resize the capsule.
    fn set_height(&mut self, height: f32);
}

/// The head pivot the controller pitches and zooms.
///
/// Yaw rotates the whole character and is derived from
/// [`MotionContext::yaw`](crate::MotionContext); only pitch and field of view
/// live on the pivot itself.
pub trait CameraPivot {
    /// Set the local pitch rotation (degrees).
    fn set_pitch(&mut self, degrees: f32);

    /// Current field of view.
    fn fov(&self) -> f32;

    /// Set the field of view.
    fn set_fov(&mut self, fov: f32);
}

/// Per-tick movement snapshot for animation blending.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSample {
    /// Movement mode index (see [`MotionState::index`](crate::MotionState::index)).
    pub state: u8,

    /// Whether the character is crouching.
    pub crouching: bool,

    /// Velocity along the character's right axis.
    pub lateral_velocity: f32,

    /// Velocity along the character's forward axis.
    pub forward_velocity: f32,

    /// World-space vertical velocity.
    pub vertical_velocity: f32,

    /// Raw strafe axis value.
    pub lateral_input: f32,
}

/// Receiver for per-tick [`AnimationSample`]s.
///
/// Purely observational; the controller is correct without one attached.
pub trait AnimationSink {
    /// Accept this tick's sample.
    fn apply(&mut self, sample: &AnimationSample);
}

/// Sink that discards every sample.
pub struct NoOpAnimationSink;

impl AnimationSink for NoOpAnimationSink {
    fn apply(&mut self, _sample: &AnimationSample) {}
}

/// The engine hooks for one character, borrowed for a single tick.
pub struct CharacterRig<'a> {
    /// The rigid body to drive.
    pub body: &'a mut dyn PhysicsBody,

    /// Collision probes around the body.
    pub collision: &'a dyn CollisionQuery,

    /// The collision capsule to resize.
    pub volume: &'a mut dyn CollisionVolume,

    /// The head pivot to pitch and zoom.
    pub camera: &'a mut dyn CameraPivot,

    /// Optional animation receiver.
    pub animation: Option<&'a mut dyn AnimationSink>,
}
