//! Movement state and input structures.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Axis values below this count as no input.
const AXIS_DEADZONE: f32 = 0.001;

/// The four movement modes. Exactly one is active at any tick boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// Running on the ground.
    #[default]
    Grounded,
    /// Falling or jumping.
    InAir,
    /// Running along a wall.
    OnWalls,
    /// Pulling up onto a ledge.
    LedgeGrab,
}

impl MotionState {
    /// Stable index for animation blending (0..=3).
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            MotionState::Grounded => 0,
            MotionState::InAir => 1,
            MotionState::OnWalls => 2,
            MotionState::LedgeGrab => 3,
        }
    }
}

/// Complete persistent movement state for one character.
///
/// Owned exclusively by the controller for the character's lifetime and
/// mutated only inside [`LocomotionController::update`](super::LocomotionController::update).
/// Timers and the ledge snapshot are reset at the transitions that use them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionContext {
    /// Active movement mode.
    pub state: MotionState,

    /// Smoothed scalar speed applied along the steered direction. Never
    /// negative.
    pub active_speed: f32,

    /// Steering authority in `[0, 1]`. A slide drops it to 0; it ramps back
    /// to 1 over time.
    pub adjustment_factor: f32,

    /// Time without floor contact (grounded) or since leaving it (airborne).
    pub airborne_timer: f32,

    /// Time spent grounded since the last landing.
    pub grounded_timer: f32,

    /// Cumulative wall-run time since the last grounding.
    pub wall_run_elapsed: f32,

    /// Extra jumps available after leaving a wall (0 or 1).
    pub wall_jump_charges: u8,

    /// Time remaining in which a wall-jump charge may be spent.
    pub wall_jump_cooldown: f32,

    /// Accumulated look yaw (degrees).
    pub yaw: f32,

    /// Accumulated look pitch (degrees), clamped to the configured range.
    pub pitch: f32,

    /// Whether the character is crouching.
    pub crouching: bool,

    /// Position at the moment a ledge was grabbed.
    pub ledge_origin: Vec3,

    /// The ledge point being climbed to.
    pub ledge_target: Vec3,

    /// Time spent in the current ledge climb.
    pub ledge_progress: f32,
}

impl Default for MotionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionContext {
    /// Spawn state: grounded, standing still, full steering authority.
    pub fn new() -> Self {
        Self {
            state: MotionState::Grounded,
            active_speed: 0.0,
            adjustment_factor: 1.0,
            airborne_timer: 0.0,
            grounded_timer: 0.0,
            wall_run_elapsed: 0.0,
            wall_jump_charges: 0,
            wall_jump_cooldown: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            crouching: false,
            ledge_origin: Vec3::ZERO,
            ledge_target: Vec3::ZERO,
            ledge_progress: 0.0,
        }
    }

    /// Forward direction from the current yaw (horizontal only).
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(sin_yaw, 0.0, cos_yaw)
    }

    /// Right direction from the current yaw (horizontal only).
    pub fn right(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }
}

/// Immutable input for a single tick.
///
/// Axis values are assumed pre-clamped to `[-1, 1]` by the input layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Strafe axis (negative = left, positive = right).
    pub move_x: f32,

    /// Forward/back axis (positive = forward).
    pub move_y: f32,

    /// Horizontal look axis.
    pub look_x: f32,

    /// Vertical look axis.
    pub look_y: f32,

    /// Jump was pressed this tick (edge, not level).
    pub jump_pressed: bool,

    /// Grab is held.
    pub grab_held: bool,

    /// Crouch is held.
    pub crouch_held: bool,
}

impl InputSnapshot {
    /// Whether any movement input is active.
    #[inline]
    pub fn has_movement(&self) -> bool {
        self.move_x.abs() > AXIS_DEADZONE || self.move_y.abs() > AXIS_DEADZONE
    }

    /// Magnitude of the normalized movement input: 1 when any direction is
    /// held, 0 otherwise.
    #[inline]
    pub fn movement_magnitude(&self) -> f32 {
        Vec2::new(self.move_x, self.move_y).normalize_or_zero().length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_context() {
        let ctx = MotionContext::new();
        assert_eq!(ctx.state, MotionState::Grounded);
        assert_eq!(ctx.active_speed, 0.0);
        assert_eq!(ctx.adjustment_factor, 1.0);
        assert!(!ctx.crouching);
        assert_eq!(ctx.wall_jump_charges, 0);
    }

    #[test]
    fn test_state_indices() {
        assert_eq!(MotionState::Grounded.index(), 0);
        assert_eq!(MotionState::InAir.index(), 1);
        assert_eq!(MotionState::OnWalls.index(), 2);
        assert_eq!(MotionState::LedgeGrab.index(), 3);
    }

    #[test]
    fn test_forward_from_yaw() {
        let mut ctx = MotionContext::new();

        // Yaw 0 faces +Z
        let forward = ctx.forward();
        assert!(forward.x.abs() < 0.01);
        assert!((forward.z - 1.0).abs() < 0.01);

        // Yaw 90 faces +X
        ctx.yaw = 90.0;
        let forward = ctx.forward();
        assert!((forward.x - 1.0).abs() < 0.01);
        assert!(forward.z.abs() < 0.01);
    }

    #[test]
    fn test_right_is_perpendicular() {
        let mut ctx = MotionContext::new();

        for yaw in [0.0, 37.0, 90.0, 213.0] {
            ctx.yaw = yaw;
            assert!(ctx.forward().dot(ctx.right()).abs() < 0.0001);
        }

        // Yaw 0: right is +X
        ctx.yaw = 0.0;
        assert!((ctx.right().x - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_movement_magnitude_is_digital() {
        let mut input = InputSnapshot::default();
        assert_eq!(input.movement_magnitude(), 0.0);
        assert!(!input.has_movement());

        input.move_y = 0.3;
        assert!((input.movement_magnitude() - 1.0).abs() < 0.0001);
        assert!(input.has_movement());

        input.move_x = -0.7;
        assert!((input.movement_magnitude() - 1.0).abs() < 0.0001);
    }
}
