//! Scalar speed smoothing.
//!
//! The controller tracks one smoothed speed magnitude rather than working on
//! raw velocity: input picks a target, the active speed converges on it
//! exponentially, and the steering code applies it along the desired
//! direction. Landing overrides the smoothing for one tick so momentum built
//! in the air or on a wall carries over.

use glam::{Vec2, Vec3};

use super::config::MotionParameters;
use super::interp::blend;
use super::state::{InputSnapshot, MotionContext};

/// Horizontal magnitude of a velocity.
#[inline]
pub fn horizontal_speed(velocity: Vec3) -> f32 {
    Vec2::new(velocity.x, velocity.z).length()
}

/// Target speed for the current input and crouch state.
///
/// The forward/back axis blends between the backpedal and top speed; crouching
/// overrides the blend entirely.
pub fn target_speed(params: &MotionParameters, ctx: &MotionContext, input: &InputSnapshot) -> f32 {
    if ctx.crouching {
        params.crouch_speed
    } else {
        blend(params.backwards_speed, params.max_speed, input.move_y)
    }
}

/// Smooth the active speed toward the input-scaled target.
pub fn smooth(
    params: &MotionParameters,
    ctx: &mut MotionContext,
    input: &InputSnapshot,
    delta: f32,
) {
    let magnitude = input.movement_magnitude();
    let goal = target_speed(params, ctx, input) * magnitude;
    let rate = if magnitude > 0.0 {
        params.acceleration
    } else {
        params.deceleration
    };
    ctx.active_speed = blend(ctx.active_speed, goal, delta * rate);
}

/// Force the active speed to match the body's horizontal velocity.
///
/// Runs on landing so that speed built while airborne or wall-running is kept
/// instead of being re-smoothed from the old grounded value.
pub fn carry_momentum(ctx: &mut MotionContext, velocity: Vec3) {
    ctx.active_speed = horizontal_speed(velocity);
}
