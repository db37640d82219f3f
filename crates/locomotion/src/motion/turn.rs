//! Look integration.
//!
//! Yaw turns the whole character about the vertical axis and is read back
//! through [`MotionContext::forward`]/[`MotionContext::right`]; pitch tilts
//! only the head pivot and is clamped to the configured range. Both run every
//! tick regardless of movement mode.

use crate::backend::CameraPivot;

use super::config::MotionParameters;
use super::state::MotionContext;

/// Accumulate yaw from the horizontal look axis at the given rate.
pub fn apply_yaw(ctx: &mut MotionContext, look_x: f32, rate: f32, delta: f32) {
    ctx.yaw += look_x * delta * rate;
}

/// Accumulate clamped pitch from the vertical look axis and push it to the
/// head pivot.
pub fn apply_pitch(
    params: &MotionParameters,
    ctx: &mut MotionContext,
    camera: &mut dyn CameraPivot,
    look_y: f32,
    delta: f32,
) {
    ctx.pitch -= look_y * delta * params.look_up_speed;
    ctx.pitch = ctx.pitch.clamp(params.min_look_angle, params.max_look_angle);
    camera.set_pitch(ctx.pitch);
}
