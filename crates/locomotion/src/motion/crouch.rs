//! Crouching and sliding.
//!
//! Crouching shrinks the collision capsule and caps the target speed. If the
//! character is moving fast enough when the crouch starts, it becomes a slide:
//! speed is clamped to the slide limit, steering authority drops to zero, and
//! a forward impulse shoves the body onward. Authority then ramps back to full
//! over time; that ramp is the only throttle on post-slide control.

use crate::backend::{CollisionVolume, PhysicsBody};

use super::config::MotionParameters;
use super::state::MotionContext;

/// Begin crouching: shrink the capsule and trigger a slide when fast enough.
pub fn start(
    params: &MotionParameters,
    ctx: &mut MotionContext,
    body: &mut dyn PhysicsBody,
    volume: &mut dyn CollisionVolume,
) {
    ctx.crouching = true;
    volume.set_height(params.crouch_height);

    if ctx.active_speed > params.slide_speed_limit {
        slide(params, ctx, body);
    }
}

/// Stand back up: restore the capsule to its standing height.
///
/// Callers are responsible for the roof-clearance check; this always stands.
pub fn release(ctx: &mut MotionContext, volume: &mut dyn CollisionVolume, standing_height: f32) {
    ctx.crouching = false;
    volume.set_height(standing_height);
}

/// Ramp steering authority back toward full.
pub fn ramp_adjustment(params: &MotionParameters, ctx: &mut MotionContext, delta: f32) {
    if ctx.adjustment_factor < 1.0 {
        ctx.adjustment_factor = (ctx.adjustment_factor + delta * params.slide_control).min(1.0);
    }
}

fn slide(params: &MotionParameters, ctx: &mut MotionContext, body: &mut dyn PhysicsBody) {
    ctx.active_speed = params.slide_speed_limit;
    ctx.adjustment_factor = 0.0;
    body.apply_impulse(ctx.forward() * params.slide_impulse);
}
