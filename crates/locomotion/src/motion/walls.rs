//! Wall-run detection and movement targets.
//!
//! A wall run needs three things: movement input, remaining time budget, and
//! an actual wall in the probed direction. The budget is cumulative across
//! airborne re-entries and only resets on grounding, so repeated brief wall
//! contacts drain the same allowance. Exhausting it makes the detector report
//! "no wall" even when one is physically present.

use glam::Vec3;

use crate::backend::CollisionQuery;

use super::config::MotionParameters;
use super::state::{InputSnapshot, MotionContext};

/// Direction probed for runnable walls.
///
/// Forward input only probes ahead (backpedal does not look for walls behind);
/// strafe input probes sideways at full range.
pub fn probe_direction(ctx: &MotionContext, input: &InputSnapshot) -> Vec3 {
    ctx.forward() * input.move_y.clamp(0.0, 1.0) + ctx.right() * input.move_x
}

/// Whether a wall run may start or continue right now.
pub fn eligible(
    params: &MotionParameters,
    ctx: &MotionContext,
    input: &InputSnapshot,
    collision: &dyn CollisionQuery,
) -> bool {
    if !input.has_movement() {
        return false;
    }
    if ctx.wall_run_elapsed >= params.wall_run_time {
        return false;
    }
    collision.check_wall(probe_direction(ctx, input))
}

/// Velocity the body converges on while running a wall.
///
/// The vertical component follows the raw forward/back axis, so negative
/// input drives the character down the wall.
pub fn target_velocity(
    params: &MotionParameters,
    ctx: &MotionContext,
    vertical_input: f32,
) -> Vec3 {
    Vec3::Y * vertical_input * params.wall_run_upwards_movement
        + ctx.forward() * ctx.active_speed
}
