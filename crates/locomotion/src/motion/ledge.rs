//! Scripted ledge climbing.
//!
//! While a climb is active the body is driven positionally: velocity is forced
//! to zero every tick and the position follows a two-phase blend. Phase one
//! rises straight up to the ledge height; phase two glides across to the ledge
//! point, re-basing the origin onto the current column once the rise is done.

use glam::Vec3;

use crate::backend::PhysicsBody;

use super::config::MotionParameters;
use super::interp::blend_vec3;
use super::state::MotionContext;

/// Outcome of one climb tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbStep {
    /// Still pulling up.
    Climbing,
    /// The body is at the ledge point.
    Finished,
}

/// Snapshot the climb: where we started, where we are going, motion zeroed.
pub fn begin(ctx: &mut MotionContext, body: &mut dyn PhysicsBody, target: Vec3) {
    ctx.ledge_origin = body.position();
    ctx.ledge_target = target;
    ctx.ledge_progress = 0.0;
    body.set_velocity(Vec3::ZERO);
    ctx.active_speed = 0.0;
}

/// Advance the climb by one tick.
pub fn step(
    params: &MotionParameters,
    ctx: &mut MotionContext,
    body: &mut dyn PhysicsBody,
    delta: f32,
) -> ClimbStep {
    body.set_velocity(Vec3::ZERO);

    ctx.ledge_progress += delta;
    let progress = ctx.ledge_progress / params.pull_up_time;

    if progress < 0.5 {
        // Rise phase: straight up the starting column to ledge height
        let rise_target = Vec3::new(ctx.ledge_origin.x, ctx.ledge_target.y, ctx.ledge_origin.z);
        body.set_position(blend_vec3(ctx.ledge_origin, rise_target, progress * 2.0));
        ClimbStep::Climbing
    } else if progress <= 1.0 {
        // Re-base the origin onto the current column at ledge height, once
        if ctx.ledge_origin.y != ctx.ledge_target.y {
            let position = body.position();
            ctx.ledge_origin = Vec3::new(position.x, ctx.ledge_target.y, position.z);
        }

        // The glide blends by total progress, not the half-phase fraction;
        // the climb arc depends on it
        body.set_position(blend_vec3(ctx.ledge_origin, ctx.ledge_target, progress));
        ClimbStep::Climbing
    } else {
        body.set_position(ctx.ledge_target);
        ClimbStep::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::harness::FakeBody;

    fn climb_params(pull_up_time: f32) -> MotionParameters {
        MotionParameters {
            pull_up_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_zeroes_motion() {
        let mut ctx = MotionContext::new();
        ctx.active_speed = 9.0;
        let mut body = FakeBody::new();
        body.position = Vec3::new(1.0, 0.0, 2.0);
        body.velocity = Vec3::new(5.0, -3.0, 0.0);

        begin(&mut ctx, &mut body, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(ctx.active_speed, 0.0);
        assert_eq!(ctx.ledge_origin, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(ctx.ledge_target, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ctx.ledge_progress, 0.0);
    }

    #[test]
    fn test_rise_is_halfway_at_quarter_progress() {
        let params = climb_params(1.0);
        let mut ctx = MotionContext::new();
        let mut body = FakeBody::new();

        begin(&mut ctx, &mut body, Vec3::new(0.0, 2.0, 0.0));

        // One 0.25s tick: rise factor 0.5, so half the height
        let outcome = step(&params, &mut ctx, &mut body, 0.25);
        assert_eq!(outcome, ClimbStep::Climbing);
        assert!((body.position.y - 1.0).abs() < 0.0001);
        assert_eq!(body.position.x, 0.0);
        assert_eq!(body.position.z, 0.0);
    }

    #[test]
    fn test_rise_completes_by_half_progress() {
        let params = climb_params(1.0);
        let mut ctx = MotionContext::new();
        let mut body = FakeBody::new();

        begin(&mut ctx, &mut body, Vec3::new(0.0, 2.0, 0.0));

        for _ in 0..30 {
            step(&params, &mut ctx, &mut body, 1.0 / 60.0);
        }
        // 0.5s in: the vertical rise is essentially done
        assert!((body.position.y - 2.0).abs() < 0.1, "y = {}", body.position.y);
    }

    #[test]
    fn test_glide_blends_by_total_progress() {
        let params = climb_params(1.0);
        let mut ctx = MotionContext::new();
        let mut body = FakeBody::new();

        begin(&mut ctx, &mut body, Vec3::new(0.0, 2.0, 4.0));

        // Jump straight into the glide phase with one 0.75s tick. The origin
        // re-bases to the current column (still at the start), then blends by
        // the raw 0.75 — not the 0.5 a re-based half-phase would give.
        let outcome = step(&params, &mut ctx, &mut body, 0.75);
        assert_eq!(outcome, ClimbStep::Climbing);
        assert_eq!(ctx.ledge_origin, Vec3::new(0.0, 2.0, 0.0));
        assert!((body.position.z - 3.0).abs() < 0.0001, "z = {}", body.position.z);
        assert!((body.position.y - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_origin_rebases_once() {
        let params = climb_params(1.0);
        let mut ctx = MotionContext::new();
        let mut body = FakeBody::new();

        begin(&mut ctx, &mut body, Vec3::new(0.0, 2.0, 4.0));

        step(&params, &mut ctx, &mut body, 0.6);
        let rebased = ctx.ledge_origin;
        assert_eq!(rebased.y, ctx.ledge_target.y);

        step(&params, &mut ctx, &mut body, 0.1);
        assert_eq!(ctx.ledge_origin, rebased, "origin must not re-base again");
    }

    #[test]
    fn test_finishes_exactly_at_target() {
        let params = climb_params(0.5);
        let mut ctx = MotionContext::new();
        let mut body = FakeBody::new();
        let target = Vec3::new(0.3, 2.0, 1.7);

        begin(&mut ctx, &mut body, target);

        let mut ticks = 0;
        loop {
            // A tick rate that does not divide the pull-up time evenly
            let outcome = step(&params, &mut ctx, &mut body, 0.07);
            assert_eq!(body.velocity, Vec3::ZERO, "climb must pin velocity");
            ticks += 1;
            if outcome == ClimbStep::Finished {
                break;
            }
            assert!(ticks < 100);
        }

        assert_eq!(body.position, target);
        assert!(ctx.ledge_progress > params.pull_up_time);
    }

    #[test]
    fn test_level_grab_skips_rebase() {
        // Grabbing a ledge at the current height: the origin already matches
        // the target height, so the glide keeps the starting origin
        let params = climb_params(1.0);
        let mut ctx = MotionContext::new();
        let mut body = FakeBody::new();
        body.position = Vec3::new(0.0, 2.0, 0.0);

        begin(&mut ctx, &mut body, Vec3::new(0.0, 2.0, 4.0));
        step(&params, &mut ctx, &mut body, 0.6);

        assert_eq!(ctx.ledge_origin, Vec3::new(0.0, 2.0, 0.0));
        assert!((body.position.z - 2.4).abs() < 0.0001);
    }
}
