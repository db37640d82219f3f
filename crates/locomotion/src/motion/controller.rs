//! The locomotion state machine.
//!
//! One [`LocomotionController::update`] call per fixed step:
//!
//! 1. Look and field-of-view run unconditionally
//! 2. The transition predicates for the tick-start mode are evaluated; a
//!    transition runs its entry side-effects immediately and skips the old
//!    mode's integration for that tick
//! 3. Otherwise the mode's movement integration runs
//! 4. The animation sample goes out, if a sink is attached
//!
//! The controller holds only configuration and start-up captures; everything
//! per-character and mutable lives in the [`MotionContext`] passed in.

use glam::Vec3;

use crate::backend::{AnimationSample, CameraPivot, CharacterRig, CollisionVolume, PhysicsBody};

use super::config::MotionParameters;
use super::crouch;
use super::fov::FovFeedback;
use super::interp::blend_vec3;
use super::ledge::{self, ClimbStep};
use super::speed;
use super::state::{InputSnapshot, MotionContext, MotionState};
use super::turn;
use super::walls;

/// Grace period after losing the floor before the airborne mode commits.
const COYOTE_TIME: f32 = 0.2;

/// Minimum airborne time before floor contact counts as a landing.
const LANDING_GRACE: f32 = 0.25;

/// Dwell timers stop accumulating here.
const DWELL_TIMER_CAP: f32 = 10.0;

/// Seconds after leaving a wall during which the extra jump stays usable.
const WALL_JUMP_WINDOW: f32 = 1.0;

/// Forward boost of a wall jump, as a multiple of `jump_height`.
const WALL_JUMP_FORWARD_BOOST: f32 = 1.25;

/// First-person parkour movement controller.
///
/// Construct once per character configuration; the standing capsule height
/// and the resting field of view are captured from the rig at construction.
///
/// # Example
///
/// ```ignore
/// let controller = LocomotionController::new(params, &volume, &camera);
/// let mut ctx = MotionContext::new();
///
/// // Each fixed step:
/// controller.update(&mut ctx, &input, &mut rig, delta);
/// ```
#[derive(Debug, Clone)]
pub struct LocomotionController {
    params: MotionParameters,
    standing_height: f32,
    fov: FovFeedback,
}

impl LocomotionController {
    /// Create a controller, capturing the standing height and resting field
    /// of view from the rig's current state.
    pub fn new(
        params: MotionParameters,
        volume: &dyn CollisionVolume,
        camera: &dyn CameraPivot,
    ) -> Self {
        Self {
            params,
            standing_height: volume.height(),
            fov: FovFeedback::new(camera),
        }
    }

    /// The active tuning parameters.
    pub fn params(&self) -> &MotionParameters {
        &self.params
    }

    /// Advance one character by one fixed step.
    pub fn update(
        &self,
        ctx: &mut MotionContext,
        input: &InputSnapshot,
        rig: &mut CharacterRig<'_>,
        delta: f32,
    ) {
        // Look and field of view run in every mode, before anything can
        // short-circuit the tick.
        let yaw_rate = self.params.turn_rate(ctx.state);
        turn::apply_yaw(ctx, input.look_x, yaw_rate, delta);
        turn::apply_pitch(&self.params, ctx, &mut *rig.camera, input.look_y, delta);
        let horizontal = speed::horizontal_speed(rig.body.velocity());
        self.fov
            .update(&self.params, &mut *rig.camera, horizontal, delta);

        match ctx.state {
            MotionState::Grounded => self.grounded_tick(ctx, input, rig, delta),
            MotionState::InAir => self.airborne_tick(ctx, input, rig, delta),
            MotionState::OnWalls => self.wall_tick(ctx, input, rig, delta),
            MotionState::LedgeGrab => self.ledge_tick(ctx, rig, delta),
        }

        if let Some(sink) = rig.animation.as_deref_mut() {
            let velocity = rig.body.velocity();
            sink.apply(&AnimationSample {
                state: ctx.state.index(),
                crouching: ctx.crouching,
                lateral_velocity: velocity.dot(ctx.right()),
                forward_velocity: velocity.dot(ctx.forward()),
                vertical_velocity: velocity.y,
                lateral_input: input.move_x,
            });
        }
    }

    // ========================================================================
    // Grounded
    // ========================================================================

    fn grounded_tick(
        &self,
        ctx: &mut MotionContext,
        input: &InputSnapshot,
        rig: &mut CharacterRig<'_>,
        delta: f32,
    ) {
        // Being grounded revokes any leftover wall jump
        ctx.wall_jump_charges = 0;

        // Jump wins over everything else this tick
        if input.jump_pressed {
            self.jump_up(ctx, &mut *rig.body, &mut *rig.volume);
            return;
        }

        // Coyote time: losing the floor only commits after a grace period
        if rig.collision.check_floor(-Vec3::Y) {
            ctx.airborne_timer = 0.0;
        } else if ctx.airborne_timer < COYOTE_TIME {
            ctx.airborne_timer += delta;
        } else {
            self.enter_airborne(ctx, &mut *rig.volume);
            return;
        }

        if ctx.grounded_timer < DWELL_TIMER_CAP {
            ctx.grounded_timer += delta;
        }

        speed::smooth(&self.params, ctx, input, delta);
        self.ground_move(ctx, input, &mut *rig.body, delta);

        if input.crouch_held {
            if !ctx.crouching {
                crouch::start(&self.params, ctx, &mut *rig.body, &mut *rig.volume);
            }
        } else if ctx.crouching && !rig.collision.check_roof(Vec3::Y) {
            crouch::release(ctx, &mut *rig.volume, self.standing_height);
        }

        crouch::ramp_adjustment(&self.params, ctx, delta);
    }

    fn ground_move(
        &self,
        ctx: &MotionContext,
        input: &InputSnapshot,
        body: &mut dyn PhysicsBody,
        delta: f32,
    ) {
        let rate = self.params.direction_control * ctx.adjustment_factor * delta;
        self.steer(ctx, input, body, rate);
    }

    fn jump_up(
        &self,
        ctx: &mut MotionContext,
        body: &mut dyn PhysicsBody,
        volume: &mut dyn CollisionVolume,
    ) {
        // Kill any vertical velocity first so jump impulses never stack
        let mut velocity = body.velocity();
        velocity.y = 0.0;
        body.set_velocity(velocity);
        body.apply_impulse(Vec3::Y * self.params.jump_height);

        self.enter_airborne(ctx, volume);
    }

    // ========================================================================
    // Airborne
    // ========================================================================

    fn airborne_tick(
        &self,
        ctx: &mut MotionContext,
        input: &InputSnapshot,
        rig: &mut CharacterRig<'_>,
        delta: f32,
    ) {
        if input.grab_held {
            if let Some(point) = rig.collision.check_ledges() {
                self.enter_ledge_grab(ctx, &mut *rig.body, point);
                return;
            }
        }

        if walls::eligible(&self.params, ctx, input, rig.collision)
            && ctx.airborne_timer > self.params.time_before_wall_run
        {
            self.enter_wall_run(ctx);
            return;
        }

        if rig.collision.check_floor(-Vec3::Y) && ctx.airborne_timer > LANDING_GRACE {
            self.enter_grounded(ctx, &*rig.body);
            return;
        }

        // The extra jump earned on a wall, usable only inside its window
        if ctx.wall_jump_cooldown > 0.0 {
            if ctx.wall_jump_charges > 0 && input.jump_pressed {
                self.wall_jump(ctx, &mut *rig.body, &mut *rig.volume);
            }
            ctx.wall_jump_cooldown = (ctx.wall_jump_cooldown - delta).max(0.0);
        }

        if ctx.airborne_timer < DWELL_TIMER_CAP {
            ctx.airborne_timer += delta;
        }

        self.air_move(ctx, input, &mut *rig.body, delta);
    }

    fn air_move(
        &self,
        ctx: &MotionContext,
        input: &InputSnapshot,
        body: &mut dyn PhysicsBody,
        delta: f32,
    ) {
        // Slide recovery does not limit air control
        let rate = self.params.in_air_control * delta;
        self.steer(ctx, input, body, rate);
    }

    fn wall_jump(
        &self,
        ctx: &mut MotionContext,
        body: &mut dyn PhysicsBody,
        volume: &mut dyn CollisionVolume,
    ) {
        let mut velocity = body.velocity();
        velocity.y = 0.0;
        body.set_velocity(velocity);
        body.apply_impulse(
            Vec3::Y * self.params.jump_height
                + ctx.forward() * WALL_JUMP_FORWARD_BOOST * self.params.jump_height,
        );

        ctx.wall_jump_charges = 0;
        self.enter_airborne(ctx, volume);
    }

    // ========================================================================
    // Wall running
    // ========================================================================

    fn wall_tick(
        &self,
        ctx: &mut MotionContext,
        input: &InputSnapshot,
        rig: &mut CharacterRig<'_>,
        delta: f32,
    ) {
        if input.grab_held {
            if let Some(point) = rig.collision.check_ledges() {
                self.enter_ledge_grab(ctx, &mut *rig.body, point);
                return;
            }
        }

        // Losing the wall (or exhausting the budget) drops to airborne with
        // no further side-effects
        if !walls::eligible(&self.params, ctx, input, rig.collision) {
            ctx.state = MotionState::InAir;
            log::debug!("state -> InAir (wall lost)");
            return;
        }

        if rig.collision.check_floor(-Vec3::Y) {
            self.enter_grounded(ctx, &*rig.body);
            return;
        }

        ctx.wall_jump_charges = 1;
        ctx.wall_jump_cooldown = WALL_JUMP_WINDOW;
        ctx.wall_run_elapsed += delta;
        log::trace!("wall run elapsed {:.2}s", ctx.wall_run_elapsed);

        let target = walls::target_velocity(&self.params, ctx, input.move_y);
        let body = &mut *rig.body;
        body.set_velocity(blend_vec3(
            body.velocity(),
            target,
            self.params.wall_run_speed_acceleration * delta,
        ));
    }

    // ========================================================================
    // Ledge climbing
    // ========================================================================

    fn ledge_tick(&self, ctx: &mut MotionContext, rig: &mut CharacterRig<'_>, delta: f32) {
        match ledge::step(&self.params, ctx, &mut *rig.body, delta) {
            ClimbStep::Climbing => {}
            ClimbStep::Finished => self.enter_grounded(ctx, &*rig.body),
        }
    }

    // ========================================================================
    // Entry side-effects
    // ========================================================================

    fn enter_airborne(&self, ctx: &mut MotionContext, volume: &mut dyn CollisionVolume) {
        // Crouching is not available in the air
        crouch::release(ctx, volume, self.standing_height);
        ctx.grounded_timer = 0.0;
        ctx.state = MotionState::InAir;
        log::debug!("state -> InAir");
    }

    fn enter_grounded(&self, ctx: &mut MotionContext, body: &dyn PhysicsBody) {
        speed::carry_momentum(ctx, body.velocity());
        ctx.wall_run_elapsed = 0.0;
        ctx.airborne_timer = 0.0;
        ctx.state = MotionState::Grounded;
        log::debug!("state -> Grounded at speed {:.2}", ctx.active_speed);
    }

    fn enter_wall_run(&self, ctx: &mut MotionContext) {
        ctx.grounded_timer = 0.0;
        ctx.airborne_timer = 0.0;
        ctx.state = MotionState::OnWalls;
        log::debug!("state -> OnWalls");
    }

    fn enter_ledge_grab(&self, ctx: &mut MotionContext, body: &mut dyn PhysicsBody, target: Vec3) {
        ledge::begin(ctx, body, target);
        ctx.state = MotionState::LedgeGrab;
        log::debug!("state -> LedgeGrab toward {target}");
    }

    // ========================================================================
    // Steering
    // ========================================================================

    /// Blend velocity toward the input direction scaled by the active speed,
    /// leaving the vertical component to gravity.
    fn steer(
        &self,
        ctx: &MotionContext,
        input: &InputSnapshot,
        body: &mut dyn PhysicsBody,
        rate: f32,
    ) {
        let direction = if input.has_movement() {
            (ctx.forward() * input.move_y + ctx.right() * input.move_x).normalize_or_zero()
        } else {
            // Keep the heading of whatever momentum is left
            body.velocity().normalize_or_zero()
        };

        let mut desired = direction * ctx.active_speed;
        desired.y = body.velocity().y;

        body.set_velocity(blend_vec3(body.velocity(), desired, rate));
    }
}

// ============================================================================
// Tests
// ============================================================================
