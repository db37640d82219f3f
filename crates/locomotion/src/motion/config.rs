//! Movement tuning parameters.
//!
//! Every tunable the controller reads is grouped here. Defaults are the
//! shipped parkour feel; the presets give alternative handling profiles.

use serde::{Deserialize, Serialize};

use super::state::MotionState;

/// Tuning parameters for the locomotion controller.
///
/// Speeds are units/second, accelerations are blend rates (1/second), angles
/// are degrees, times are seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionParameters {
    // ========================================================================
    // Running
    // ========================================================================
    /// Top forward running speed.
    pub max_speed: f32,

    /// Top backpedal speed.
    pub backwards_speed: f32,

    /// Speed build-up rate while there is movement input.
    pub acceleration: f32,

    /// Speed bleed-off rate with no movement input.
    pub deceleration: f32,

    /// How strongly velocity is steered toward the desired direction on the
    /// ground.
    pub direction_control: f32,

    /// How strongly velocity is steered while airborne.
    pub in_air_control: f32,

    // ========================================================================
    // Turning
    // ========================================================================
    /// Yaw rate on the ground (degrees/second per unit of look input).
    pub turn_speed: f32,

    /// Yaw rate while airborne.
    pub turn_speed_in_air: f32,

    /// Yaw rate while wall-running.
    pub turn_speed_on_walls: f32,

    /// Pitch rate (degrees/second per unit of look input).
    pub look_up_speed: f32,

    /// Lowest allowed pitch (degrees).
    pub min_look_angle: f32,

    /// Highest allowed pitch (degrees).
    pub max_look_angle: f32,

    // ========================================================================
    // Jumping
    // ========================================================================
    /// Upward impulse applied by a jump.
    pub jump_height: f32,

    // ========================================================================
    // Wall running
    // ========================================================================
    /// Total wall-run time available between groundings.
    pub wall_run_time: f32,

    /// Airborne time required before a wall run may start.
    pub time_before_wall_run: f32,

    /// Vertical speed gained per unit of forward input on a wall.
    pub wall_run_upwards_movement: f32,

    /// How quickly velocity converges onto the wall-run path.
    pub wall_run_speed_acceleration: f32,

    // ========================================================================
    // Crouching and sliding
    // ========================================================================
    /// Target speed while crouched.
    pub crouch_speed: f32,

    /// Capsule height while crouched.
    pub crouch_height: f32,

    /// Forward impulse applied when a crouch triggers a slide.
    pub slide_impulse: f32,

    /// Speed above which crouching triggers a slide.
    pub slide_speed_limit: f32,

    /// How quickly steering authority returns after a slide (1/second).
    pub slide_control: f32,

    // ========================================================================
    // Ledge climbing
    // ========================================================================
    /// Time a ledge pull-up takes.
    pub pull_up_time: f32,

    // ========================================================================
    // Field of view
    // ========================================================================
    /// Field of view reached at `fov_speed`.
    pub max_fov: f32,

    /// Horizontal speed at which the field of view maxes out.
    pub fov_speed: f32,
}

impl Default for MotionParameters {
    fn default() -> Self {
        Self {
            // Running
            max_speed: 14.0,
            backwards_speed: 6.0,
            acceleration: 4.0,
            deceleration: 2.5,
            direction_control: 8.0,
            in_air_control: 2.0,

            // Turning
            turn_speed: 180.0,
            turn_speed_in_air: 120.0,
            turn_speed_on_walls: 90.0,
            look_up_speed: 120.0,
            min_look_angle: -30.0,
            max_look_angle: 65.0,

            // Jumping
            jump_height: 8.0,

            // Wall running
            wall_run_time: 2.0,
            time_before_wall_run: 0.2,
            wall_run_upwards_movement: 2.0,
            wall_run_speed_acceleration: 2.0,

            // Crouching and sliding
            crouch_speed: 10.0,
            crouch_height: 1.5,
            slide_impulse: 12.0,
            slide_speed_limit: 12.0,
            slide_control: 0.8,

            // Ledge climbing
            pull_up_time: 0.5,

            // Field of view
            max_fov: 90.0,
            fov_speed: 18.0,
        }
    }
}

impl MotionParameters {
    /// A twitchier profile: faster build-up, more air authority, longer wall
    /// runs.
    pub fn parkour() -> Self {
        Self {
            max_speed: 16.0,
            acceleration: 6.0,
            in_air_control: 3.5,
            wall_run_time: 3.0,
            wall_run_upwards_movement: 2.5,
            slide_speed_limit: 10.0,
            ..Default::default()
        }
    }

    /// A weightier profile: slower build-up, little air authority, short wall
    /// runs.
    pub fn heavy() -> Self {
        Self {
            max_speed: 11.0,
            backwards_speed: 4.5,
            acceleration: 2.5,
            deceleration: 4.0,
            in_air_control: 1.0,
            wall_run_time: 1.2,
            jump_height: 6.5,
            slide_impulse: 8.0,
            ..Default::default()
        }
    }

    /// Yaw rate for the given movement mode.
    ///
    /// Ledge climbs turn at the airborne rate.
    pub fn turn_rate(&self, state: MotionState) -> f32 {
        match state {
            MotionState::Grounded => self.turn_speed,
            MotionState::InAir | MotionState::LedgeGrab => self.turn_speed_in_air,
            MotionState::OnWalls => self.turn_speed_on_walls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = MotionParameters::default();
        assert!(params.max_speed > params.backwards_speed);
        assert!(params.acceleration > 0.0);
        assert!(params.min_look_angle < params.max_look_angle);
        assert!(params.wall_run_time > 0.0);
    }

    #[test]
    fn test_presets_differ() {
        let default = MotionParameters::default();
        let parkour = MotionParameters::parkour();
        let heavy = MotionParameters::heavy();

        assert!(parkour.max_speed > default.max_speed);
        assert!(heavy.max_speed < default.max_speed);
        assert!(parkour.wall_run_time > heavy.wall_run_time);
    }

    #[test]
    fn test_turn_rate_per_state() {
        let params = MotionParameters::default();

        assert_eq!(params.turn_rate(MotionState::Grounded), params.turn_speed);
        assert_eq!(params.turn_rate(MotionState::InAir), params.turn_speed_in_air);
        assert_eq!(params.turn_rate(MotionState::OnWalls), params.turn_speed_on_walls);
        assert_eq!(
            params.turn_rate(MotionState::LedgeGrab),
            params.turn_speed_in_air
        );
    }
}
