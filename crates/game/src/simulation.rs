//! Fixed-timestep simulation harness.
//!
//! Wires raw input, the arena, and the locomotion controller into one
//! deterministic loop: one controller tick plus one integration step per
//! frame, at a fixed tick rate.

use freerun_locomotion::{
    CharacterRig, LocomotionController, MotionContext, MotionParameters, MotionState,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::arena::{Arena, ArenaBody, ArenaProbes, Capsule, HeadCamera};
use crate::input::{InputTracker, RawInput};

/// Standing capsule height.
const STANDING_HEIGHT: f32 = 2.0;

/// Resting camera field of view.
const REST_FOV: f32 = 60.0;

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second).
    pub tick_rate: u32,

    /// Downward acceleration applied by the integrator.
    pub gravity: f32,

    /// Mouse sensitivity applied to look input.
    pub mouse_sensitivity: f32,

    /// Movement tuning.
    pub motion: MotionParameters,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            gravity: 20.0,
            mouse_sensitivity: 1.0,
            motion: MotionParameters::default(),
        }
    }
}

impl SimulationConfig {
    /// Time step per tick in seconds.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

/// One character running in one arena.
pub struct Simulation {
    /// Current frame number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Arena geometry.
    pub arena: Arena,

    /// The character's movement state.
    pub context: MotionContext,

    /// The character's body.
    pub body: ArenaBody,

    /// The character's collision capsule.
    pub capsule: Capsule,

    /// The character's head camera.
    pub camera: HeadCamera,

    controller: LocomotionController,
    tracker: InputTracker,
}

impl Simulation {
    /// Create a simulation with the character standing at the arena origin.
    pub fn new(config: SimulationConfig, arena: Arena) -> Self {
        let capsule = Capsule {
            height: STANDING_HEIGHT,
        };
        let camera = HeadCamera::new(REST_FOV);
        let controller = LocomotionController::new(config.motion.clone(), &capsule, &camera);
        let body = ArenaBody::new(Vec3::new(0.0, arena.floor_height, 0.0));

        Self {
            frame: 0,
            config,
            arena,
            context: MotionContext::new(),
            body,
            capsule,
            camera,
            controller,
            tracker: InputTracker::new(),
        }
    }

    /// Default configuration on a flat floor.
    pub fn test() -> Self {
        Self::new(SimulationConfig::default(), Arena::flat())
    }

    /// Advance the simulation by one frame of raw input.
    pub fn tick(&mut self, raw: &RawInput) {
        let delta = self.config.delta_time();
        let input = self.tracker.snapshot(raw, self.config.mouse_sensitivity);

        let probes = ArenaProbes {
            arena: &self.arena,
            position: self.body.position,
        };
        let mut rig = CharacterRig {
            body: &mut self.body,
            collision: &probes,
            volume: &mut self.capsule,
            camera: &mut self.camera,
            animation: None,
        };
        self.controller.update(&mut self.context, &input, &mut rig, delta);

        // The climb script owns the transform while it runs
        if self.context.state != MotionState::LedgeGrab {
            self.body
                .integrate(&self.arena, self.config.gravity, delta);
        }

        self.frame += 1;
    }

    /// The character's current position.
    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// The character's current movement mode.
    pub fn state(&self) -> MotionState {
        self.context.state
    }
}

// ============================================================================
// Tests
// ============================================================================
