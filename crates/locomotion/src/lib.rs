//! Freerun Locomotion
//!
//! An engine-agnostic first-person parkour movement controller. One tick per
//! fixed physics step converts directional/jump/crouch/grab input into
//! velocity and impulse changes on an injected physics body, across four
//! movement modes: running, airborne, wall-running, and ledge-climbing.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **Backend**: capability traits for the engine-owned pieces the controller
//!   drives (physics body, collision queries, collision volume, camera pivot,
//!   animation sink). Any engine that can answer these can host the controller.
//! - **Motion**: the controller itself — a mode state machine plus the
//!   per-mode integration math, all operating on one [`MotionContext`] value.
//!
//! # Design Principles
//!
//! 1. **Determinism**: the same input sequence always produces the same state
//! 2. **No hidden services**: input arrives as an immutable snapshot, engine
//!    hooks are borrowed per tick
//! 3. **Stability**: every blend factor is clamped, so arbitrary frame deltas
//!    settle instead of overshooting

pub mod backend;
pub mod motion;

// Re-export commonly used types
pub use backend::{
    AnimationSample, AnimationSink, CameraPivot, CharacterRig, CollisionQuery, CollisionVolume,
    NoOpAnimationSink, PhysicsBody,
};
pub use motion::{
    InputSnapshot, LocomotionController, MotionContext, MotionParameters, MotionState,
};
