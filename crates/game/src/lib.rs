//! Freerun game layer.
//!
//! Everything between raw input and the locomotion controller:
//!
//! - Raw key/mouse state converted into per-tick input snapshots
//! - A deliberately simple arena implementing the controller's backend traits
//! - A fixed-timestep simulation that wires the two together
//!
//! The simulation is deterministic: the same input sequence always produces
//! the same run.

pub mod arena;
pub mod input;
pub mod simulation;

// Re-export main types
pub use arena::{Arena, ArenaBody, ArenaProbes, Capsule, HeadCamera};
pub use input::{InputTracker, RawInput};
pub use simulation::{Simulation, SimulationConfig};

// Re-export controller types for convenience
pub use freerun_locomotion::{
    InputSnapshot, LocomotionController, MotionContext, MotionParameters, MotionState,
};
