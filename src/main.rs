//! Freerun — headless demo run.
//!
//! Drives a scripted parkour line through the runway arena: build speed,
//! jump, steer onto the wall, wall-run, wall-jump, reach for the ledge.
//! State transitions are logged as they happen; run with
//! `RUST_LOG=debug` to see the controller's own transition log too.

use freerun_game::{Arena, RawInput, Simulation, SimulationConfig};

/// Scripted input for the demo line.
fn script(frame: u64) -> RawInput {
    let mut raw = RawInput::default();
    match frame {
        // Build speed down the runway
        0..=89 => {
            raw.forward = true;
        }
        // Jump toward the wall
        90 => {
            raw.forward = true;
            raw.jump = true;
        }
        // Steer into the wall plane and run it
        91..=179 => {
            raw.forward = true;
            raw.right = true;
        }
        // Let go of the wall, then spend the wall jump
        180..=183 => {
            raw.forward = true;
        }
        184 => {
            raw.forward = true;
            raw.jump = true;
        }
        // Reach for the ledge
        _ => {
            raw.forward = true;
            raw.grab = true;
        }
    }
    raw
}

fn main() {
    env_logger::init();

    let mut sim = Simulation::new(SimulationConfig::default(), Arena::runway());
    let mut last_state = sim.state();

    log::info!("starting the runway line");
    for frame in 0..600 {
        sim.tick(&script(frame));

        if sim.state() != last_state {
            let position = sim.position();
            log::info!(
                "frame {frame}: {last_state:?} -> {:?} at ({:.1}, {:.1}, {:.1})",
                sim.state(),
                position.x,
                position.y,
                position.z
            );
            last_state = sim.state();
        }
    }

    let position = sim.position();
    log::info!(
        "run complete: {:?} at ({:.1}, {:.1}, {:.1}), speed {:.1}",
        sim.state(),
        position.x,
        position.y,
        position.z,
        sim.context.active_speed
    );
}
