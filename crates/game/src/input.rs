//! Raw input handling.
//!
//! Converts raw per-frame key and mouse state into the immutable
//! [`InputSnapshot`] the controller consumes, including the press-edge
//! detection the jump button needs.

use freerun_locomotion::InputSnapshot;
use serde::{Deserialize, Serialize};

/// Raw player input for a single frame, as sampled from the window layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,

    /// Mouse delta this frame (pixels).
    pub mouse_delta: (f32, f32),

    /// Jump key is down (level; the tracker derives the press edge).
    pub jump: bool,

    /// Grab key is down.
    pub grab: bool,

    /// Crouch key is down.
    pub crouch: bool,
}

/// Converts raw input frames into controller snapshots.
///
/// Stateful only for edge detection: a jump press fires on the frame the key
/// goes down and not again until it is released.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    prev_jump: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this tick's snapshot.
    pub fn snapshot(&mut self, raw: &RawInput, mouse_sensitivity: f32) -> InputSnapshot {
        let mut move_x: f32 = 0.0;
        let mut move_y: f32 = 0.0;
        if raw.forward {
            move_y += 1.0;
        }
        if raw.backward {
            move_y -= 1.0;
        }
        if raw.right {
            move_x += 1.0;
        }
        if raw.left {
            move_x -= 1.0;
        }

        // Diagonals must not be faster than straight lines
        let magnitude = (move_x * move_x + move_y * move_y).sqrt();
        if magnitude > 1.0 {
            move_x /= magnitude;
            move_y /= magnitude;
        }

        let jump_pressed = raw.jump && !self.prev_jump;
        self.prev_jump = raw.jump;

        InputSnapshot {
            move_x,
            move_y,
            look_x: raw.mouse_delta.0 * mouse_sensitivity,
            look_y: raw.mouse_delta.1 * mouse_sensitivity,
            jump_pressed,
            grab_held: raw.grab,
            crouch_held: raw.crouch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_is_normalized() {
        let mut tracker = InputTracker::new();
        let raw = RawInput {
            forward: true,
            right: true,
            ..Default::default()
        };

        let snapshot = tracker.snapshot(&raw, 1.0);

        assert!(snapshot.move_y > 0.0 && snapshot.move_y < 1.0);
        assert!(snapshot.move_x > 0.0 && snapshot.move_x < 1.0);
        let magnitude = (snapshot.move_x.powi(2) + snapshot.move_y.powi(2)).sqrt();
        assert!((magnitude - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_straight_movement_not_scaled() {
        let mut tracker = InputTracker::new();
        let raw = RawInput {
            forward: true,
            ..Default::default()
        };

        let snapshot = tracker.snapshot(&raw, 1.0);

        assert_eq!(snapshot.move_y, 1.0);
        assert_eq!(snapshot.move_x, 0.0);
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut tracker = InputTracker::new();
        let raw = RawInput {
            forward: true,
            backward: true,
            ..Default::default()
        };

        let snapshot = tracker.snapshot(&raw, 1.0);
        assert_eq!(snapshot.move_y, 0.0);
        assert!(!snapshot.has_movement());
    }

    #[test]
    fn test_jump_fires_on_press_edge_only() {
        let mut tracker = InputTracker::new();
        let held = RawInput {
            jump: true,
            ..Default::default()
        };
        let released = RawInput::default();

        assert!(tracker.snapshot(&held, 1.0).jump_pressed);

        // Holding the key must not re-fire
        for _ in 0..10 {
            assert!(!tracker.snapshot(&held, 1.0).jump_pressed);
        }

        // Release and press again: fires once more
        tracker.snapshot(&released, 1.0);
        assert!(tracker.snapshot(&held, 1.0).jump_pressed);
    }

    #[test]
    fn test_mouse_sensitivity_scales_look() {
        let mut tracker = InputTracker::new();
        let raw = RawInput {
            mouse_delta: (2.0, -1.0),
            ..Default::default()
        };

        let snapshot = tracker.snapshot(&raw, 0.5);
        assert_eq!(snapshot.look_x, 1.0);
        assert_eq!(snapshot.look_y, -0.5);
    }
}
