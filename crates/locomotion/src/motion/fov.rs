//! Speed-driven field-of-view feedback.
//!
//! The camera widens with horizontal speed: the ratio of current speed to the
//! configured reference speed picks a target between the resting and maximum
//! field of view, and the camera eases toward it at a fixed rate. Purely
//! cosmetic; runs every tick in every movement mode.

use crate::backend::CameraPivot;

use super::config::MotionParameters;
use super::interp::blend;

/// Easing rate toward the target field of view (1/second).
const FOV_EASE_RATE: f32 = 4.0;

/// Field-of-view easing with the resting value captured at start-up.
#[derive(Debug, Clone, Copy)]
pub struct FovFeedback {
    /// Field of view at zero speed, read from the camera once.
    min_fov: f32,
}

impl FovFeedback {
    /// Capture the camera's starting field of view as the resting value.
    pub fn new(camera: &dyn CameraPivot) -> Self {
        Self {
            min_fov: camera.fov(),
        }
    }

    /// Ease the camera toward the speed-appropriate field of view.
    pub fn update(
        &self,
        params: &MotionParameters,
        camera: &mut dyn CameraPivot,
        horizontal_speed: f32,
        delta: f32,
    ) {
        let ratio = horizontal_speed / params.fov_speed;
        let target = blend(self.min_fov, params.max_fov, ratio);
        camera.set_fov(blend(camera.fov(), target, FOV_EASE_RATE * delta));
    }
}
