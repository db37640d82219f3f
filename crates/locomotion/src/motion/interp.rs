//! Clamped interpolation helpers.
//!
//! Every blend in the controller clamps its factor to `[0, 1]` before use: a
//! frame delta large enough to push the factor past 1 lands exactly on the
//! target instead of overshooting past it.

use glam::Vec3;

/// Blend `from` toward `to` by a clamped factor.
#[inline]
pub fn blend(from: f32, to: f32, factor: f32) -> f32 {
    from + (to - from) * factor.clamp(0.0, 1.0)
}

/// Blend two points/vectors by a clamped factor.
#[inline]
pub fn blend_vec3(from: Vec3, to: Vec3, factor: f32) -> Vec3 {
    from.lerp(to, factor.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_midpoint() {
        assert_eq!(blend(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_blend_clamps_high_factor() {
        // A huge factor (e.g. from a long frame) lands on the target
        assert_eq!(blend(0.0, 10.0, 3.0), 10.0);
        assert_eq!(blend_vec3(Vec3::ZERO, Vec3::X, 100.0), Vec3::X);
    }

    #[test]
    fn test_blend_clamps_negative_factor() {
        assert_eq!(blend(2.0, 10.0, -1.0), 2.0);
        assert_eq!(blend_vec3(Vec3::Y, Vec3::X, -0.5), Vec3::Y);
    }

    #[test]
    fn test_blend_zero_delta_is_identity() {
        assert_eq!(blend(7.0, 3.0, 0.0), 7.0);
    }
}
