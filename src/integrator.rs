//! Per-frame position update.
//!
//! Each particle chases its (noise-perturbed) target with a first-order
//! low-pass filter and is pushed away from the pointer when it comes within
//! [`REPEL_RADIUS`]:
//!
//! ```text
//! current += (target + noise - current) * damp + repulsion
//! ```
//!
//! The update runs in place over the flat position arrays and allocates
//! nothing.

use crate::config::ParticleConfig;
use glam::Vec3;

/// Damping at `speed = 0`.
pub const DAMP_MIN: f32 = 0.01;
/// Damping at `speed = 1`.
pub const DAMP_MAX: f32 = 0.1;
/// Noise amplitude per unit of `noise_strength`.
pub const NOISE_SCALE: f32 = 0.05;
/// Distance within which the pointer pushes particles away.
pub const REPEL_RADIUS: f32 = 2.5;
/// Repulsion gain per unit of `speed`.
pub const REPEL_GAIN: f32 = 5.0;
/// Container rotation about the vertical axis, radians per second.
pub const ROTATION_RATE: f32 = 0.05;

/// Tunables read by [`step`], extracted from a [`ParticleConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    /// Morph speed in `[0, 1]`; sets damping and repulsion gain.
    pub speed: f32,
    /// Noise multiplier; amplitude is `noise_strength * NOISE_SCALE`.
    pub noise_strength: f32,
    /// Whether the pointer repels particles.
    pub hover_effect: bool,
}

impl StepParams {
    /// Fraction of the remaining distance closed per frame.
    #[inline]
    pub fn damping(&self) -> f32 {
        damping(self.speed)
    }
}

impl From<&ParticleConfig> for StepParams {
    fn from(config: &ParticleConfig) -> Self {
        Self {
            speed: config.speed,
            noise_strength: config.noise_strength,
            hover_effect: config.hover_effect,
        }
    }
}

/// `lerp(DAMP_MIN, DAMP_MAX, speed)`.
#[inline]
pub fn damping(speed: f32) -> f32 {
    DAMP_MIN + (DAMP_MAX - DAMP_MIN) * speed
}

/// Rotation of the whole cloud about `y` at `elapsed` seconds.
///
/// Applied by the renderer as a container transform, not to particle
/// positions.
#[inline]
pub fn rotation_y(elapsed: f32) -> f32 {
    elapsed * ROTATION_RATE
}

/// Advance every particle one frame.
///
/// `current` and `target` are flat `[x, y, z, ...]` arrays of equal length.
/// `pointer` is the pointer's world position; it is ignored unless
/// `params.hover_effect` is set.
pub fn step(current: &mut [f32], target: &[f32], elapsed: f32, pointer: Option<Vec3>, params: &StepParams) {
    debug_assert_eq!(current.len(), target.len());

    let damp = params.damping();
    let noise_amp = params.noise_strength * NOISE_SCALE;
    let pointer = if params.hover_effect { pointer } else { None };
    let push = REPEL_GAIN * params.speed;

    for (i, (cur, tgt)) in current
        .chunks_exact_mut(3)
        .zip(target.chunks_exact(3))
        .enumerate()
    {
        let ix = (i * 3) as f32;
        let iy = ix + 1.0;
        let iz = ix + 2.0;

        let noise = Vec3::new(
            (elapsed * 2.0 + iy).sin(),
            (elapsed * 1.5 + ix).cos(),
            (elapsed * 1.2 + iz).sin(),
        ) * noise_amp;

        let c = Vec3::from_slice(cur);
        let t = Vec3::from_slice(tgt);

        let force = match pointer {
            Some(p) => repulsion(c - p, push),
            None => Vec3::ZERO,
        };

        let next = c + (t + noise - c) * damp + force;
        cur.copy_from_slice(&next.to_array());
    }
}

/// Displacement for a particle at offset `d` from the pointer.
///
/// Falls off linearly from `gain` at the pointer to zero at
/// [`REPEL_RADIUS`]. A particle exactly on the pointer has no direction to
/// be pushed in and gets none.
#[inline]
fn repulsion(d: Vec3, gain: f32) -> Vec3 {
    let dist_sq = d.length_squared();
    if dist_sq >= REPEL_RADIUS * REPEL_RADIUS || dist_sq <= f32::EPSILON * f32::EPSILON {
        return Vec3::ZERO;
    }
    let dist = dist_sq.sqrt();
    let force = (REPEL_RADIUS - dist) / REPEL_RADIUS;
    d / dist * force * gain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(speed: f32) -> StepParams {
        StepParams {
            speed,
            noise_strength: 0.0,
            hover_effect: false,
        }
    }

    #[test]
    fn test_damping_range() {
        assert!((damping(0.0) - 0.01).abs() < 1e-7);
        assert!((damping(1.0) - 0.1).abs() < 1e-7);
        assert!((damping(0.5) - 0.055).abs() < 1e-7);
    }

    #[test]
    fn test_single_step_closes_damp_fraction() {
        let mut current = [0.0, 0.0, 0.0];
        let target = [10.0, 0.0, 0.0];
        step(&mut current, &target, 0.0, None, &still(1.0));
        assert!((current[0] - 1.0).abs() < 1e-5);
        assert_eq!(current[1], 0.0);
        assert_eq!(current[2], 0.0);
    }

    #[test]
    fn test_repulsion_pushes_away() {
        let d = Vec3::new(1.0, 0.0, 0.0);
        let f = repulsion(d, 5.0);
        assert!(f.x > 0.0);
        assert!((f.x - (2.5 - 1.0) / 2.5 * 5.0).abs() < 1e-5);
        assert_eq!(repulsion(Vec3::new(3.0, 0.0, 0.0), 5.0), Vec3::ZERO);
    }

    #[test]
    fn test_repulsion_at_pointer_is_finite() {
        assert_eq!(repulsion(Vec3::ZERO, 5.0), Vec3::ZERO);
    }

    #[test]
    fn test_pointer_ignored_without_hover() {
        let mut with = [0.5, 0.0, 0.0];
        let mut without = with;
        let target = [0.5, 0.0, 0.0];
        let pointer = Some(Vec3::ZERO);

        let mut params = still(1.0);
        step(&mut without, &target, 0.0, pointer, &params);
        params.hover_effect = true;
        step(&mut with, &target, 0.0, pointer, &params);

        assert_eq!(without[0], 0.5);
        assert!(with[0] > 0.5);
    }

    #[test]
    fn test_noise_is_deterministic() {
        let params = StepParams {
            speed: 0.5,
            noise_strength: 1.0,
            hover_effect: false,
        };
        let target = [1.0; 12];
        let mut a = [0.0; 12];
        let mut b = [0.0; 12];
        step(&mut a, &target, 3.25, None, &params);
        step(&mut b, &target, 3.25, None, &params);
        assert_eq!(a, b);
        // Different particles get different phases.
        assert_ne!(a[0], a[3]);
    }

    #[test]
    fn test_rotation() {
        assert!((rotation_y(20.0) - 1.0).abs() < 1e-6);
    }
}
