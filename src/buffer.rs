//! Particle storage.
//!
//! Three parallel flat arrays, each `count * 3` long:
//!
//! - `current`: where each particle is now; rewritten in place every frame
//! - `target`: where it is heading; re-sampled when the shape or count changes
//! - `colors`: its RGB; re-assigned when the count or either color changes
//!
//! Arrays are only reallocated on a count change. A fresh buffer starts every
//! particle on a wide random scatter so the shape assembles itself on screen.

use crate::color::{assign_colors, assign_colors_into, Color};
use crate::config::ParticleConfig;
use crate::integrator::{self, StepParams};
use crate::shape::{sample, sample_into, ShapeKind};
use glam::Vec3;
use rand::Rng;

/// Scale passed to the shape sampler for targets.
pub const TARGET_SCALE: f32 = 1.5;
/// Scale of the sphere the particles start scattered over.
pub const SCATTER_SCALE: f32 = 10.0;

/// Current positions, targets and colors for one point cloud.
#[derive(Debug, Clone)]
pub struct ParticleBuffer {
    current: Vec<f32>,
    target: Vec<f32>,
    colors: Vec<f32>,
}

impl ParticleBuffer {
    /// Allocate and fill all three arrays for `config`.
    pub fn new<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Self {
        let count = config.count;
        tracing::debug!(count, shape = %config.shape, "allocating particle buffer");
        Self {
            current: sample(ShapeKind::Sphere, count, SCATTER_SCALE, rng),
            target: sample(config.shape, count, TARGET_SCALE, rng),
            colors: assign_colors(count, config.color_a, config.color_b, rng),
        }
    }

    /// Reallocate for a new count. Positions restart from a fresh scatter.
    pub fn resize<R: Rng + ?Sized>(&mut self, config: &ParticleConfig, rng: &mut R) {
        *self = Self::new(config, rng);
    }

    /// Re-sample targets for `shape` in place. Current positions are kept, so
    /// particles morph from wherever they are.
    pub fn retarget<R: Rng + ?Sized>(&mut self, shape: ShapeKind, rng: &mut R) {
        tracing::debug!(count = self.count(), %shape, "resampling targets");
        sample_into(shape, TARGET_SCALE, &mut self.target, rng);
    }

    /// Re-assign colors in place.
    pub fn recolor<R: Rng + ?Sized>(&mut self, a: Color, b: Color, rng: &mut R) {
        tracing::debug!(count = self.count(), %a, %b, "reassigning colors");
        assign_colors_into(a, b, &mut self.colors, rng);
    }

    /// Advance every particle one frame.
    pub fn step(&mut self, elapsed: f32, pointer: Option<Vec3>, params: &StepParams) {
        integrator::step(&mut self.current, &self.target, elapsed, pointer, params);
    }

    /// Number of particles.
    #[inline]
    pub fn count(&self) -> usize {
        self.current.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Current positions, `[x, y, z, ...]`.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.current
    }

    /// Target positions, `[x, y, z, ...]`.
    #[inline]
    pub fn targets(&self) -> &[f32] {
        &self.target
    }

    /// Colors, `[r, g, b, ...]`.
    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Position of particle `index`.
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.current.get(index * 3..index * 3 + 3).map(Vec3::from_slice)
    }
}
