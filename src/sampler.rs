//! Random sampling primitives shared by the shape and color samplers.
//!
//! Every draw goes through an explicit generator borrowed by [`SampleContext`],
//! so a seeded [`SmallRng`](rand::rngs::SmallRng) reproduces a point cloud
//! exactly:
//!
//! ```ignore
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut ctx = SampleContext::new(&mut rng);
//! let p = ctx.random_in_sphere(4.0);
//! ```
//!
//! Draws are built from `rng.gen::<f32>()` rather than `gen_range`, so a zero
//! radius or extent collapses the sample onto the anchor instead of panicking
//! on an empty range.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Borrowed generator plus the volumetric sampling helpers built on it.
pub struct SampleContext<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> SampleContext<'r, R> {
    /// Wrap a generator for the duration of one sampling pass.
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }

    // ========== Random primitives ==========

    /// Uniform f32 in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Uniform f32 in `[-half, half)`.
    #[inline]
    pub fn symmetric(&mut self, half: f32) -> f32 {
        (self.unit() - 0.5) * 2.0 * half
    }

    /// Uniform angle in `[0, 2π)`.
    #[inline]
    pub fn angle(&mut self) -> f32 {
        self.unit() * TAU
    }

    /// Fair coin.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }

    // ========== Volume helpers ==========

    /// Uniform point inside a ball of the given radius, centered at origin.
    ///
    /// The polar angle comes from the inverse CDF `acos(2v - 1)` and the radius
    /// from `cbrt(u)`; together they give a volume-uniform distribution instead
    /// of one bunched at the poles or at the surface.
    pub fn random_in_sphere(&mut self, radius: f32) -> Vec3 {
        let theta = self.angle();
        let phi = (2.0 * self.unit() - 1.0).clamp(-1.0, 1.0).acos();
        let r = radius * self.unit().cbrt();
        let sin_phi = phi.sin();

        Vec3::new(
            r * sin_phi * theta.cos(),
            r * sin_phi * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Uniform point inside an axis-aligned cube of the given half-extent.
    pub fn random_in_cube(&mut self, half_extent: f32) -> Vec3 {
        Vec3::new(
            self.symmetric(half_extent),
            self.symmetric(half_extent),
            self.symmetric(half_extent),
        )
    }

    /// Uniform point inside a disk in the XZ plane at y=0.
    pub fn random_in_disk(&mut self, radius: f32) -> Vec3 {
        let angle = self.angle();
        // sqrt for uniform area
        let r = radius * self.unit().sqrt();
        Vec3::new(r * angle.cos(), 0.0, r * angle.sin())
    }

    /// Point inside an upright cone whose base disk sits at y=0.
    ///
    /// Height is drawn uniformly, then a uniform-area disk of the radius at
    /// that height (linear taper to zero at the apex).
    pub fn random_in_cone(&mut self, height: f32, base_radius: f32) -> Vec3 {
        let h = self.unit() * height;
        let taper = if height > 0.0 { 1.0 - h / height } else { 0.0 };
        let disk = self.random_in_disk(taper * base_radius);
        Vec3::new(disk.x, h, disk.z)
    }
}
