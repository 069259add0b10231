//! Procedural target shapes.
//!
//! [`sample`] turns a [`ShapeKind`] into a flat `[x0, y0, z0, x1, ...]` array
//! of target positions. All shapes are centered near the origin with `y` up.
//!
//! | Shape | Distribution |
//! |-------|--------------|
//! | [`ShapeKind::Sphere`] | uniform in a ball of radius `4·scale` |
//! | [`ShapeKind::Cube`] | uniform in a cube of half-extent `3·scale` |
//! | [`ShapeKind::Heart`] | rejection-sampled solid heart, `3.5·scale` across the unit formula |
//! | [`ShapeKind::Tree`] | solid cone, height `8·scale`, base radius `3.5·scale` |
//! | [`ShapeKind::Spiral`] | index-ordered helix with jitter |
//! | [`ShapeKind::Cat`] | flattened head sphere plus two ear cones |

use crate::error::ConfigError;
use crate::sampler::SampleContext;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Sphere radius in units of `scale`.
pub const SPHERE_RADIUS: f32 = 4.0;
/// Cube half-extent in units of `scale`.
pub const CUBE_HALF_EXTENT: f32 = 3.0;
/// Half-extent of the heart's rejection box, in formula units.
pub const HEART_BOX: f32 = 1.5;
/// Formula-to-world multiplier for the heart, in units of `scale`.
pub const HEART_SIZE: f32 = 3.5;
/// Candidate draws allowed per heart point before falling back to the box center.
pub const HEART_MAX_ATTEMPTS: u32 = 1000;
/// Tree cone height in units of `scale`.
pub const TREE_HEIGHT: f32 = 8.0;
/// Tree cone base radius in units of `scale`.
pub const TREE_RADIUS: f32 = 3.5;

const SPIRAL_TURNS_ANGLE: f32 = 20.0 * PI;
const SPIRAL_RADIUS: f32 = 5.0;
const SPIRAL_JITTER: f32 = 0.5;

const CAT_HEAD_SHARE: f32 = 0.8;
const CAT_HEAD_RADIUS: f32 = 2.5;
const CAT_HEAD_DROP: f32 = 0.5;
const CAT_FACE_DEPTH: f32 = 0.8;
const CAT_EAR_HEIGHT: f32 = 1.5;
const CAT_EAR_RADIUS: f32 = 1.0;
const CAT_EAR_DEPTH: f32 = 0.5;
const CAT_EAR_SPREAD: f32 = 1.2;
const CAT_EAR_RISE: f32 = 1.0;

/// The closed set of target shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere,
    Cube,
    #[default]
    Heart,
    Tree,
    Spiral,
    Cat,
}

impl ShapeKind {
    /// Every shape, in panel order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Heart,
        ShapeKind::Tree,
        ShapeKind::Cat,
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Spiral,
    ];

    /// Lower-case identifier used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Heart => "heart",
            ShapeKind::Tree => "tree",
            ShapeKind::Spiral => "spiral",
            ShapeKind::Cat => "cat",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownShape(s.to_string()))
    }
}

/// Sample `count` target positions for `shape`.
///
/// Returns a flat array of length exactly `count * 3`. `count == 0` yields an
/// empty array.
pub fn sample<R: Rng + ?Sized>(shape: ShapeKind, count: usize, scale: f32, rng: &mut R) -> Vec<f32> {
    let mut out = vec![0.0; count * 3];
    sample_into(shape, scale, &mut out, rng);
    out
}

/// Fill an existing flat position array with samples of `shape`.
///
/// The particle count is `out.len() / 3`; a trailing partial triple is left
/// untouched. Nothing is allocated.
pub fn sample_into<R: Rng + ?Sized>(shape: ShapeKind, scale: f32, out: &mut [f32], rng: &mut R) {
    let count = out.len() / 3;
    let mut ctx = SampleContext::new(rng);
    let mut exhausted = 0usize;

    for (i, slot) in out.chunks_exact_mut(3).enumerate() {
        let p = match shape {
            ShapeKind::Sphere => ctx.random_in_sphere(SPHERE_RADIUS * scale),
            ShapeKind::Cube => ctx.random_in_cube(CUBE_HALF_EXTENT * scale),
            ShapeKind::Heart => match heart_point(&mut ctx) {
                Some(p) => p * (HEART_SIZE * scale),
                None => {
                    exhausted += 1;
                    Vec3::ZERO
                }
            },
            ShapeKind::Tree => tree_point(&mut ctx, scale),
            ShapeKind::Spiral => spiral_point(&mut ctx, i, count, scale),
            ShapeKind::Cat => cat_point(&mut ctx, scale),
        };
        slot.copy_from_slice(&p.to_array());
    }

    if exhausted > 0 {
        tracing::warn!(
            exhausted,
            count,
            "heart rejection sampling hit its attempt cap; points placed at the center"
        );
    }
}

/// Implicit heart function with `y` as height and `z` as depth.
///
/// A point is inside the heart when this is `<= 0`:
/// `(x² + 9/4·z² + y² − 1)³ − x²·y³ − 9/80·z²·y³`.
pub fn heart_implicit(x: f32, y: f32, z: f32) -> f32 {
    let (x2, y2, z2) = (x * x, y * y, z * z);
    let a = x2 + 2.25 * z2 + y2 - 1.0;
    let y3 = y2 * y;
    a * a * a - x2 * y3 - (9.0 / 80.0) * z2 * y3
}

/// One accepted heart point in formula units, or `None` after the attempt cap.
fn heart_point<R: Rng + ?Sized>(ctx: &mut SampleContext<'_, R>) -> Option<Vec3> {
    (0..HEART_MAX_ATTEMPTS).find_map(|_| {
        let p = ctx.random_in_cube(HEART_BOX);
        (heart_implicit(p.x, p.y, p.z) <= 0.0).then_some(p)
    })
}

fn tree_point<R: Rng + ?Sized>(ctx: &mut SampleContext<'_, R>, scale: f32) -> Vec3 {
    let height = TREE_HEIGHT * scale;
    let p = ctx.random_in_cone(height, TREE_RADIUS * scale);
    Vec3::new(p.x, p.y - height / 2.0, p.z)
}

fn spiral_point<R: Rng + ?Sized>(
    ctx: &mut SampleContext<'_, R>,
    index: usize,
    count: usize,
    scale: f32,
) -> Vec3 {
    let progress = index as f32 / count as f32;
    let t = progress * SPIRAL_TURNS_ANGLE;
    let r = progress * SPIRAL_RADIUS * scale;
    let helix = Vec3::new(r * t.cos(), (progress * 10.0 - 5.0) * scale, r * t.sin());
    helix + ctx.random_in_cube(SPIRAL_JITTER)
}

fn cat_point<R: Rng + ?Sized>(ctx: &mut SampleContext<'_, R>, scale: f32) -> Vec3 {
    if ctx.unit() < CAT_HEAD_SHARE {
        let p = ctx.random_in_sphere(CAT_HEAD_RADIUS * scale);
        Vec3::new(p.x, p.y - CAT_HEAD_DROP * scale, p.z * CAT_FACE_DEPTH)
    } else {
        let side = if ctx.coin() { -1.0 } else { 1.0 };
        let ear = ctx.random_in_cone(CAT_EAR_HEIGHT * scale, CAT_EAR_RADIUS * scale);
        Vec3::new(
            ear.x + side * CAT_EAR_SPREAD * scale,
            ear.y + CAT_EAR_RISE * scale,
            ear.z * CAT_EAR_DEPTH,
        )
    }
}
