//! Geometry tests for the shape and color samplers.
//!
//! Every point a sampler emits must satisfy its shape's membership rule, and
//! output lengths must always be exactly `count * 3`.

use glam::Vec3;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shapecloud::color::assign_colors;
use shapecloud::shape::{heart_implicit, sample, HEART_SIZE};
use shapecloud::{Color, ShapeKind};

const EPS: f32 = 1e-4;

fn points(shape: ShapeKind, count: usize, scale: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = SmallRng::seed_from_u64(seed);
    sample(shape, count, scale, &mut rng)
        .chunks_exact(3)
        .map(Vec3::from_slice)
        .collect()
}

/// Inside an upright cone with its base center at `base`.
fn in_cone(p: Vec3, base: Vec3, height: f32, radius: f32, depth_squash: f32) -> bool {
    let local = p - base;
    if local.y < -EPS || local.y > height + EPS {
        return false;
    }
    let z = local.z / depth_squash;
    let radial = (local.x * local.x + z * z).sqrt();
    radial <= (1.0 - local.y / height) * radius + EPS
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_sphere_points_inside_ball() {
    for scale in [0.5, 1.0, 1.5] {
        for p in points(ShapeKind::Sphere, 5000, scale, 1) {
            assert!(p.length() <= 4.0 * scale + EPS, "{p} outside ball");
        }
    }
}

#[test]
fn test_cube_points_inside_cube() {
    for p in points(ShapeKind::Cube, 5000, 2.0, 2) {
        assert!(p.abs().max_element() <= 6.0, "{p} outside cube");
    }
}

#[test]
fn test_heart_points_satisfy_implicit() {
    let scale = 1.5;
    for p in points(ShapeKind::Heart, 5000, scale, 3) {
        let q = p / (HEART_SIZE * scale);
        assert!(heart_implicit(q.x, q.y, q.z) <= EPS, "{p} outside heart");
    }
}

#[test]
fn test_tree_points_inside_cone() {
    let base = Vec3::new(0.0, -4.0, 0.0);
    for p in points(ShapeKind::Tree, 5000, 1.0, 4) {
        assert!(in_cone(p, base, 8.0, 3.5, 1.0), "{p} outside tree");
    }
}

#[test]
fn test_cat_points_inside_head_or_ears() {
    let s = 1.0;
    for p in points(ShapeKind::Cat, 10_000, s, 5) {
        let head = Vec3::new(p.x, p.y + 0.5 * s, p.z / 0.8);
        let in_head = head.length() <= 2.5 * s + EPS;
        let left = in_cone(p, Vec3::new(-1.2 * s, 1.0 * s, 0.0), 1.5 * s, 1.0 * s, 0.5);
        let right = in_cone(p, Vec3::new(1.2 * s, 1.0 * s, 0.0), 1.5 * s, 1.0 * s, 0.5);
        assert!(in_head || left || right, "{p} outside cat");
    }
}

#[test]
fn test_spiral_points_near_helix() {
    let count = 2000;
    for (i, p) in points(ShapeKind::Spiral, count, 1.0, 6).into_iter().enumerate() {
        let progress = i as f32 / count as f32;
        let t = progress * 20.0 * std::f32::consts::PI;
        let r = progress * 5.0;
        let helix = Vec3::new(r * t.cos(), progress * 10.0 - 5.0, r * t.sin());
        assert!((p - helix).abs().max_element() <= 0.5 + EPS);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_six_cube_points_then_empty() {
    let pts = points(ShapeKind::Cube, 6, 1.0, 7);
    assert_eq!(pts.len(), 6);
    for p in pts {
        assert!(p.abs().max_element() <= 3.0);
    }

    let mut rng = SmallRng::seed_from_u64(7);
    assert!(sample(ShapeKind::Cube, 0, 1.0, &mut rng).is_empty());
}

#[test]
fn test_tree_tapers_linearly() {
    let pts = points(ShapeKind::Tree, 10_000, 1.0, 8);
    let max_radius = |lo: f32, hi: f32| {
        pts.iter()
            .filter(|p| p.y >= lo && p.y < hi)
            .map(|p| (p.x * p.x + p.z * p.z).sqrt())
            .fold(0.0f32, f32::max)
    };

    let base = max_radius(-4.0, -3.6);
    assert!(base > 3.0 && base <= 3.5 + EPS, "base radius {base}");

    let apex = max_radius(3.6, 4.0);
    assert!(apex < 0.2, "apex radius {apex}");

    let middle = max_radius(-0.2, 0.2);
    assert!(middle > 1.5 && middle <= 1.75 + 0.1, "middle radius {middle}");
}

#[test]
fn test_lengths_for_documented_counts() {
    let mut rng = SmallRng::seed_from_u64(9);
    for shape in ShapeKind::ALL {
        for count in [0, 1, 1000, 60_000] {
            assert_eq!(sample(shape, count, 1.5, &mut rng).len(), count * 3);
        }
    }
}

#[test]
fn test_every_sample_is_finite() {
    let mut rng = SmallRng::seed_from_u64(10);
    for shape in ShapeKind::ALL {
        assert!(sample(shape, 2000, 1.5, &mut rng).iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    for shape in ShapeKind::ALL {
        assert_eq!(points(shape, 100, 1.0, 42), points(shape, 100, 1.0, 42));
    }
}

// ============================================================================
// Properties
// ============================================================================

fn any_shape() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

fn any_channel() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn any_color() -> impl Strategy<Value = Color> {
    (any_channel(), any_channel(), any_channel()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

proptest! {
    #[test]
    fn prop_sample_length(shape in any_shape(), count in 0usize..2000, scale in 0.0f32..3.0, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        prop_assert_eq!(sample(shape, count, scale, &mut rng).len(), count * 3);
    }

    #[test]
    fn prop_colors_stay_between_endpoints(a in any_color(), b in any_color(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let colors = assign_colors(200, a, b, &mut rng);
        prop_assert_eq!(colors.len(), 600);
        let ends = [(a.r, b.r), (a.g, b.g), (a.b, b.b)];
        for c in colors.chunks_exact(3) {
            for (value, (x, y)) in c.iter().zip(ends) {
                prop_assert!(*value >= x.min(y) && *value <= x.max(y));
            }
        }
    }
}
