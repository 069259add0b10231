//! Pointer input.
//!
//! The windowing layer reports the pointer in normalized device coordinates
//! (`-1..1` on both axes, `+y` up). The engine wants a world position, which
//! is taken on the `z = 0` plane the cloud is centered on:
//!
//! ```ignore
//! let viewport = Viewport::new(16.0, 9.0);
//! let mut pointer = Pointer::default();
//! pointer.move_to(Vec2::new(0.5, -0.5));
//! let world = pointer.world(viewport, config.hover_effect); // Some((4.0, -2.25, 0.0))
//! ```

use glam::{Vec2, Vec3};

/// Visible extent of the `z = 0` plane, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent of the `z = 0` plane seen by a perspective camera.
    ///
    /// * `fov_y` - vertical field of view in radians
    /// * `distance` - camera distance from the plane
    /// * `aspect` - width / height
    pub fn from_camera(fov_y: f32, distance: f32, aspect: f32) -> Self {
        let height = 2.0 * distance * (fov_y / 2.0).tan();
        Self::new(height * aspect, height)
    }
}

/// Map a normalized device coordinate onto the `z = 0` plane.
#[inline]
pub fn pointer_to_world(ndc: Vec2, viewport: Viewport) -> Vec3 {
    Vec3::new(ndc.x * viewport.width / 2.0, ndc.y * viewport.height / 2.0, 0.0)
}

/// Last known pointer state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
    /// Not over the surface (or never seen).
    #[default]
    Absent,
    /// Over the surface at this NDC position.
    Ndc(Vec2),
}

impl Pointer {
    /// Record a pointer move.
    pub fn move_to(&mut self, ndc: Vec2) {
        *self = Pointer::Ndc(ndc);
    }

    /// Record the pointer leaving the surface.
    pub fn leave(&mut self) {
        *self = Pointer::Absent;
    }

    /// Convert a window-space pixel position to NDC and record it.
    pub fn move_to_pixel(&mut self, x: f32, y: f32, window_width: f32, window_height: f32) {
        if window_width <= 0.0 || window_height <= 0.0 {
            return;
        }
        self.move_to(Vec2::new(
            (x / window_width) * 2.0 - 1.0,
            1.0 - (y / window_height) * 2.0,
        ));
    }

    /// World position for the integrator.
    ///
    /// `None` when the pointer is absent or hover repulsion is off, so the
    /// integrator treats it as infinitely far away.
    pub fn world(&self, viewport: Viewport, hover_effect: bool) -> Option<Vec3> {
        match self {
            Pointer::Ndc(ndc) if hover_effect => Some(pointer_to_world(*ndc, viewport)),
            _ => None,
        }
    }
}
