//! # shapecloud
//!
//! A point cloud that morphs between procedural shapes and shies away from
//! the pointer.
//!
//! The crate is the CPU side of the effect: it samples target positions for
//! every particle, assigns colors, and advances positions once per frame. A
//! renderer only has to draw two flat `f32` arrays (positions and colors)
//! rotated by an angle about `y`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shapecloud::prelude::*;
//!
//! let mut engine = FrameOrchestrator::new(ParticleConfig {
//!     shape: ShapeKind::Tree,
//!     count: 20_000,
//!     ..Default::default()
//! })?;
//!
//! // every display refresh:
//! let pointer = pointer.world(viewport, engine.config().hover_effect);
//! let frame = engine.advance(pointer);
//! renderer.draw(frame.positions, frame.colors, frame.rotation_y);
//!
//! // switching shape takes effect on the next frame:
//! engine.submit(ParticleConfig { shape: ShapeKind::Heart, ..engine.config().clone() })?;
//! ```
//!
//! ## Pieces
//!
//! | Module | Role |
//! |--------|------|
//! | [`shape`] | target positions for each [`ShapeKind`] |
//! | [`color`] | per-particle random blend of two colors |
//! | [`buffer`] | current / target / color arrays |
//! | [`integrator`] | damped chase + noise + pointer repulsion |
//! | [`frame`] | per-frame orchestration and the renderer seam |
//! | [`config`] | validated configuration, JSON, presets |
//!
//! ## Randomness
//!
//! Nothing reads a global RNG. Samplers take `&mut impl Rng`, and
//! [`FrameOrchestrator::with_seed`] makes a whole run reproducible.

pub mod buffer;
pub mod color;
pub mod config;
mod error;
pub mod frame;
pub mod input;
pub mod integrator;
pub mod sampler;
pub mod shape;
pub mod time;

pub use buffer::ParticleBuffer;
pub use bytemuck;
pub use color::{assign_colors, Color};
pub use config::{ConfigDelta, ParticleConfig, Preset, PRESETS};
pub use error::{ColorParseError, ConfigError};
pub use frame::{Frame, FrameOrchestrator, FrameSink, FrameUniforms};
pub use glam::{Vec2, Vec3};
pub use input::{Pointer, Viewport};
pub use integrator::StepParams;
pub use shape::{sample, ShapeKind};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use shapecloud::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::{preset, ParticleConfig};
    pub use crate::error::ConfigError;
    pub use crate::frame::{Frame, FrameOrchestrator, FrameSink};
    pub use crate::input::{Pointer, Viewport};
    pub use crate::shape::ShapeKind;
    pub use glam::{Vec2, Vec3};
}
