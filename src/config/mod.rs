//! Particle configuration.
//!
//! [`ParticleConfig`] is the single value the outside world hands to the
//! engine. It is validated here, at the boundary, so the per-frame path never
//! sees a zero count, an unknown shape, or a color outside `[0, 1]`.
//!
//! Configurations serialize to JSON with the same keys the control panel
//! uses:
//!
//! ```json
//! {
//!   "count": 25000,
//!   "shape": "heart",
//!   "colorA": "#ff0066",
//!   "colorB": "#5500ff",
//!   "particleSize": 0.05,
//!   "speed": 0.5,
//!   "noiseStrength": 0.5,
//!   "hoverEffect": true
//! }
//! ```

mod presets;

use crate::color::Color;
use crate::error::ConfigError;
use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use presets::{preset, Preset, PRESETS};

/// Smallest accepted particle count.
pub const MIN_PARTICLES: usize = 1;
/// Largest particle count that still fits a frame budget.
pub const MAX_PARTICLES: usize = 60_000;
/// Upper bound on `noise_strength`.
pub const MAX_NOISE: f32 = 2.0;

/// Everything that shapes the point cloud.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    /// Number of particles.
    pub count: usize,
    /// Target shape.
    pub shape: ShapeKind,
    /// First endpoint of the color blend.
    pub color_a: Color,
    /// Second endpoint of the color blend.
    pub color_b: Color,
    /// Point size; only the renderer reads this.
    pub particle_size: f32,
    /// Response speed in `(0, 1]`. Drives damping and repulsion strength.
    pub speed: f32,
    /// Amplitude of the floating jitter.
    pub noise_strength: f32,
    /// Whether the pointer repels particles.
    pub hover_effect: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 25_000,
            shape: ShapeKind::Heart,
            color_a: Color::rgb(1.0, 0.0, 0.4),
            color_b: Color::rgb(1.0 / 3.0, 0.0, 1.0),
            particle_size: 0.05,
            speed: 0.5,
            noise_strength: 0.5,
            hover_effect: true,
        }
    }
}

impl ParticleConfig {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count < MIN_PARTICLES {
            return Err(ConfigError::ZeroCount);
        }
        if self.count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                count: self.count,
                max: MAX_PARTICLES,
            });
        }
        if !(self.speed.is_finite() && self.speed > 0.0 && self.speed <= 1.0) {
            return Err(ConfigError::Speed(self.speed));
        }
        if !(self.noise_strength.is_finite() && (0.0..=MAX_NOISE).contains(&self.noise_strength)) {
            return Err(ConfigError::Noise(self.noise_strength));
        }
        if !(self.particle_size.is_finite() && self.particle_size > 0.0) {
            return Err(ConfigError::ParticleSize(self.particle_size));
        }
        for (which, color) in [("colorA", self.color_a), ("colorB", self.color_b)] {
            if !color.is_valid() {
                return Err(ConfigError::ColorOutOfRange {
                    which,
                    color: format!("({}, {}, {})", color.r, color.g, color.b),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Which buffers a configuration change invalidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigDelta {
    /// Count changed: every array is reallocated and positions re-scattered.
    pub resize: bool,
    /// Target positions must be re-sampled.
    pub retarget: bool,
    /// Colors must be re-assigned.
    pub recolor: bool,
}

impl ConfigDelta {
    pub fn between(old: &ParticleConfig, new: &ParticleConfig) -> Self {
        let resize = old.count != new.count;
        Self {
            resize,
            retarget: resize || old.shape != new.shape,
            recolor: resize || old.color_a != new.color_a || old.color_b != new.color_b,
        }
    }

    /// Nothing to regenerate; only per-frame tunables changed, if anything.
    pub fn is_empty(&self) -> bool {
        !(self.resize || self.retarget || self.recolor)
    }
}
