//! Frame orchestration.
//!
//! [`FrameOrchestrator`] is the one object a host loop talks to. Once per
//! display refresh it:
//!
//! 1. applies any configuration submitted since the last frame,
//! 2. ticks the clock,
//! 3. runs exactly one integrator step,
//! 4. hands a read-only [`Frame`] to the renderer.
//!
//! Configuration changes are only ever applied at step 1, so a renderer never
//! sees a half-updated buffer.
//!
//! ```ignore
//! let mut engine = FrameOrchestrator::new(ParticleConfig::default())?;
//! loop {
//!     let pointer = input.world(viewport, engine.config().hover_effect);
//!     engine.render(&mut renderer, pointer)?;
//! }
//! ```

use crate::buffer::ParticleBuffer;
use crate::config::{ConfigDelta, ParticleConfig};
use crate::error::ConfigError;
use crate::integrator::{self, StepParams};
use crate::time::FrameClock;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// What the renderer gets each frame. Borrowed from the orchestrator and
/// valid until the next call that mutates it.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Flat `[x, y, z, ...]`, one triple per particle.
    pub positions: &'a [f32],
    /// Flat `[r, g, b, ...]`, channels in `[0, 1]`.
    pub colors: &'a [f32],
    /// Number of particles; both slices hold `count * 3` floats.
    pub count: usize,
    /// Container rotation about `y`, radians.
    pub rotation_y: f32,
    /// Point sprite size in world units.
    pub particle_size: f32,
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Frames stepped so far, counting both `advance` and `advance_at`.
    pub frame: u64,
}

impl Frame<'_> {
    /// Positions as raw bytes for a vertex buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions)
    }

    /// Colors as raw bytes for a vertex buffer upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.colors)
    }

    /// Per-frame uniform block.
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            rotation_y: self.rotation_y,
            particle_size: self.particle_size,
            time: self.elapsed,
            _padding: 0.0,
        }
    }
}

/// GPU-ready per-frame uniforms (16 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub rotation_y: f32,
    pub particle_size: f32,
    pub time: f32,
    pub _padding: f32,
}

/// The renderer side of the frame loop.
pub trait FrameSink {
    type Error;

    /// Draw one frame. Must not hold on to the slices past the call.
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}

/// Drives sampling, integration and presentation for one point cloud.
pub struct FrameOrchestrator {
    config: ParticleConfig,
    params: StepParams,
    buffer: ParticleBuffer,
    clock: FrameClock,
    rng: SmallRng,
    pending: Option<ParticleConfig>,
    frames: u64,
}

impl FrameOrchestrator {
    /// Validate `config` and build its buffers with an entropy-seeded RNG.
    pub fn new(config: ParticleConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::from_entropy(), FrameClock::new())
    }

    /// Reproducible orchestrator: seeded RNG and a fixed-step clock.
    pub fn with_seed(config: ParticleConfig, seed: u64, step: f32) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed), FrameClock::with_fixed_step(step))
    }

    fn with_rng(config: ParticleConfig, mut rng: SmallRng, clock: FrameClock) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = ParticleBuffer::new(&config, &mut rng);
        tracing::info!(count = config.count, shape = %config.shape, "particle system ready");
        Ok(Self {
            params: StepParams::from(&config),
            config,
            buffer,
            clock,
            rng,
            pending: None,
            frames: 0,
        })
    }

    /// Active configuration (the one the last frame used).
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    /// Whether a submitted configuration is waiting for the next frame.
    pub fn needs_regeneration(&self) -> bool {
        self.pending.is_some()
    }

    /// Queue a new configuration for the next frame boundary.
    ///
    /// Validation happens now; an invalid config is rejected and the queued
    /// one (if any) is left in place. Returns what the change will
    /// regenerate relative to the last submitted configuration.
    pub fn submit(&mut self, config: ParticleConfig) -> Result<ConfigDelta, ConfigError> {
        config.validate()?;
        let base = self.pending.as_ref().unwrap_or(&self.config);
        let delta = ConfigDelta::between(base, &config);
        self.pending = Some(config);
        Ok(delta)
    }

    /// Apply a queued configuration, if any.
    fn apply_pending(&mut self) {
        let Some(next) = self.pending.take() else {
            return;
        };
        let delta = ConfigDelta::between(&self.config, &next);

        if delta.resize {
            self.buffer.resize(&next, &mut self.rng);
        } else {
            if delta.retarget {
                self.buffer.retarget(next.shape, &mut self.rng);
            }
            if delta.recolor {
                self.buffer.recolor(next.color_a, next.color_b, &mut self.rng);
            }
        }

        if !delta.is_empty() {
            tracing::info!(
                count = next.count,
                shape = %next.shape,
                resize = delta.resize,
                retarget = delta.retarget,
                recolor = delta.recolor,
                "applied configuration"
            );
        }

        self.params = StepParams::from(&next);
        self.config = next;
    }

    /// Run one frame on the orchestrator's own clock.
    pub fn advance(&mut self, pointer: Option<Vec3>) -> Frame<'_> {
        let elapsed = self.clock.tick();
        self.advance_at(elapsed, pointer)
    }

    /// Run one frame at an externally supplied time.
    pub fn advance_at(&mut self, elapsed: f32, pointer: Option<Vec3>) -> Frame<'_> {
        self.apply_pending();
        self.buffer.step(elapsed, pointer, &self.params);
        self.frames += 1;
        self.frame(elapsed)
    }

    /// Run one frame and present it.
    pub fn render<S: FrameSink>(&mut self, sink: &mut S, pointer: Option<Vec3>) -> Result<(), S::Error> {
        let frame = self.advance(pointer);
        sink.present(&frame)
    }

    /// View of the buffer as of the last step, without advancing.
    pub fn frame(&self, elapsed: f32) -> Frame<'_> {
        Frame {
            positions: self.buffer.positions(),
            colors: self.buffer.colors(),
            count: self.buffer.count(),
            rotation_y: integrator::rotation_y(elapsed),
            particle_size: self.config.particle_size,
            elapsed,
            frame: self.frames,
        }
    }
}
