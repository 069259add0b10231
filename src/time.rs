//! Frame clock.
//!
//! Supplies the elapsed time the integrator's noise and the container
//! rotation are functions of. Two modes:
//!
//! - real time, read from [`Instant`] on every tick;
//! - fixed step, where each tick advances by a constant amount regardless of
//!   wall-clock time (headless runs, tests).
//!
//! ```ignore
//! let mut clock = FrameClock::with_fixed_step(1.0 / 60.0);
//! let t = clock.tick(); // 1/60
//! let t = clock.tick(); // 2/60
//! ```

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    /// Wall time spent paused, excluded from elapsed.
    paused_for: Duration,
    paused_at: Option<Instant>,
    fixed_step: Option<f32>,
    elapsed: f32,
    frame: u64,
}

impl FrameClock {
    /// Real-time clock starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            paused_for: Duration::ZERO,
            paused_at: None,
            fixed_step: None,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Clock that advances by `step` seconds per tick.
    pub fn with_fixed_step(step: f32) -> Self {
        Self {
            fixed_step: Some(step.max(0.0)),
            ..Self::new()
        }
    }

    /// Advance one frame and return the elapsed seconds.
    ///
    /// A paused clock still counts the frame but time stands still.
    pub fn tick(&mut self) -> f32 {
        self.frame += 1;
        if self.paused_at.is_some() {
            return self.elapsed;
        }
        self.elapsed = match self.fixed_step {
            Some(step) => self.elapsed + step,
            None => (self.start.elapsed().saturating_sub(self.paused_for)).as_secs_f32(),
        };
        self.elapsed
    }

    /// Elapsed seconds as of the last tick.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Ticks since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
        }
    }

    pub fn resume(&mut self) {
        if let Some(at) = self.paused_at.take() {
            self.paused_for += at.elapsed();
        }
    }

    /// Back to zero, keeping the mode.
    pub fn reset(&mut self) {
        *self = Self {
            fixed_step: self.fixed_step,
            ..Self::new()
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
