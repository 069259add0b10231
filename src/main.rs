//! Headless runner.
//!
//! Drives the engine for a number of frames without a window and logs how
//! close the cloud got to its shape.
//!
//! ```text
//! shapecloud [preset | config.json] [frames]
//! RUST_LOG=debug shapecloud heart.json 600
//! ```

use shapecloud::prelude::*;
use std::convert::Infallible;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FRAMES: u64 = 300;
const FRAME_STEP: f32 = 1.0 / 60.0;

/// Tracks how far particles are from their targets.
struct ConvergenceSink<'a> {
    targets: &'a [f32],
    mean_distance: f32,
}

impl FrameSink for ConvergenceSink<'_> {
    type Error = Infallible;

    fn present(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
        let total: f32 = frame
            .positions
            .chunks_exact(3)
            .zip(self.targets.chunks_exact(3))
            .map(|(p, t)| Vec3::from_slice(p).distance(Vec3::from_slice(t)))
            .sum();
        self.mean_distance = total / frame.count.max(1) as f32;
        Ok(())
    }
}

fn load_config(arg: Option<&str>) -> Result<ParticleConfig, ConfigError> {
    match arg {
        None => Ok(ParticleConfig::default()),
        Some(name) => match preset(name) {
            Some(p) => Ok((p.apply)(ParticleConfig::default())),
            None => ParticleConfig::load(name),
        },
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let frames = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let config = match load_config(args.get(1).map(String::as_str)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match FrameOrchestrator::with_seed(config, 0x5eed, FRAME_STEP) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let targets = engine.buffer().targets().to_vec();
    let mut sink = ConvergenceSink {
        targets: &targets,
        mean_distance: f32::INFINITY,
    };

    for frame in 1..=frames {
        if let Err(never) = engine.render(&mut sink, None) {
            match never {}
        }
        if frame % 60 == 0 || frame == frames {
            tracing::info!(frame, mean_distance = sink.mean_distance, "converging");
        }
    }

    ExitCode::SUCCESS
}
