//! Error types for shapecloud.
//!
//! Everything here belongs to the configuration boundary. The per-frame path
//! (sampling, integration) has no error cases: degenerate geometry is handled
//! where it occurs.

use std::fmt;

/// Errors that can occur while parsing a hex color string.
#[derive(Debug)]
pub enum ColorParseError {
    /// Wrong number of hex digits (expected 3 or 6).
    Length(usize),
    /// A non-hex character in the given input.
    Digit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Length(n) => write!(f, "Expected 3 or 6 hex digits, found {}", n),
            ColorParseError::Digit(s) => write!(f, "Invalid hex color: {}", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Errors that can occur when loading or validating a particle configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Particle count was zero.
    ZeroCount,
    /// Particle count above the per-frame budget.
    TooManyParticles { count: usize, max: usize },
    /// Speed outside `(0, 1]`.
    Speed(f32),
    /// Noise strength negative, non-finite, or above the maximum.
    Noise(f32),
    /// Particle size not a positive finite number.
    ParticleSize(f32),
    /// A color channel outside `[0, 1]`.
    ColorOutOfRange { which: &'static str, color: String },
    /// Shape identifier that names no known shape.
    UnknownShape(String),
    /// Malformed color string.
    Color(ColorParseError),
    /// Failed to read or write a config file.
    Io(std::io::Error),
    /// Config file was not valid JSON for a configuration.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCount => write!(f, "Particle count must be at least 1"),
            ConfigError::TooManyParticles { count, max } => {
                write!(f, "Particle count {} exceeds the maximum of {}", count, max)
            }
            ConfigError::Speed(v) => write!(f, "Speed must be in (0, 1], got {}", v),
            ConfigError::Noise(v) => write!(f, "Noise strength out of range: {}", v),
            ConfigError::ParticleSize(v) => write!(f, "Particle size must be positive, got {}", v),
            ConfigError::ColorOutOfRange { which, color } => {
                write!(f, "{} has channels outside [0, 1]: {}", which, color)
            }
            ConfigError::UnknownShape(s) => write!(
                f,
                "Unknown shape '{}'. Expected one of: sphere, cube, heart, tree, spiral, cat",
                s
            ),
            ConfigError::Color(e) => write!(f, "Invalid color: {}", e),
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Color(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorParseError> for ConfigError {
    fn from(e: ColorParseError) -> Self {
        ConfigError::Color(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
