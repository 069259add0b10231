//! Quick-switch presets

use super::ParticleConfig;
use crate::color::Color;
use crate::shape::ShapeKind;

/// A named look. Applying one keeps the fields it does not mention.
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub apply: fn(ParticleConfig) -> ParticleConfig,
}

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "love",
        description: "Dense solid heart in pinks",
        apply: |prev| ParticleConfig {
            shape: ShapeKind::Heart,
            color_a: Color::rgb(1.0, 10.0 / 255.0, 84.0 / 255.0),
            color_b: Color::rgb(1.0, 71.0 / 255.0, 126.0 / 255.0),
            noise_strength: 0.3,
            count: 40_000,
            ..prev
        },
    },
    Preset {
        name: "xmas",
        description: "Green-to-cyan tree",
        apply: |prev| ParticleConfig {
            shape: ShapeKind::Tree,
            color_a: Color::rgb(0.0, 1.0, 135.0 / 255.0),
            color_b: Color::rgb(96.0 / 255.0, 239.0 / 255.0, 1.0),
            noise_strength: 0.4,
            count: 25_000,
            ..prev
        },
    },
    Preset {
        name: "cyber",
        description: "Jittery green and blue cube",
        apply: |prev| ParticleConfig {
            shape: ShapeKind::Cube,
            color_a: Color::rgb(0.0, 242.0 / 255.0, 96.0 / 255.0),
            color_b: Color::rgb(5.0 / 255.0, 117.0 / 255.0, 230.0 / 255.0),
            noise_strength: 0.8,
            count: 20_000,
            ..prev
        },
    },
    Preset {
        name: "vibe",
        description: "Yellow and magenta spiral",
        apply: |prev| ParticleConfig {
            shape: ShapeKind::Spiral,
            color_a: Color::rgb(247.0 / 255.0, 1.0, 0.0),
            color_b: Color::rgb(219.0 / 255.0, 54.0 / 255.0, 164.0 / 255.0),
            noise_strength: 0.6,
            count: 15_000,
            ..prev
        },
    },
];

/// Look up a preset by name, ignoring case.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
