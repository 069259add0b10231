//! Particle colors.
//!
//! Each particle gets its own random blend of the two configured colors, so
//! neighbouring particles sparkle rather than forming a smooth gradient.
//! Colors are assigned once and never touched by the per-frame update.

use crate::error::ColorParseError;
use crate::sampler::SampleContext;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color with each channel in `[0, 1]`.
///
/// Serializes as a `#rrggbb` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(hex.to_string()));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::Digit(hex.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            len => Err(ColorParseError::Length(len)),
        }
    }

    /// Lower-case `#rrggbb`, channels clamped to `[0, 1]`.
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Whether every channel is finite and inside `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Linear interpolation toward `other`.
    ///
    /// The result is clamped to the per-channel interval spanned by the two
    /// endpoints, so rounding can never push it outside.
    pub fn lerp(&self, other: Color, t: f32) -> Color {
        let a = Vec3::from(*self);
        let b = Vec3::from(other);
        Color::from(a.lerp(b, t).clamp(a.min(b), a.max(b)))
    }
}

impl From<Color> for Vec3 {
    fn from(c: Color) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color::rgb(v.x, v.y, v.z)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Assign `count` colors, each an independent random blend of `a` and `b`.
///
/// Returns a flat `[r0, g0, b0, r1, ...]` array of length `count * 3`.
pub fn assign_colors<R: Rng + ?Sized>(count: usize, a: Color, b: Color, rng: &mut R) -> Vec<f32> {
    let mut out = vec![0.0; count * 3];
    assign_colors_into(a, b, &mut out, rng);
    out
}

/// Fill an existing flat color array. One mix ratio is drawn per particle.
pub fn assign_colors_into<R: Rng + ?Sized>(a: Color, b: Color, out: &mut [f32], rng: &mut R) {
    let mut ctx = SampleContext::new(rng);
    for slot in out.chunks_exact_mut(3) {
        let c = a.lerp(b, ctx.unit());
        slot.copy_from_slice(&[c.r, c.g, c.b]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex("#ff0066").unwrap();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.4).abs() < 0.001);

        let short = Color::from_hex("f06").unwrap();
        assert_eq!(short, c);
    }

    #[test]
    fn test_from_hex_errors() {
        assert!(matches!(Color::from_hex("#ff00"), Err(ColorParseError::Length(4))));
        assert!(matches!(Color::from_hex("#gg0000"), Err(ColorParseError::Digit(_))));
        assert!(matches!(Color::from_hex("#+f+f+f"), Err(ColorParseError::Digit(_))));
        assert!(matches!(Color::from_hex("+ff"), Err(ColorParseError::Digit(_))));
    }

    #[test]
    fn test_hex_round_trip_case() {
        assert_eq!(Color::from_hex("#0575E6").unwrap().to_hex(), "#0575e6");
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::rgb(0.2, 0.9, 0.0);
        let b = Color::rgb(0.8, 0.1, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        let end = a.lerp(b, 1.0);
        assert!((end.r - b.r).abs() < 1e-6);
        assert!((end.g - b.g).abs() < 1e-6);
    }

    #[test]
    fn test_assign_is_not_a_gradient() {
        // Index order carries no information: the first and second halves
        // average out to the same midpoint.
        let mut rng = SmallRng::seed_from_u64(21);
        let colors = assign_colors(10_000, Color::BLACK, Color::WHITE, &mut rng);
        let reds: Vec<f32> = colors.chunks_exact(3).map(|c| c[0]).collect();
        let mean = |s: &[f32]| s.iter().sum::<f32>() / s.len() as f32;
        assert!((mean(&reds[..5000]) - 0.5).abs() < 0.03);
        assert!((mean(&reds[5000..]) - 0.5).abs() < 0.03);
    }

    #[test]
    fn test_channels_share_one_mix() {
        // Black to white means every particle is a gray.
        let mut rng = SmallRng::seed_from_u64(22);
        let colors = assign_colors(100, Color::BLACK, Color::WHITE, &mut rng);
        for c in colors.chunks_exact(3) {
            assert_eq!(c[0], c[1]);
            assert_eq!(c[1], c[2]);
        }
    }
}
