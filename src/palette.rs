//! Instructor color assignment.
//!
//! Each instructor gets one pastel color for presentation, stable
//! across schedule regenerations. Generation is seeded from the
//! instructor's name, so the same name always yields the same color and
//! tests can rely on it. Explicit user overrides always win and are
//! never regenerated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Instructor → color table. Append-only except explicit overrides.
///
/// Colors are `#rrggbb` hex strings. The table is keyed by instructor
/// identity only and persists across schedule regenerations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorPalette {
    colors: BTreeMap<String, String>,
}

impl InstructorPalette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color for an instructor, generating and recording
    /// one if none is assigned yet. An existing assignment — generated
    /// or user-set — is returned unchanged.
    pub fn color_for(&mut self, instructor: &str) -> &str {
        self.colors
            .entry(instructor.to_string())
            .or_insert_with(|| pastel_for(instructor))
    }

    /// Explicitly assigns a color, replacing any previous one.
    ///
    /// Override colors take precedence permanently: auto-generation
    /// only ever fills missing keys.
    pub fn set_color(&mut self, instructor: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(instructor.into(), color.into());
    }

    /// Looks up an instructor's color without assigning one.
    pub fn get(&self, instructor: &str) -> Option<&str> {
        self.colors.get(instructor).map(String::as_str)
    }

    /// Number of assigned instructors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no colors are assigned.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over (instructor, color) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Generates a pastel color for a name: high lightness, muted
/// saturation, hue spread by a name-seeded RNG.
fn pastel_for(name: &str) -> String {
    let mut rng = StdRng::seed_from_u64(fnv1a64(name.as_bytes()));
    let hue = rng.random_range(0.0..360.0);
    let saturation = rng.random_range(0.35..0.55);
    let lightness = rng.random_range(0.78..0.88);
    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// FNV-1a 64-bit hash. Stable across platforms and crate versions,
/// unlike the standard library's default hasher.
fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Converts HSL (hue in degrees, saturation/lightness in 0..1) to RGB.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r1), to_byte(g1), to_byte(b1))
}
