//! Per-preset terrain shaping parameters.
//!
//! Each preset is a small table of shaping rules applied on top of the shared
//! octave blend: an exponent that redistributes elevation mass and a list of
//! border attenuation rules that sink terrain toward the map edges.

use crate::config::Preset;

// =============================================================================
// OCTAVE TABLES (shared by all presets)
// =============================================================================

/// Zoom applied to normalized coordinates before sampling.
pub const NOISE_ZOOM: f64 = 4.0;

/// Frequency multiplier per octave.
pub const OCTAVE_FREQUENCIES: [f64; 6] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];

/// Octave weights for the elevation blend.
pub const ELEVATION_WEIGHTS: [f64; 6] = [1.4, 0.74, 0.0, 0.29, 0.0, 0.02];

/// Divisor for the elevation blend. A fixed literal sum that intentionally
/// does not track `ELEVATION_WEIGHTS` (1.0 vs 1.4, 0.72 vs 0.74); changing it
/// would shift every elevation value and reshape existing worlds.
pub const ELEVATION_DIVISOR: f64 = 1.0 + 0.72 + 0.0 + 0.29 + 0.0 + 0.02;

/// Octave weights for the moisture blend.
pub const MOISTURE_WEIGHTS: [f64; 6] = [1.0, 0.75, 0.33, 0.33, 0.33, 0.5];

/// Divisor for the moisture blend, same fixed-literal style.
pub const MOISTURE_DIVISOR: f64 = 1.0 + 0.75 + 0.33 + 0.33 + 0.33 + 0.5;

// =============================================================================
// PRESET PROFILES
// =============================================================================

/// One border attenuation rule: where center distance `d` exceeds
/// `threshold`, subtract `(d - threshold) * slope` from elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub threshold: f64,
    pub slope: f64,
}

/// Shaping parameters for one preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetProfile {
    /// Exponent applied to blended elevation. Higher values push mass toward
    /// sea level, leaving scattered peaks.
    pub exponent: i32,
    /// Attenuation rules, applied in order; rules stack.
    pub attenuation: &'static [Attenuation],
}

const ARCHIPELAGO: PresetProfile = PresetProfile {
    exponent: 7,
    attenuation: &[
        Attenuation { threshold: 0.35, slope: 4.0 },
        Attenuation { threshold: 0.45, slope: 18.0 },
    ],
};

const ORBED_ARCHIPELAGO: PresetProfile = PresetProfile {
    exponent: 4,
    attenuation: &[Attenuation { threshold: 0.45, slope: 18.0 }],
};

const STANDARD: PresetProfile = PresetProfile {
    exponent: 4,
    attenuation: &[Attenuation { threshold: 0.45, slope: 18.0 }],
};

impl Preset {
    /// Shaping profile for this preset.
    pub fn profile(&self) -> &'static PresetProfile {
        match self {
            Preset::Archipelago => &ARCHIPELAGO,
            Preset::OrbedArchipelago => &ORBED_ARCHIPELAGO,
            Preset::Standard => &STANDARD,
        }
    }
}

/// Apply a profile's attenuation rules to an elevation value at normalized
/// center distance `d`. Returns the elevation unchanged when no rule fires;
/// the result is unbounded below.
pub fn attenuate(profile: &PresetProfile, elevation: f64, d: f64) -> f64 {
    let mut e = elevation;
    for rule in profile.attenuation {
        if d > rule.threshold {
            e -= (d - rule.threshold) * rule.slope;
        }
    }
    e
}
