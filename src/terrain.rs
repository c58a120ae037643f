//! Terrain field evaluation.
//!
//! Turns a (x, y) block coordinate into an (elevation, moisture) sample by
//! blending six octaves of noise. Elevation additionally gets the preset's
//! exponent shaping and border attenuation; moisture is the plain blend.
//! Evaluation is pure: the same configuration and coordinate always produce
//! the same sample.

use crate::config::WorldConfig;
use crate::noise_field::{NoiseSource, SimplexField};
use crate::presets::{
    attenuate, PresetProfile, ELEVATION_DIVISOR, ELEVATION_WEIGHTS, MOISTURE_DIVISOR,
    MOISTURE_WEIGHTS, NOISE_ZOOM, OCTAVE_FREQUENCIES,
};

/// Terrain values for one block, before classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainSample {
    /// Nominal range roughly [0, 1.2] before attenuation; unbounded below
    /// after it. Anything negative classifies as ocean.
    pub elevation: f64,
    /// Nominal range [0, 1].
    pub moisture: f64,
}

/// Evaluates the elevation and moisture fields over one map.
///
/// Built once per generation call from the configuration; holds the two
/// seeded noise sources, the map dimensions for coordinate normalization,
/// and the preset profile. No other state.
pub struct FieldEvaluator<N: NoiseSource> {
    elevation: N,
    moisture: N,
    width: f64,
    height: f64,
    profile: &'static PresetProfile,
}

impl FieldEvaluator<SimplexField> {
    /// Build the production evaluator: two independent simplex fields seeded
    /// from the configured seed strings.
    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(
            SimplexField::from_seed(&config.seeds.elevation),
            SimplexField::from_seed(&config.seeds.moisture),
            config.size.width,
            config.size.height,
            config.preset.profile(),
        )
    }
}

impl<N: NoiseSource> FieldEvaluator<N> {
    pub fn new(
        elevation: N,
        moisture: N,
        width: u32,
        height: u32,
        profile: &'static PresetProfile,
    ) -> Self {
        Self {
            elevation,
            moisture,
            width: f64::from(width),
            height: f64::from(height),
            profile,
        }
    }

    /// Sample the terrain fields at a 1-indexed block coordinate.
    pub fn evaluate(&self, x: u32, y: u32) -> TerrainSample {
        let nx = f64::from(x) / self.width - 0.5;
        let ny = f64::from(y) / self.height - 0.5;

        let mut e = 0.0;
        for (freq, weight) in OCTAVE_FREQUENCIES.iter().zip(ELEVATION_WEIGHTS) {
            e += weight * self.sample_remapped(&self.elevation, freq * nx, freq * ny);
        }
        e /= ELEVATION_DIVISOR;
        e = e.powi(self.profile.exponent);

        // Distance to map center, normalized by width on both axes.
        let dx = self.width / 2.0 - f64::from(x);
        let dy = self.height / 2.0 - f64::from(y);
        let d = (dx * dx + dy * dy).sqrt() / self.width;
        e = attenuate(self.profile, e, d);

        let mut m = 0.0;
        for (freq, weight) in OCTAVE_FREQUENCIES.iter().zip(MOISTURE_WEIGHTS) {
            m += weight * self.sample_remapped(&self.moisture, freq * nx, freq * ny);
        }
        m /= MOISTURE_DIVISOR;

        TerrainSample { elevation: e, moisture: m }
    }

    /// One octave term: sample at zoomed coordinates, remapped [-1, 1] to
    /// [0, 1] via v/2 + 0.5.
    fn sample_remapped(&self, source: &N, fx: f64, fy: f64) -> f64 {
        source.sample(fx * NOISE_ZOOM, fy * NOISE_ZOOM) / 2.0 + 0.5
    }
}
