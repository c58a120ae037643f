//! World configuration and validation.
//!
//! A [`WorldConfig`] fully determines a world: preset, map size, seed pair,
//! and output format. Validation happens up front and rejects the whole
//! request; generation never starts from a half-valid configuration.

use std::str::FromStr;

use crate::seeds::{validate_seed, SeedError, WorldSeeds};

/// Smallest accepted map axis.
pub const MIN_AXIS: u32 = 1;
/// Largest accepted map axis.
pub const MAX_AXIS: u32 = 34000;

/// Terrain shaping preset. Selects the elevation exponent and the border
/// attenuation rules; see the presets module for the numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Scattered island chains, aggressively sunken edges.
    Archipelago,
    /// One rounded landmass ringed by ocean.
    OrbedArchipelago,
    /// Continent-style terrain with gentle edge falloff.
    Standard,
}

impl Preset {
    /// Canonical name, as used in serialized configs and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Archipelago => "archipelago",
            Preset::OrbedArchipelago => "orbedArchipelago",
            Preset::Standard => "standard",
        }
    }

    /// One-line description for CLI help and status output.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Archipelago => "scattered island chains with deep surrounding ocean",
            Preset::OrbedArchipelago => "a single rounded landmass ringed by ocean",
            Preset::Standard => "continent-style terrain with gentle edge falloff",
        }
    }

    /// All presets, default first.
    pub fn all() -> &'static [Preset] {
        &[Preset::Archipelago, Preset::OrbedArchipelago, Preset::Standard]
    }
}

impl Default for Preset {
    fn default() -> Self {
        Preset::Archipelago
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "archipelago" => Ok(Preset::Archipelago),
            "orbedarchipelago" | "orbed-archipelago" | "orbed_archipelago" => {
                Ok(Preset::OrbedArchipelago)
            }
            // "default" is the historical name for the standard preset.
            "standard" | "default" => Ok(Preset::Standard),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

/// Map dimensions in blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

impl MapSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of blocks; u64 because 34000 x 34000 overflows u32.
    pub fn block_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self { width: 10, height: 10 }
    }
}

/// What `generate` should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Every block as a record (position + biome descriptor).
    Collection,
    /// An RGBA map image.
    Image,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Collection => "collection",
            OutputFormat::Image => "image",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Collection
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "collection" | "json" => Ok(OutputFormat::Collection),
            // "png" is the historical name for image output.
            "image" | "png" => Ok(OutputFormat::Image),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Complete description of one world to generate.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    pub preset: Preset,
    pub size: MapSize,
    pub seeds: WorldSeeds,
    pub format: OutputFormat,
}

impl WorldConfig {
    /// Check every field against its constraints. Returns the first
    /// violation; nothing is generated from an invalid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.width < MIN_AXIS || self.size.width > MAX_AXIS {
            return Err(ConfigError::SizeOutOfRange { axis: "width", value: self.size.width });
        }
        if self.size.height < MIN_AXIS || self.size.height > MAX_AXIS {
            return Err(ConfigError::SizeOutOfRange { axis: "height", value: self.size.height });
        }
        validate_seed(&self.seeds.elevation)?;
        validate_seed(&self.seeds.moisture)?;
        Ok(())
    }
}

impl Default for WorldConfig {
    /// Archipelago, 10x10, fresh random seeds, collection output.
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            size: MapSize::default(),
            seeds: WorldSeeds::random(),
            format: OutputFormat::default(),
        }
    }
}

/// A configuration field violated its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height outside 1..=34000.
    SizeOutOfRange { axis: &'static str, value: u32 },
    /// A seed string failed validation.
    Seed(SeedError),
    UnknownPreset(String),
    UnknownFormat(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SizeOutOfRange { axis, value } => {
                write!(f, "map {} must be between {} and {}, got {}", axis, MIN_AXIS, MAX_AXIS, value)
            }
            ConfigError::Seed(err) => write!(f, "invalid seed: {}", err),
            ConfigError::UnknownPreset(name) => {
                write!(f, "unknown preset {:?} (expected archipelago, orbedArchipelago or standard)", name)
            }
            ConfigError::UnknownFormat(name) => {
                write!(f, "unknown format {:?} (expected collection or image)", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<SeedError> for ConfigError {
    fn from(err: SeedError) -> Self {
        ConfigError::Seed(err)
    }
}
