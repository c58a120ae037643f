//! World generation pipeline.
//!
//! `generate` is the single entry point: validate the configuration, resolve
//! the target region, walk the grid, classify every block, and package the
//! result in the requested format. Every failure mode happens before the
//! first block is computed; a call either yields the complete result or
//! nothing.

use image::RgbaImage;
use rayon::prelude::*;

use crate::biomes::Biome;
use crate::blocks::{Block, Position};
use crate::config::{ConfigError, OutputFormat, WorldConfig};
use crate::export;
use crate::region::{Region, RegionError};
use crate::terrain::FieldEvaluator;

/// Output of one generation call, matching the configured format.
#[derive(Debug)]
pub enum GenerationResult {
    /// Blocks in generation order: x ascending outer, y ascending inner.
    Collection(Vec<Block>),
    /// Rendered map image, always full map size; blocks outside the
    /// requested region stay transparent.
    Image(RgbaImage),
}

/// Generate a world, or the given chunk of it.
///
/// With no region the whole map is generated. The region is interpreted in
/// absolute map coordinates, so a chunk of a larger world carries the same
/// terrain as the corresponding slice of the full run.
pub fn generate(
    config: &WorldConfig,
    region: Option<Region>,
) -> Result<GenerationResult, GenerateError> {
    config.validate()?;
    let region = region.unwrap_or_else(|| Region::full_map(&config.size));
    region.validate(&config.size)?;

    let blocks = generate_blocks(config, &region);
    Ok(match config.format {
        OutputFormat::Collection => GenerationResult::Collection(blocks),
        OutputFormat::Image => GenerationResult::Image(export::render_image(&config.size, &blocks)),
    })
}

/// The raw grid pass: evaluate terrain and classify every block in the
/// region. Callers must have validated config and region.
///
/// Columns are processed in parallel; blocks depend only on the
/// configuration and their own coordinates, and the ordered collect restores
/// x-major order, so the output is identical to a sequential pass.
pub fn generate_blocks(config: &WorldConfig, region: &Region) -> Vec<Block> {
    let evaluator = FieldEvaluator::from_config(config);
    (region.start.x..=region.end.x)
        .into_par_iter()
        .flat_map_iter(|x| {
            let evaluator = &evaluator;
            (region.start.y..=region.end.y).map(move |y| {
                let sample = evaluator.evaluate(x, y);
                let biome = Biome::classify(sample.elevation, sample.moisture);
                Block::new(Position::new(x, y), biome)
            })
        })
        .collect()
}

/// A generation request was rejected during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Configuration violated a constraint.
    Config(ConfigError),
    /// Requested chunk violated the map bounds.
    Region(RegionError),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Config(e) => write!(f, "invalid configuration: {}", e),
            GenerateError::Region(e) => write!(f, "invalid chunk: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        GenerateError::Config(e)
    }
}

impl From<RegionError> for GenerateError {
    fn from(e: RegionError) -> Self {
        GenerateError::Region(e)
    }
}
