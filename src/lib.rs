//! Procedural world generation library
//!
//! Layered simplex noise turns a seed pair into elevation and moisture
//! fields, which classify into biome blocks. Re-exports modules for use by
//! binaries and tools.

pub mod ascii;
pub mod biomes;
pub mod blocks;
pub mod config;
pub mod export;
pub mod generator;
pub mod noise_field;
pub mod presets;
pub mod region;
pub mod seeds;
pub mod terrain;
