//! Generated map records.

use crate::biomes::Biome;

/// Absolute map coordinates, 1-indexed; (1, 1) is the top-left block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One generated block: its position and classified biome. Created once per
/// generation pass and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Block {
    pub position: Position,
    pub biome: Biome,
}

impl Block {
    pub fn new(position: Position, biome: Biome) -> Self {
        Self { position, biome }
    }
}
