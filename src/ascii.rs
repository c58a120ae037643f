//! ASCII rendering and export for world maps.
//!
//! Provides functions to render generated blocks as ASCII text and export
//! them to files, plus biome distribution statistics for summaries.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};

use chrono::Local;

use crate::biomes::Biome;
use crate::blocks::{Block, Position};
use crate::region::Region;

/// Get ASCII character for a biome
pub fn biome_char(biome: Biome) -> char {
    match biome {
        // Water (deepest to shallowest)
        Biome::Ocean => '~',
        Biome::DeepWater => '.',
        Biome::Shallow => ',',
        Biome::Beach => '=',

        // Peaks
        Biome::Steppe => '^',
        Biome::OvergrownCliffs => 'n',
        Biome::Highlands => 'h',
        Biome::Tundra => ':',
        Biome::SnowyMountains => 'A',

        // Highlands
        Biome::TemperateDesert => 'd',
        Biome::Shrubland => 's',
        Biome::Taiga => 'B',

        // Midlands
        Biome::Grassland => '"',
        Biome::TemperateDeciduousForest => 'T',
        Biome::TemperateRainForest => 'R',

        // Lowlands
        Biome::SubtropicalDesert => 'D',
        Biome::TropicalSeasonalForest => 't',
        Biome::Plains => '_',
        Biome::Savanna => ';',
        Biome::TropicalRainForest => 'r',
    }
}

/// Render a block collection as an ASCII map.
///
/// Rows are y, columns are x, covering the given region. Positions not
/// present in the collection render as a space.
pub fn render_ascii(blocks: &[Block], region: &Region) -> String {
    let by_position: HashMap<Position, Biome> = blocks
        .iter()
        .map(|block| (block.position, block.biome))
        .collect();

    let width = region.width() as usize;
    let height = region.height() as usize;
    let mut result = String::with_capacity((width + 1) * height);

    for y in region.start.y..=region.end.y {
        for x in region.start.x..=region.end.x {
            let ch = match by_position.get(&Position::new(x, y)) {
                Some(biome) => biome_char(*biome),
                None => ' ',
            };
            result.push(ch);
        }
        result.push('\n');
    }

    result
}

/// Generate legend for biome characters
pub fn biome_legend() -> String {
    let mut legend = String::new();
    legend.push_str("=== BIOME LEGEND ===\n");
    legend.push_str("WATER:\n");
    legend.push_str("  ~ Ocean        . DeepWater   , Shallow     = Beach\n");
    legend.push_str("PEAKS:\n");
    legend.push_str("  ^ Steppe       n Cliffs      h Highlands   : Tundra     A SnowyMtns\n");
    legend.push_str("HIGHLANDS:\n");
    legend.push_str("  d TempDesert   s Shrubland   B Taiga\n");
    legend.push_str("MIDLANDS:\n");
    legend.push_str("  \" Grassland    T TempForest  R TempRain\n");
    legend.push_str("LOWLANDS:\n");
    legend.push_str("  D SubtrDesert  t TropSeason  _ Plains      ; Savanna    r TropRain\n");
    legend
}

/// Calculate biome statistics
pub fn biome_stats(blocks: &[Block]) -> HashMap<Biome, usize> {
    let mut stats = HashMap::new();
    for block in blocks {
        *stats.entry(block.biome).or_insert(0) += 1;
    }
    stats
}

/// Export a block collection to an ASCII file
pub fn export_ascii(blocks: &[Block], region: &Region, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;

    // Header
    writeln!(file, "=== WORLD MAP ===")?;
    writeln!(
        file,
        "Region: ({}, {}) to ({}, {})",
        region.start.x, region.start.y, region.end.x, region.end.y
    )?;
    writeln!(file, "Size: {}x{}", region.width(), region.height())?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    write!(file, "{}", render_ascii(blocks, region))?;
    writeln!(file)?;

    write!(file, "{}", biome_legend())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn block(x: u32, y: u32, biome: Biome) -> Block {
        Block::new(Position::new(x, y), biome)
    }

    fn two_by_two() -> (Vec<Block>, Region) {
        let blocks = vec![
            block(1, 1, Biome::Ocean),
            block(1, 2, Biome::Beach),
            block(2, 1, Biome::Grassland),
            block(2, 2, Biome::SnowyMountains),
        ];
        let region = Region::new(Position::new(1, 1), Position::new(2, 2));
        (blocks, region)
    }

    #[test]
    fn test_biome_chars_unique() {
        let mut seen = std::collections::HashSet::new();
        for biome in Biome::all() {
            assert!(
                seen.insert(biome_char(*biome)),
                "duplicate glyph for {:?}",
                biome
            );
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_render_ascii_layout() {
        let (blocks, region) = two_by_two();
        let text = render_ascii(&blocks, &region);
        // Row 1 is y=1 (x=1 then x=2), row 2 is y=2.
        assert_eq!(text, "~\"\n=A\n");
    }

    #[test]
    fn test_render_ascii_missing_blocks_are_spaces() {
        let blocks = vec![block(1, 1, Biome::Ocean)];
        let region = Region::new(Position::new(1, 1), Position::new(2, 2));
        let text = render_ascii(&blocks, &region);
        assert_eq!(text, "~ \n  \n");
    }

    #[test]
    fn test_render_ascii_chunk_offset() {
        let blocks = vec![block(5, 7, Biome::Savanna), block(6, 8, Biome::Taiga)];
        let region = Region::new(Position::new(5, 7), Position::new(6, 8));
        let text = render_ascii(&blocks, &region);
        assert_eq!(text, "; \n B\n");
    }

    #[test]
    fn test_biome_stats_counts() {
        let blocks = vec![
            block(1, 1, Biome::Ocean),
            block(2, 1, Biome::Ocean),
            block(3, 1, Biome::Plains),
        ];
        let stats = biome_stats(&blocks);
        assert_eq!(stats.get(&Biome::Ocean), Some(&2));
        assert_eq!(stats.get(&Biome::Plains), Some(&1));
        assert_eq!(stats.get(&Biome::Taiga), None);
    }

    #[test]
    fn test_legend_mentions_every_glyph() {
        let legend = biome_legend();
        for biome in Biome::all() {
            let glyph = biome_char(*biome);
            assert!(
                legend.contains(glyph),
                "legend missing glyph {:?} for {:?}",
                glyph,
                biome
            );
        }
    }

    #[test]
    fn test_export_ascii_writes_header_map_and_legend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.txt");
        let (blocks, region) = two_by_two();

        export_ascii(&blocks, &region, path.to_str().unwrap()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("=== WORLD MAP ==="));
        assert!(text.contains("Region: (1, 1) to (2, 2)"));
        assert!(text.contains("Size: 2x2"));
        assert!(text.contains("Generated: "));
        assert!(text.contains("~\"\n=A\n"));
        assert!(text.contains("=== BIOME LEGEND ==="));
    }
}
