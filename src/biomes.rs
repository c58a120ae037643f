//! Biome catalog and classification.
//!
//! A fixed set of 20 biomes, each with a stable code, display name, and map
//! color. Classification maps an (elevation, moisture) pair to exactly one
//! biome through an ordered threshold table; the first matching rule wins.

/// Biome types selected from elevation and moisture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    // Water ladder (lowest elevation first)
    Ocean,
    DeepWater,
    Shallow,
    Beach,

    // Peaks (e > 0.8)
    Steppe,
    OvergrownCliffs,
    Highlands,
    Tundra,
    SnowyMountains,

    // Highlands (e > 0.6)
    TemperateDesert,
    Shrubland,
    Taiga,

    // Midlands (e > 0.3)
    Grassland,
    TemperateDeciduousForest,
    TemperateRainForest,

    // Lowlands
    SubtropicalDesert,
    TropicalSeasonalForest,
    Plains,
    Savanna,
    TropicalRainForest,
}

/// Immutable descriptor for one biome: serialization code, human-readable
/// name, and RGB map color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BiomeInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub rgb: [u8; 3],
}

// Entry order must match the Biome declaration order; info() indexes by
// discriminant. Shallow intentionally shares Ocean's name and color.
const CATALOG: [BiomeInfo; 20] = [
    BiomeInfo { code: "ocean", name: "Ocean", rgb: [54, 112, 181] },
    BiomeInfo { code: "deepWater", name: "Deep water", rgb: [75, 130, 196] },
    BiomeInfo { code: "shallow", name: "Ocean", rgb: [54, 112, 181] },
    BiomeInfo { code: "beach", name: "Beach", rgb: [227, 204, 150] },
    BiomeInfo { code: "steppe", name: "Steppe", rgb: [117, 116, 116] },
    BiomeInfo { code: "overgrownCliffs", name: "Overgrown cliffs", rgb: [171, 169, 169] },
    BiomeInfo { code: "highlands", name: "Highlands", rgb: [209, 207, 207] },
    BiomeInfo { code: "tundra", name: "Tundra", rgb: [188, 188, 191] },
    BiomeInfo { code: "snowyMountains", name: "Snowy mountains", rgb: [252, 253, 255] },
    BiomeInfo { code: "temperateDesert", name: "Temperate desert", rgb: [241, 220, 169] },
    BiomeInfo { code: "shrubland", name: "Shrubland", rgb: [136, 153, 119] },
    BiomeInfo { code: "taiga", name: "Taiga", rgb: [152, 169, 119] },
    BiomeInfo { code: "grassland", name: "Grassland", rgb: [136, 171, 85] },
    BiomeInfo {
        code: "temperateDeciduousForest",
        name: "Temperate deciduous forest",
        rgb: [70, 102, 86],
    },
    BiomeInfo { code: "temperateRainForest", name: "Temperate rain forest", rgb: [67, 136, 85] },
    BiomeInfo { code: "subtropicalDesert", name: "Subtropical Desert", rgb: [245, 237, 190] },
    BiomeInfo {
        code: "tropicalSeasonalForest",
        name: "Tropical seasonal forest",
        rgb: [99, 150, 101],
    },
    BiomeInfo { code: "plains", name: "Plains", rgb: [219, 217, 169] },
    BiomeInfo { code: "savanna", name: "Savanna", rgb: [204, 201, 145] },
    BiomeInfo { code: "tropicalRainForest", name: "Tropical rain forest", rgb: [103, 147, 89] },
];

impl Biome {
    /// Classify an (elevation, moisture) pair.
    ///
    /// Total over all real inputs: any elevation below the water thresholds
    /// is ocean, anything above the peak threshold lands in the peak belt,
    /// and every moisture branch ends in a catch-all. Thresholds are strict
    /// (`<` / `>`), so e = 0.08 is already DeepWater, not Ocean.
    pub fn classify(e: f64, m: f64) -> Biome {
        if e < 0.08 {
            return Biome::Ocean;
        }
        if e < 0.09 {
            return Biome::DeepWater;
        }
        if e < 0.10 {
            return Biome::Shallow;
        }
        if e < 0.115 {
            return Biome::Beach;
        }

        if e > 0.8 {
            return if m < 0.1 {
                Biome::Steppe
            } else if m < 0.2 {
                Biome::OvergrownCliffs
            } else if m < 0.3 {
                Biome::Highlands
            } else if m < 0.5 {
                Biome::Tundra
            } else {
                Biome::SnowyMountains
            };
        }

        if e > 0.6 {
            return if m < 0.33 {
                Biome::TemperateDesert
            } else if m < 0.66 {
                Biome::Shrubland
            } else {
                Biome::Taiga
            };
        }

        if e > 0.3 {
            return if m < 0.16 {
                Biome::TemperateDesert
            } else if m < 0.5 {
                Biome::Grassland
            } else if m < 0.83 {
                Biome::TemperateDeciduousForest
            } else {
                Biome::TemperateRainForest
            };
        }

        if m < 0.16 {
            Biome::SubtropicalDesert
        } else if m < 0.33 {
            Biome::Grassland
        } else if m < 0.55 {
            Biome::TropicalSeasonalForest
        } else if m < 0.6 {
            Biome::Plains
        } else if m < 0.7 {
            Biome::Savanna
        } else {
            Biome::TropicalRainForest
        }
    }

    /// Static descriptor for this biome. Never allocates; all blocks of the
    /// same biome share the same catalog entry.
    pub fn info(&self) -> &'static BiomeInfo {
        &CATALOG[*self as usize]
    }

    /// Stable serialization code (camelCase).
    pub fn code(&self) -> &'static str {
        self.info().code
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    /// RGB map color.
    pub fn color(&self) -> [u8; 3] {
        self.info().rgb
    }

    /// All biomes in catalog order.
    pub fn all() -> &'static [Biome] {
        &[
            Biome::Ocean,
            Biome::DeepWater,
            Biome::Shallow,
            Biome::Beach,
            Biome::Steppe,
            Biome::OvergrownCliffs,
            Biome::Highlands,
            Biome::Tundra,
            Biome::SnowyMountains,
            Biome::TemperateDesert,
            Biome::Shrubland,
            Biome::Taiga,
            Biome::Grassland,
            Biome::TemperateDeciduousForest,
            Biome::TemperateRainForest,
            Biome::SubtropicalDesert,
            Biome::TropicalSeasonalForest,
            Biome::Plains,
            Biome::Savanna,
            Biome::TropicalRainForest,
        ]
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Blocks carry a biome reference; serialize it as the full descriptor so
/// collection output is self-describing.
impl serde::Serialize for Biome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.info().serialize(serializer)
    }
}
