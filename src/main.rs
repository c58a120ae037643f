use clap::Parser;

use world_generator::ascii;
use world_generator::blocks::Position;
use world_generator::config::{MapSize, OutputFormat, Preset, WorldConfig};
use world_generator::export;
use world_generator::generator;
use world_generator::region::Region;
use world_generator::seeds::WorldSeeds;

#[derive(Parser, Debug)]
#[command(name = "world_generator")]
#[command(about = "Generate procedural biome worlds from layered simplex noise")]
struct Args {
    /// Width of the map in blocks
    #[arg(short = 'W', long, default_value = "10")]
    width: u32,

    /// Height of the map in blocks
    #[arg(short = 'H', long, default_value = "10")]
    height: u32,

    /// World shape preset: archipelago, orbedArchipelago or standard
    #[arg(short, long, default_value = "archipelago")]
    preset: String,

    /// Elevation seed (random 30-digit seed if not specified)
    #[arg(long)]
    elevation_seed: Option<String>,

    /// Moisture seed (random 30-digit seed if not specified)
    #[arg(long)]
    moisture_seed: Option<String>,

    /// Chunk start X, 1-indexed (requires the other three chunk bounds)
    #[arg(long)]
    chunk_start_x: Option<u32>,

    /// Chunk start Y, 1-indexed
    #[arg(long)]
    chunk_start_y: Option<u32>,

    /// Chunk end X, inclusive
    #[arg(long)]
    chunk_end_x: Option<u32>,

    /// Chunk end Y, inclusive
    #[arg(long)]
    chunk_end_y: Option<u32>,

    /// Output format: collection (JSON) or image (PNG)
    #[arg(short, long, default_value = "collection")]
    format: String,

    /// Output path (default: world.json or world.png depending on format)
    #[arg(short, long)]
    output: Option<String>,

    /// Print an ASCII preview of the generated map to stdout
    #[arg(long)]
    preview: bool,

    /// Export an ASCII map with legend to a text file
    #[arg(long)]
    ascii: Option<String>,
}

fn main() {
    let args = Args::parse();

    let preset: Preset = match args.preset.parse() {
        Ok(preset) => preset,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let format: OutputFormat = match args.format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let seeds = match WorldSeeds::resolve(
        args.elevation_seed.as_deref(),
        args.moisture_seed.as_deref(),
    ) {
        Ok(seeds) => seeds,
        Err(e) => {
            eprintln!("Invalid seed: {}", e);
            std::process::exit(1);
        }
    };

    let config = WorldConfig {
        preset,
        size: MapSize::new(args.width, args.height),
        seeds,
        format,
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let chunk = match (
        args.chunk_start_x,
        args.chunk_start_y,
        args.chunk_end_x,
        args.chunk_end_y,
    ) {
        (Some(sx), Some(sy), Some(ex), Some(ey)) => {
            Some(Region::new(Position::new(sx, sy), Position::new(ex, ey)))
        }
        (None, None, None, None) => None,
        _ => {
            eprintln!(
                "Chunk bounds require all of --chunk-start-x, --chunk-start-y, --chunk-end-x and --chunk-end-y"
            );
            std::process::exit(1);
        }
    };
    let region = chunk.unwrap_or_else(|| Region::full_map(&config.size));
    if let Err(e) = region.validate(&config.size) {
        eprintln!("Invalid chunk bounds: {}", e);
        std::process::exit(1);
    }

    // Echo the full configuration so any run can be reproduced.
    println!("Generating world with preset: {}", config.preset);
    println!("Map size: {}x{}", config.size.width, config.size.height);
    println!("Seeds: {}", config.seeds);
    if chunk.is_some() {
        println!(
            "Chunk: ({}, {}) to ({}, {})",
            region.start.x, region.start.y, region.end.x, region.end.y
        );
    }

    println!("Generating {} blocks...", region.block_count());
    let blocks = generator::generate_blocks(&config, &region);

    // Biome distribution, most common first
    let stats = ascii::biome_stats(&blocks);
    let mut entries: Vec<_> = stats.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.code().cmp(b.0.code())));
    println!("Biome distribution:");
    for (biome, count) in &entries {
        println!(
            "  {}: {} ({:.1}%)",
            biome.display_name(),
            count,
            100.0 * *count as f64 / blocks.len() as f64
        );
    }

    let output = args.output.unwrap_or_else(|| match config.format {
        OutputFormat::Collection => "world.json".to_string(),
        OutputFormat::Image => "world.png".to_string(),
    });

    match config.format {
        OutputFormat::Collection => {
            if let Err(e) = export::write_collection_json(&blocks, &output) {
                eprintln!("Failed to write collection: {}", e);
                std::process::exit(1);
            }
            println!("Wrote {} blocks to {}", blocks.len(), output);
        }
        OutputFormat::Image => {
            let img = export::render_image(&config.size, &blocks);
            if let Err(e) = export::save_image(&img, &output) {
                eprintln!("Failed to write image: {}", e);
                std::process::exit(1);
            }
            println!("Wrote {}x{} image to {}", img.width(), img.height(), output);
        }
    }

    if args.preview {
        print!("{}", ascii::render_ascii(&blocks, &region));
    }
    if let Some(ref path) = args.ascii {
        if let Err(e) = ascii::export_ascii(&blocks, &region, path) {
            eprintln!("Failed to export ASCII map: {}", e);
        } else {
            println!("Wrote ASCII map to {}", path);
        }
    }
}
