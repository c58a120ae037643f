//! Debug chart of the biome classifier over the elevation/moisture plane.
//!
//! Paints one pixel per (elevation, moisture) sample so threshold edits can
//! be eyeballed against the rendered bands.

use image::{ImageBuffer, Rgba, RgbaImage};
use world_generator::biomes::Biome;

fn main() {
    let width = 512u32;
    let height = 512u32;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for py in 0..height {
        for px in 0..width {
            // X sweeps moisture, Y sweeps elevation (top row = highest).
            let moisture = px as f64 / (width - 1) as f64;
            let elevation = 1.0 - py as f64 / (height - 1) as f64;
            let [r, g, b] = Biome::classify(elevation, moisture).color();
            img.put_pixel(px, py, Rgba([r, g, b, 255]));
        }
    }

    img.save("biome_chart.png").unwrap();
    println!("Wrote biome chart to biome_chart.png ({}x{})", width, height);
}
