//! Image and JSON artifact writers.
//!
//! The image pathway paints blocks into a full-map-sized RGBA buffer and
//! encodes it as PNG; the collection pathway serializes blocks in the wire
//! shape consumed by downstream tooling.

use std::fs::File;
use std::io::{Cursor, Write};

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::blocks::Block;
use crate::config::MapSize;

/// Render blocks into a full-map-sized RGBA image.
///
/// Block positions are 1-indexed, so block (x, y) paints pixel (x-1, y-1).
/// The buffer is zero-initialized: pixels no block covers (e.g. when
/// rendering a chunk) stay fully transparent. Blocks outside the map
/// bounds are skipped.
pub fn render_image(size: &MapSize, blocks: &[Block]) -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(size.width, size.height);

    for block in blocks {
        if block.position.x < 1 || block.position.y < 1 {
            continue;
        }
        let px = block.position.x - 1;
        let py = block.position.y - 1;
        if px >= size.width || py >= size.height {
            continue;
        }
        let [r, g, b] = block.biome.color();
        img.put_pixel(px, py, Rgba([r, g, b, 255]));
    }

    img
}

/// Encode an image as PNG bytes in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Save an image as PNG regardless of the path's extension.
pub fn save_image(image: &RgbaImage, path: &str) -> Result<(), image::ImageError> {
    image.save_with_format(path, ImageFormat::Png)
}

/// Serialize blocks into the collection wire format:
/// `[{"position": {"x", "y"}, "biome": {"code", "name", "rgb"}}]`.
pub fn collection_to_json(blocks: &[Block]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(blocks)
}

/// Write the block collection to a JSON file.
pub fn write_collection_json(blocks: &[Block], path: &str) -> Result<(), ExportError> {
    let json = collection_to_json(blocks)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Errors that can occur while writing world artifacts.
#[derive(Debug)]
pub enum ExportError {
    /// IO error (file creation, write failure)
    Io(std::io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// Image encoding error
    Image(image::ImageError),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Json(e) => write!(f, "JSON error: {}", e),
            ExportError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Image(e)
    }
}
