//! Map regions.
//!
//! A region is the rectangle of blocks a generation call covers, either the
//! whole map or a caller-supplied chunk. Coordinates are 1-indexed and both
//! ends are inclusive, so the smallest region is a single block.

use crate::blocks::Position;
use crate::config::MapSize;

/// Inclusive rectangle of 1-indexed block coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub start: Position,
    pub end: Position,
}

impl Region {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// The region covering the whole map.
    pub fn full_map(size: &MapSize) -> Self {
        Self {
            start: Position::new(1, 1),
            end: Position::new(size.width, size.height),
        }
    }

    /// Enforce 1 <= start <= end <= map size on both axes. Runs before any
    /// block is computed; a bad region rejects the whole request.
    pub fn validate(&self, size: &MapSize) -> Result<(), RegionError> {
        check_axis("x", self.start.x, self.end.x, size.width)?;
        check_axis("y", self.start.y, self.end.y, size.height)?;
        Ok(())
    }

    /// Blocks covered horizontally.
    pub fn width(&self) -> u32 {
        self.end.x - self.start.x + 1
    }

    /// Blocks covered vertically.
    pub fn height(&self) -> u32 {
        self.end.y - self.start.y + 1
    }

    /// Total blocks covered; u64 because a full 34000 x 34000 map overflows
    /// u32.
    pub fn block_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.start.x..=self.end.x).contains(&x) && (self.start.y..=self.end.y).contains(&y)
    }
}

fn check_axis(axis: &'static str, start: u32, end: u32, size: u32) -> Result<(), RegionError> {
    if start < 1 {
        return Err(RegionError::StartBelowOne { axis });
    }
    if start > end {
        return Err(RegionError::Unordered { axis, start, end });
    }
    if end > size {
        return Err(RegionError::ExceedsMap { axis, end, size });
    }
    Ok(())
}

/// A requested region violates the map bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Start coordinate below the 1-indexed origin.
    StartBelowOne { axis: &'static str },
    /// Start past end on one axis.
    Unordered { axis: &'static str, start: u32, end: u32 },
    /// End coordinate beyond the map edge.
    ExceedsMap { axis: &'static str, end: u32, size: u32 },
}

impl std::fmt::Display for RegionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionError::StartBelowOne { axis } => {
                write!(f, "chunk start {} must be at least 1", axis)
            }
            RegionError::Unordered { axis, start, end } => {
                write!(f, "chunk start {} ({}) is past its end ({})", axis, start, end)
            }
            RegionError::ExceedsMap { axis, end, size } => {
                write!(f, "chunk end {} ({}) is outside the map (size {})", axis, end, size)
            }
        }
    }
}

impl std::error::Error for RegionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_map_region() {
        let region = Region::full_map(&MapSize::new(10, 8));
        assert_eq!(region.start, Position::new(1, 1));
        assert_eq!(region.end, Position::new(10, 8));
        assert_eq!(region.width(), 10);
        assert_eq!(region.height(), 8);
        assert_eq!(region.block_count(), 80);
        region.validate(&MapSize::new(10, 8)).unwrap();
    }

    #[test]
    fn test_single_block_region() {
        let region = Region::new(Position::new(3, 4), Position::new(3, 4));
        region.validate(&MapSize::new(10, 10)).unwrap();
        assert_eq!(region.width(), 1);
        assert_eq!(region.height(), 1);
        assert_eq!(region.block_count(), 1);
    }

    #[test]
    fn test_unordered_region_rejected() {
        let region = Region::new(Position::new(5, 1), Position::new(3, 10));
        assert_eq!(
            region.validate(&MapSize::new(10, 10)),
            Err(RegionError::Unordered { axis: "x", start: 5, end: 3 })
        );
    }

    #[test]
    fn test_region_past_map_edge_rejected() {
        let region = Region::new(Position::new(1, 1), Position::new(11, 10));
        assert_eq!(
            region.validate(&MapSize::new(10, 10)),
            Err(RegionError::ExceedsMap { axis: "x", end: 11, size: 10 })
        );

        let region = Region::new(Position::new(1, 1), Position::new(10, 12));
        assert_eq!(
            region.validate(&MapSize::new(10, 10)),
            Err(RegionError::ExceedsMap { axis: "y", end: 12, size: 10 })
        );
    }

    #[test]
    fn test_zero_start_rejected() {
        let region = Region::new(Position::new(0, 1), Position::new(5, 5));
        assert_eq!(
            region.validate(&MapSize::new(10, 10)),
            Err(RegionError::StartBelowOne { axis: "x" })
        );
    }

    #[test]
    fn test_end_on_map_edge_is_inclusive() {
        let region = Region::new(Position::new(10, 10), Position::new(10, 10));
        region.validate(&MapSize::new(10, 10)).unwrap();
    }

    #[test]
    fn test_contains() {
        let region = Region::new(Position::new(2, 3), Position::new(4, 6));
        assert!(region.contains(2, 3));
        assert!(region.contains(4, 6));
        assert!(region.contains(3, 5));
        assert!(!region.contains(1, 3));
        assert!(!region.contains(5, 6));
        assert!(!region.contains(3, 7));
    }
}
