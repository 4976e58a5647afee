//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Logical grid construction from pixels
//! - Grid padding to tile multiples
//! - Tile data structures and extraction

/// Padding of grids to exact tile multiples
pub mod extension;
/// Logical grid types and construction
pub mod grid;
/// Tile data structures and grid partitioning
pub mod tiles;

pub use grid::{LogicalGrid, Mode, PixelMatrix};
pub use tiles::Tile;
