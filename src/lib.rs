//! Split raster images into independent nonogram tiles with run-length clues
//!
//! An image is decoded into a pixel matrix, interpreted as a binary or color
//! grid, padded to a multiple of the tile size, cut into tiles in row-major
//! order, and every tile receives its own row and column clues.

#![forbid(unsafe_code)]

/// Tile processing pipeline orchestration
pub mod algorithm;
/// Clue generation for tile rows and columns
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid construction, padding and tiling
pub mod spatial;

pub use algorithm::processor::{ProcessorConfig, TileProcessor};
pub use io::error::{NonogramError, Result};
