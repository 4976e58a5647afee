//! Tile processing pipeline: load, build grid, pad, split, attach clues
//!
//! Every stage takes its input explicitly and returns a new value; the
//! processor itself only holds configuration, so repeated calls on the same
//! input produce identical tile lists.

use std::path::PathBuf;

use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

use crate::analysis::clues::attach_clues;
use crate::io::configuration::{DEFAULT_MODE, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};
use crate::io::error::{Result, ensure_positive};
use crate::io::image::{ImageFormats, load_pixel_matrix};
use crate::spatial::extension::pad_grid;
use crate::spatial::grid::{LogicalGrid, PixelMatrix, build_grid};
use crate::spatial::tiles::{Tile, split_into_tiles};

/// Options recognized by the tile processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Image file to process
    pub path: PathBuf,
    /// Tile width in cells
    pub tile_width: usize,
    /// Tile height in cells
    pub tile_height: usize,
    /// Grid interpretation mode name, `binary` or `color`
    pub mode: String,
    /// Accepted input formats
    pub formats: ImageFormats,
}

impl ProcessorConfig {
    /// Configuration for `path` with default tile size, mode and formats
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            mode: DEFAULT_MODE.to_string(),
            formats: ImageFormats::default(),
        }
    }

    /// Set the tile dimensions
    #[must_use]
    pub const fn with_tile_size(mut self, tile_width: usize, tile_height: usize) -> Self {
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        self
    }

    /// Set the mode by name; unknown names are rejected when the grid is built
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the accepted input formats
    #[must_use]
    pub const fn with_formats(mut self, formats: ImageFormats) -> Self {
        self.formats = formats;
        self
    }

    /// Check the tile dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either tile dimension is zero
    pub fn validate(&self) -> Result<()> {
        ensure_positive("tile_width", self.tile_width)?;
        ensure_positive("tile_height", self.tile_height)?;
        Ok(())
    }
}

/// Converts an image file into clued nonogram tiles
#[derive(Debug, Clone)]
pub struct TileProcessor {
    config: ProcessorConfig,
}

impl TileProcessor {
    /// Create a processor for the given configuration
    pub const fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Decode the configured image into a pixel matrix
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error for an empty path or unsupported extension,
    /// and `ImageLoad` if the file cannot be opened or decoded
    pub fn load_image(&self) -> Result<PixelMatrix> {
        load_pixel_matrix(&self.config.path, self.config.formats)
    }

    /// Interpret pixels under the configured mode
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMode` if the configured mode name is not recognized
    pub fn convert_to_grid(&self, pixels: &PixelMatrix) -> Result<LogicalGrid> {
        build_grid(pixels, &self.config.mode)
    }

    /// Run the whole pipeline and return every tile with clues attached
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage; no partial results are produced
    pub fn process(&self) -> Result<Vec<Tile>> {
        self.config.validate()?;
        let pixels = self.load_image()?;
        let grid = self.convert_to_grid(&pixels)?;
        let tiles = tile_grid(&grid, self.config.tile_width, self.config.tile_height)?;

        tracing::info!(
            path = %self.config.path.display(),
            mode = %grid.mode(),
            tiles = tiles.len(),
            "processed image"
        );

        Ok(tiles)
    }
}

/// Pad, split and attach clues to an already built grid
///
/// Clues are computed per tile in parallel once the full tile list exists;
/// the row-major tile order is preserved.
///
/// # Errors
///
/// Returns an error if either tile dimension is zero or the grid is empty
pub fn tile_grid(grid: &LogicalGrid, tile_width: usize, tile_height: usize) -> Result<Vec<Tile>> {
    let padded = pad_grid(grid, tile_width, tile_height)?;
    let mut tiles = split_into_tiles(&padded, tile_width, tile_height)?;
    tiles.par_iter_mut().for_each(attach_clues);
    Ok(tiles)
}

/// Run the pipeline on an in-memory pixel matrix
///
/// # Errors
///
/// Returns `UnsupportedMode` for an unknown mode name, or any error from
/// [`tile_grid`]
pub fn process_pixels(
    pixels: &PixelMatrix,
    mode: &str,
    tile_width: usize,
    tile_height: usize,
) -> Result<Vec<Tile>> {
    let grid = build_grid(pixels, mode)?;
    tile_grid(&grid, tile_width, tile_height)
}
