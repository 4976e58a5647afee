//! Partitioning of a padded grid into positioned tiles
//!
//! Tiles are emitted in row-major order over tile boundaries: the first row of
//! tiles left to right, then the next row, and so on. Consumers depend on this
//! order.

use ndarray::Array2;
use serde::Serialize;

use crate::analysis::clues::Clue;
use crate::io::error::{Result, ensure_positive, invalid_parameter};
use crate::spatial::grid::{CellValue, LogicalGrid};

/// Zero-based (row, col) coordinate of a tile within the tile grid
pub type TilePosition = (usize, usize);

/// Fixed-size sub-grid of the padded image with its own clues
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Coordinate within the tile grid
    pub position: TilePosition,
    /// Cells covered by this tile, `tile_height` x `tile_width`
    pub grid: LogicalGrid,
    /// One clue sequence per grid row, scanned left to right
    pub row_clues: Vec<Vec<Clue>>,
    /// One clue sequence per grid column, scanned top to bottom
    pub col_clues: Vec<Vec<Clue>>,
}

impl Tile {
    /// Create a tile without clues
    pub const fn new(position: TilePosition, grid: LogicalGrid) -> Self {
        Self {
            position,
            grid,
            row_clues: Vec::new(),
            col_clues: Vec::new(),
        }
    }
}

/// Number of tiles along each axis as (tile rows, tile cols)
pub const fn tile_counts(
    grid_dim: (usize, usize),
    tile_width: usize,
    tile_height: usize,
) -> (usize, usize) {
    (
        grid_dim.0.div_ceil(tile_height),
        grid_dim.1.div_ceil(tile_width),
    )
}

// Chunks come out in logical row-major order, so the flat index maps
// straight back to a tile coordinate
fn split_cells<C: CellValue>(
    cells: &Array2<C>,
    tile_width: usize,
    tile_height: usize,
) -> Vec<(TilePosition, Array2<C>)> {
    let (tile_rows, tile_cols) = tile_counts(cells.dim(), tile_width, tile_height);
    let mut pieces = Vec::with_capacity(tile_rows * tile_cols);

    for (index, piece) in cells
        .exact_chunks((tile_height, tile_width))
        .into_iter()
        .enumerate()
    {
        pieces.push(((index / tile_cols, index % tile_cols), piece.to_owned()));
    }

    pieces
}

/// Split a padded grid into tiles in row-major order
///
/// Clue fields of the returned tiles are empty.
///
/// # Errors
///
/// Returns an error if:
/// - Either tile dimension is zero
/// - The grid dimensions are not exact multiples of the tile size
pub fn split_into_tiles(
    grid: &LogicalGrid,
    tile_width: usize,
    tile_height: usize,
) -> Result<Vec<Tile>> {
    let tile_width = ensure_positive("tile_width", tile_width)?;
    let tile_height = ensure_positive("tile_height", tile_height)?;

    let (rows, cols) = grid.dim();
    if rows % tile_height != 0 || cols % tile_width != 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{rows}x{cols}"),
            &format!("grid is not padded to a multiple of {tile_height}x{tile_width} tiles"),
        ));
    }

    let tiles: Vec<Tile> = match grid {
        LogicalGrid::Binary(cells) => split_cells(cells, tile_width, tile_height)
            .into_iter()
            .map(|(position, piece)| Tile::new(position, LogicalGrid::Binary(piece)))
            .collect(),
        LogicalGrid::Color(cells) => split_cells(cells, tile_width, tile_height)
            .into_iter()
            .map(|(position, piece)| Tile::new(position, LogicalGrid::Color(piece)))
            .collect(),
    };

    tracing::debug!(count = tiles.len(), tile_width, tile_height, "split grid");

    Ok(tiles)
}
