//! Grid padding to exact tile multiples
//!
//! Padding never mutates its input: a new array is allocated with the target
//! dimensions and the original cells are copied into its top-left corner.

use ndarray::Array2;

use crate::io::error::{NonogramError, Result, ensure_positive};
use crate::spatial::grid::{CellValue, LogicalGrid};

/// Cells to append so `length` becomes a multiple of `tile`
///
/// Equivalent to `(-length) mod tile`; zero when already aligned.
pub const fn padding_needed(length: usize, tile: usize) -> usize {
    if tile == 0 {
        return 0;
    }
    (tile - length % tile) % tile
}

/// Types that can be padded with a background value
pub trait Padded: Sized {
    /// Return a copy grown by `pad_rows` at the bottom and `pad_cols` on the right
    fn padded(&self, pad_rows: usize, pad_cols: usize) -> Self;
}

impl<C: CellValue> Padded for Array2<C> {
    fn padded(&self, pad_rows: usize, pad_cols: usize) -> Self {
        let (rows, cols) = self.dim();
        Self::from_shape_fn((rows + pad_rows, cols + pad_cols), |index| {
            self.get(index).copied().unwrap_or(C::BACKGROUND)
        })
    }
}

impl Padded for LogicalGrid {
    fn padded(&self, pad_rows: usize, pad_cols: usize) -> Self {
        match self {
            Self::Binary(cells) => Self::Binary(cells.padded(pad_rows, pad_cols)),
            Self::Color(cells) => Self::Color(cells.padded(pad_rows, pad_cols)),
        }
    }
}

/// Extend a grid with background cells so both dimensions divide evenly by the tile size
///
/// Binary grids are filled with 0, color grids with pure white.
///
/// # Errors
///
/// Returns an error if:
/// - Either tile dimension is zero
/// - The grid has no rows or no columns
pub fn pad_grid(grid: &LogicalGrid, tile_width: usize, tile_height: usize) -> Result<LogicalGrid> {
    let tile_width = ensure_positive("tile_width", tile_width)?;
    let tile_height = ensure_positive("tile_height", tile_height)?;

    if grid.is_empty() {
        return Err(NonogramError::InvalidSourceData {
            reason: "Cannot pad an empty grid".to_string(),
        });
    }

    let (rows, cols) = grid.dim();
    let pad_rows = padding_needed(rows, tile_height);
    let pad_cols = padding_needed(cols, tile_width);

    tracing::debug!(rows, cols, pad_rows, pad_cols, "padding grid");

    Ok(grid.padded(pad_rows, pad_cols))
}
