//! Logical grid construction from decoded pixel data
//!
//! A grid is either binary (0 = empty, 1 = filled) or color (the original RGB
//! triple per cell). The interpretation is carried explicitly as a [`Mode`]
//! tag on [`LogicalGrid`] so later stages never guess it from cell contents.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Serialize, Serializer};

use crate::io::configuration::{BINARY_BACKGROUND, BINARY_FILLED, Rgb, WHITE};
use crate::io::error::{NonogramError, Result};

/// Decoded image as a row-major matrix of RGB pixels, shape (height, width)
pub type PixelMatrix = Array2<Rgb>;

/// How pixels are interpreted when building a logical grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Any non-white pixel becomes a filled cell
    #[default]
    Binary,
    /// Cells keep their original color
    Color,
}

impl Mode {
    /// Name used on the command line and in configuration
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = NonogramError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "binary" => Ok(Self::Binary),
            "color" => Ok(Self::Color),
            other => Err(NonogramError::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Cell types that can populate a grid
pub trait CellValue: Copy + PartialEq + Send + Sync + fmt::Debug + Serialize {
    /// The empty cell, used for padding and excluded from clues
    const BACKGROUND: Self;
}

impl CellValue for u8 {
    const BACKGROUND: Self = BINARY_BACKGROUND;
}

impl CellValue for Rgb {
    const BACKGROUND: Self = WHITE;
}

/// Rectangular grid of cells tagged with its interpretation mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalGrid {
    /// Binary cells, 0 or 1
    Binary(Array2<u8>),
    /// Color cells, unmodified pixel triples
    Color(Array2<Rgb>),
}

impl LogicalGrid {
    /// Interpret a pixel matrix under the given mode
    pub fn from_pixels(pixels: &PixelMatrix, mode: Mode) -> Self {
        match mode {
            Mode::Binary => Self::Binary(pixels.mapv(|pixel| {
                if pixel == WHITE {
                    BINARY_BACKGROUND
                } else {
                    BINARY_FILLED
                }
            })),
            Mode::Color => Self::Color(pixels.clone()),
        }
    }

    /// The mode this grid was built under
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Binary(_) => Mode::Binary,
            Self::Color(_) => Mode::Color,
        }
    }

    /// Grid dimensions as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Self::Binary(cells) => cells.dim(),
            Self::Color(cells) => cells.dim(),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.dim().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.dim().1
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Binary cells, if this is a binary grid
    pub const fn as_binary(&self) -> Option<&Array2<u8>> {
        match self {
            Self::Binary(cells) => Some(cells),
            Self::Color(_) => None,
        }
    }

    /// Color cells, if this is a color grid
    pub const fn as_color(&self) -> Option<&Array2<Rgb>> {
        match self {
            Self::Color(cells) => Some(cells),
            Self::Binary(_) => None,
        }
    }
}

// Serialized as nested rows so consumers see the plain 2-D layout
impl Serialize for LogicalGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Binary(cells) => serialize_rows(cells, serializer),
            Self::Color(cells) => serialize_rows(cells, serializer),
        }
    }
}

fn serialize_rows<C: CellValue, S: Serializer>(
    cells: &Array2<C>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(cells.rows().into_iter().map(|row| row.to_vec()))
}

/// Build a logical grid from pixels using a mode given by name
///
/// # Errors
///
/// Returns `UnsupportedMode` if `mode` is neither `binary` nor `color`
pub fn build_grid(pixels: &PixelMatrix, mode: &str) -> Result<LogicalGrid> {
    let mode = mode.parse::<Mode>()?;
    let (rows, cols) = pixels.dim();
    tracing::debug!(rows, cols, %mode, "building grid");
    Ok(LogicalGrid::from_pixels(pixels, mode))
}
