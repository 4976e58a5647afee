//! Run-length clue generation for tile rows and columns
//!
//! A line is scanned in order and grouped into maximal runs of equal cells.
//! Every run that is not background becomes one clue. Background cells never
//! count toward a clue and always end the current run; in color mode a run
//! also ends whenever the color changes. A line without any filled cell is
//! described by a single zero-length sentinel clue.

use std::fmt;

use ndarray::Array2;
use serde::Serialize;

use crate::io::configuration::Rgb;
use crate::spatial::grid::{CellValue, LogicalGrid};
use crate::spatial::tiles::Tile;

/// One maximal run of filled cells along a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Clue {
    /// Run length of filled cells in a binary grid
    Binary(usize),
    /// Color and run length of a single-colored run
    Color(Rgb, usize),
}

impl Clue {
    /// Number of cells covered by this run
    pub const fn length(&self) -> usize {
        match self {
            Self::Binary(length) | Self::Color(_, length) => *length,
        }
    }

    /// Whether this is the marker for a line with no filled cells
    pub const fn is_empty_sentinel(&self) -> bool {
        self.length() == 0
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(length) => write!(f, "{length}"),
            Self::Color([r, g, b], length) => write!(f, "(({r}, {g}, {b}), {length})"),
        }
    }
}

/// Row clues and column clues for one grid
pub type ClueSet = (Vec<Vec<Clue>>, Vec<Vec<Clue>>);

/// Cells that can be summarized as clues
pub trait IntoClue: CellValue {
    /// Clue describing a run of `length` cells of this value
    fn into_clue(self, length: usize) -> Clue;
}

impl IntoClue for u8 {
    fn into_clue(self, length: usize) -> Clue {
        Clue::Binary(length)
    }
}

impl IntoClue for Rgb {
    fn into_clue(self, length: usize) -> Clue {
        Clue::Color(self, length)
    }
}

/// Group a line into maximal runs of equal values, dropping background runs
pub fn line_runs<C: CellValue>(line: impl IntoIterator<Item = C>) -> Vec<(C, usize)> {
    let mut runs: Vec<(C, usize)> = Vec::new();
    for cell in line {
        match runs.last_mut() {
            Some((value, length)) if *value == cell => *length += 1,
            _ => runs.push((cell, 1)),
        }
    }
    runs.retain(|(value, _)| *value != C::BACKGROUND);
    runs
}

/// Clue sequence for one line
///
/// Never empty: a line with no filled cells yields the background sentinel,
/// `[0]` for binary lines and `[(white, 0)]` for color lines.
pub fn line_clues<C: IntoClue>(line: impl IntoIterator<Item = C>) -> Vec<Clue> {
    let clues: Vec<Clue> = line_runs(line)
        .into_iter()
        .map(|(value, length)| value.into_clue(length))
        .collect();

    if clues.is_empty() {
        vec![C::BACKGROUND.into_clue(0)]
    } else {
        clues
    }
}

fn cell_clues<C: IntoClue>(cells: &Array2<C>) -> ClueSet {
    let row_clues = cells
        .rows()
        .into_iter()
        .map(|row| line_clues(row.iter().copied()))
        .collect();
    let col_clues = cells
        .t()
        .rows()
        .into_iter()
        .map(|col| line_clues(col.iter().copied()))
        .collect();
    (row_clues, col_clues)
}

/// Compute row clues (left to right) and column clues (top to bottom) for a grid
pub fn generate_clues(grid: &LogicalGrid) -> ClueSet {
    match grid {
        LogicalGrid::Binary(cells) => cell_clues(cells),
        LogicalGrid::Color(cells) => cell_clues(cells),
    }
}

/// Fill in a tile's clue fields from its own grid
pub fn attach_clues(tile: &mut Tile) {
    let (row_clues, col_clues) = generate_clues(&tile.grid);
    tile.row_clues = row_clues;
    tile.col_clues = col_clues;
}
