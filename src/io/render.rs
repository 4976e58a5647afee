//! Text and JSON presentation of processed tiles

use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::io::error::Result;
use crate::spatial::grid::LogicalGrid;
use crate::spatial::tiles::Tile;

/// Output format for rendered tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable listing
    #[default]
    Text,
    /// JSON array of tile records
    Json,
}

/// Tiles produced from one image in a multi-image run
#[derive(Debug, Clone, Serialize)]
pub struct ImageTiles {
    /// Source image
    pub path: PathBuf,
    /// Tiles in row-major order
    pub tiles: Vec<Tile>,
}

fn bracketed<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// One display line per grid row
pub fn grid_lines(grid: &LogicalGrid) -> Vec<String> {
    match grid {
        LogicalGrid::Binary(cells) => cells
            .rows()
            .into_iter()
            .map(|row| bracketed(row.iter()))
            .collect(),
        LogicalGrid::Color(cells) => cells
            .rows()
            .into_iter()
            .map(|row| bracketed(row.iter().map(|[r, g, b]| format!("({r}, {g}, {b})"))))
            .collect(),
    }
}

/// Write tiles as a readable listing
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn render_text<W: Write>(tiles: &[Tile], out: &mut W) -> Result<()> {
    for tile in tiles {
        let (row, col) = tile.position;
        writeln!(out, "Tile at ({row}, {col}):")?;
        writeln!(out, "Grid:")?;
        for line in grid_lines(&tile.grid) {
            writeln!(out, "{line}")?;
        }
        writeln!(
            out,
            "Row clues: {}",
            bracketed(tile.row_clues.iter().map(|line| bracketed(line.iter())))
        )?;
        writeln!(
            out,
            "Column clues: {}",
            bracketed(tile.col_clues.iter().map(|line| bracketed(line.iter())))
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write tiles as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails
pub fn render_json<W: Write>(tiles: &[Tile], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, tiles)?;
    writeln!(out)?;
    Ok(())
}

/// Write tiles in the requested format
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails
pub fn render<W: Write>(tiles: &[Tile], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(tiles, out),
        OutputFormat::Json => render_json(tiles, out),
    }
}

/// Write results for several images as one JSON array of `{path, tiles}` records
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails
pub fn render_batch_json<W: Write>(batch: &[ImageTiles], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, batch)?;
    writeln!(out)?;
    Ok(())
}
