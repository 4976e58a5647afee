//! Random example images for trying out the tile processor
//!
//! Each pixel is one nonogram cell. Filled cells are black, or a random color
//! when color output is requested; empty cells are white.

use std::path::{Path, PathBuf};

use image::{Rgb as Pixel, RgbImage};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{FILL_PROBABILITY, WHITE};
use crate::io::error::{NonogramError, Result, invalid_parameter};

const BLACK: [u8; 3] = [0, 0, 0];

/// Build a random nonogram solution image in memory
///
/// The same seed always yields the same image.
pub fn random_solution(width: u32, height: u32, color: bool, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbImage::from_fn(width, height, |_, _| {
        if !rng.random_bool(FILL_PROBABILITY) {
            Pixel(WHITE)
        } else if color {
            Pixel(rng.random::<[u8; 3]>())
        } else {
            Pixel(BLACK)
        }
    })
}

/// Write a random nonogram solution image and return its absolute path
///
/// # Errors
///
/// Returns an error if:
/// - `width` or `height` is zero
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn generate_solution_image(
    path: &Path,
    width: u32,
    height: u32,
    color: bool,
    seed: u64,
) -> Result<PathBuf> {
    if width == 0 {
        return Err(invalid_parameter("width", &width, &"must be a positive integer"));
    }
    if height == 0 {
        return Err(invalid_parameter("height", &height, &"must be a positive integer"));
    }

    let img = random_solution(width, height, color, seed);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| NonogramError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| NonogramError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), width, height, color, seed, "generated example image");

    std::path::absolute(path).map_err(|e| NonogramError::FileSystem {
        path: path.to_path_buf(),
        operation: "resolve absolute path",
        source: e,
    })
}
