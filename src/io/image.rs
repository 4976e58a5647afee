//! Image path validation and decoding into pixel matrices

use std::path::Path;

use clap::ValueEnum;
use ndarray::Array2;

use crate::io::configuration::{PNG_EXTENSIONS, PNG_JPEG_EXTENSIONS};
use crate::io::error::{NonogramError, Result, validation_error};
use crate::spatial::grid::PixelMatrix;

/// Set of image formats accepted as input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormats {
    /// PNG files only
    #[default]
    Png,
    /// PNG and JPEG files
    PngJpeg,
}

impl ImageFormats {
    /// File extensions (lowercase, without dot) in this set
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Png => PNG_EXTENSIONS,
            Self::PngJpeg => PNG_JPEG_EXTENSIONS,
        }
    }

    /// Human readable list used in validation messages
    pub const fn description(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::PngJpeg => "PNG or JPEG",
        }
    }

    /// Whether the path's extension belongs to this set
    pub fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
    }
}

/// Check an input path before any decoding is attempted
///
/// # Errors
///
/// Returns a `Validation` error if:
/// - The path is empty
/// - The extension is not one of the accepted formats
pub fn validate_image_path(path: &Path, formats: ImageFormats) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(validation_error(&"Image path must be provided"));
    }

    if !formats.accepts(path) {
        return Err(validation_error(&format!(
            "Unsupported image format. Use {}.",
            formats.description()
        )));
    }

    Ok(())
}

/// Load an image file as an RGB pixel matrix of shape (height, width)
///
/// Alpha channels are discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The path fails validation (see [`validate_image_path`])
/// - The file does not exist or cannot be read
/// - The file contents cannot be decoded as an image
pub fn load_pixel_matrix(path: &Path, formats: ImageFormats) -> Result<PixelMatrix> {
    validate_image_path(path, formats)?;

    let img = image::open(path).map_err(|e| NonogramError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb_img = img.to_rgb8();

    let (width, height) = (rgb_img.width() as usize, rgb_img.height() as usize);
    let pixels: Vec<_> = rgb_img.pixels().map(|pixel| pixel.0).collect();

    let matrix = Array2::from_shape_vec((height, width), pixels).map_err(|e| {
        NonogramError::InvalidSourceData {
            reason: format!("Decoded pixel buffer does not match {height}x{width}: {e}"),
        }
    })?;

    tracing::debug!(path = %path.display(), height, width, "loaded image");

    Ok(matrix)
}
