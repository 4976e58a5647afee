//! Tests for image path validation and pixel matrix decoding

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use nonotiles::NonogramError;
    use nonotiles::io::configuration::WHITE;
    use nonotiles::io::image::{ImageFormats, load_pixel_matrix, validate_image_path};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests the empty path precondition
    // Verified by removing the empty path check
    #[test]
    fn test_validate_empty_path() {
        match validate_image_path(Path::new(""), ImageFormats::Png) {
            Err(NonogramError::Validation { reason }) => {
                assert!(reason.contains("path must be provided"), "{reason}");
            }
            other => unreachable!("Expected Validation error, got {other:?}"),
        }
    }

    // Tests extension checks per format set, case-insensitively
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_validate_extensions() {
        assert!(validate_image_path(Path::new("a.png"), ImageFormats::Png).is_ok());
        assert!(validate_image_path(Path::new("dir/A.PNG"), ImageFormats::Png).is_ok());
        assert!(validate_image_path(Path::new("a.jpg"), ImageFormats::Png).is_err());
        assert!(validate_image_path(Path::new("a.jpg"), ImageFormats::PngJpeg).is_ok());
        assert!(validate_image_path(Path::new("a.jpeg"), ImageFormats::PngJpeg).is_ok());
        assert!(validate_image_path(Path::new("png"), ImageFormats::Png).is_err());
        assert!(validate_image_path(Path::new("dummy.txt"), ImageFormats::PngJpeg).is_err());
    }

    // Tests the validation message names the accepted formats
    // Verified by using a fixed message for both sets
    #[test]
    fn test_validation_messages() {
        let png_only = validate_image_path(Path::new("dummy.txt"), ImageFormats::Png)
            .unwrap_err()
            .to_string();
        let both = validate_image_path(Path::new("dummy.txt"), ImageFormats::PngJpeg)
            .unwrap_err()
            .to_string();

        assert!(png_only.contains("Unsupported image format. Use PNG."));
        assert!(both.contains("Unsupported image format. Use PNG or JPEG."));
    }

    // Tests decoded pixels keep row-major (height, width) layout
    // Verified by transposing the matrix
    #[test]
    fn test_load_pixel_matrix_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.png");
        let mut img = RgbImage::from_pixel(3, 2, Rgb(WHITE));
        img.put_pixel(2, 0, Rgb([10, 20, 30]));
        img.put_pixel(0, 1, Rgb([0, 0, 0]));
        img.save(&path).unwrap();

        let matrix = load_pixel_matrix(&path, ImageFormats::Png).unwrap();

        assert_eq!(matrix.dim(), (2, 3));
        assert_eq!(matrix.get((0, 2)), Some(&[10, 20, 30]));
        assert_eq!(matrix.get((1, 0)), Some(&[0, 0, 0]));
        assert_eq!(matrix.get((1, 2)), Some(&WHITE));
    }

    // Tests alpha is dropped when converting to RGB
    // Verified by rejecting images with an alpha channel
    #[test]
    fn test_load_drops_alpha() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("alpha.png");
        RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 128]))
            .save(&path)
            .unwrap();

        let matrix = load_pixel_matrix(&path, ImageFormats::Png).unwrap();

        assert_eq!(matrix.get((0, 0)), Some(&[1, 2, 3]));
    }

    // Tests missing and corrupt files map to image load errors
    // Verified by returning an empty matrix on failure
    #[test]
    fn test_load_failures() {
        let temp_dir = TempDir::new().unwrap();
        let corrupt = temp_dir.path().join("corrupt.png");
        fs::write(&corrupt, "not a png").unwrap();
        let missing = temp_dir.path().join("missing.png");

        match load_pixel_matrix(&missing, ImageFormats::Png) {
            Err(NonogramError::ImageLoad { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
        assert!(matches!(
            load_pixel_matrix(&corrupt, ImageFormats::Png),
            Err(NonogramError::ImageLoad { .. })
        ));
    }

    // Tests JPEG input is decoded when enabled
    // Verified by restricting decoding to PNG
    #[test]
    fn test_load_jpeg_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("photo.jpg");
        RgbImage::from_pixel(4, 2, Rgb([0, 0, 0])).save(&path).unwrap();

        assert!(load_pixel_matrix(&path, ImageFormats::Png).is_err());
        let matrix = load_pixel_matrix(&path, ImageFormats::PngJpeg).unwrap();
        assert_eq!(matrix.dim(), (2, 4));
    }
}
