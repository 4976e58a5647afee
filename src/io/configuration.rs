//! Processing constants and runtime configuration defaults

/// A single RGB pixel value
pub type Rgb = [u8; 3];

/// Pure white, the background color of every grid
pub const WHITE: Rgb = [255, 255, 255];

/// Background cell value for binary grids
pub const BINARY_BACKGROUND: u8 = 0;

/// Cell value marking a filled binary cell
pub const BINARY_FILLED: u8 = 1;

// Default values for configurable parameters
/// Default tile width in cells
pub const DEFAULT_TILE_WIDTH: usize = 5;

/// Default tile height in cells
pub const DEFAULT_TILE_HEIGHT: usize = 5;

/// Default grid interpretation mode name
pub const DEFAULT_MODE: &str = "binary";

// Extensions are compared case-insensitively
/// Extensions accepted when only PNG input is enabled
pub const PNG_EXTENSIONS: &[&str] = &["png"];

/// Extensions accepted when PNG and JPEG input are enabled
pub const PNG_JPEG_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// Example generator settings
/// Default output path for generated example images
pub const DEFAULT_EXAMPLE_PATH: &str = "example_nonogram_solution.png";

/// Default width of generated example images
pub const DEFAULT_EXAMPLE_WIDTH: u32 = 20;

/// Default height of generated example images
pub const DEFAULT_EXAMPLE_HEIGHT: u32 = 20;

/// Fixed seed for reproducible example generation
pub const DEFAULT_SEED: u64 = 42;

/// Probability that a generated cell is filled
pub const FILL_PROBABILITY: f64 = 0.5;

// Lane layout
/// Lane block sizes from innermost to outermost: fives nested in tens
pub const LANE_LEVEL_SIZES: [usize; 2] = [5, 10];

// Progress bar display settings
/// Minimum batch size before a progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "nonotiles=warn";
