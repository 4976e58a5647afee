//! Input/output, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error types shared by every stage
pub mod error;
/// Random example image generation
pub mod generate;
/// Image path validation and decoding
pub mod image;
/// Progress display for multi-image runs
pub mod progress;
/// Text and JSON rendering of tiles
pub mod render;
