//! Per-tile analysis producing nonogram clues

/// Run-length clue generation for rows and columns
pub mod clues;
/// Nested five and ten lane blocks for puzzle layout
pub mod lanes;
