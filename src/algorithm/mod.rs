//! Pipeline stages wired together into a single processing call

/// Image-to-tiles processor and its configuration
pub mod processor;
