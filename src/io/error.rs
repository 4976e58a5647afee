//! Error types for image loading, grid processing and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile processing operations
#[derive(Debug)]
pub enum NonogramError {
    /// Input failed a precondition check before any I/O took place
    ///
    /// Raised for a missing path or an extension outside the supported set
    Validation {
        /// Description of the failed precondition
        reason: String,
    },

    /// Failed to open or decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Grid interpretation mode is not one of the recognized names
    UnsupportedMode {
        /// The mode name that was requested
        mode: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid data doesn't meet processing requirements
    InvalidSourceData {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing rendered tiles failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Encoding tiles as JSON failed
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for NonogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { reason } => write!(f, "Validation failed: {reason}"),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsupportedMode { mode } => {
                write!(f, "Unsupported mode '{mode}' (expected 'binary' or 'color')")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Output { source } => write!(f, "Failed to write output: {source}"),
            Self::Serialization { source } => {
                write!(f, "Failed to serialize tiles: {source}")
            }
        }
    }
}

impl std::error::Error for NonogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for processing results
pub type Result<T> = std::result::Result<T, NonogramError>;

impl From<serde_json::Error> for NonogramError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<std::io::Error> for NonogramError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create a validation error
pub fn validation_error(reason: &impl ToString) -> NonogramError {
    NonogramError::Validation {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> NonogramError {
    NonogramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a zero tile dimension
///
/// # Errors
///
/// Returns `InvalidParameter` naming `parameter` when `value` is zero
pub fn ensure_positive(parameter: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(invalid_parameter(parameter, &value, &"must be a positive integer"))
    } else {
        Ok(value)
    }
}
