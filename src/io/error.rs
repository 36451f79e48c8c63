//! Error types for configuration, image and search operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all search operations
#[derive(Debug)]
pub enum SearchError {
    /// Failed to decode a source or reference image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode a raster to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Run configuration failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two images that must be compared pixel by pixel differ in size
    DimensionMismatch {
        /// Dimensions of the first image (width, height)
        expected: (u32, u32),
        /// Dimensions of the second image (width, height)
        found: (u32, u32),
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

    /// Logger could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },

    /// Evaluation worker pool could not be built
    WorkerPool {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Image dimensions differ: {}x{} vs {}x{}",
                    expected.0, expected.1, found.0, found.1
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
            Self::Logging { reason } => write!(f, "Logger setup failed: {reason}"),
            Self::WorkerPool { reason } => write!(f, "Worker pool setup failed: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for search results
pub type Result<T> = std::result::Result<T, SearchError>;

impl From<rayon::ThreadPoolBuildError> for SearchError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SearchError {
    SearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Fail unless both dimension pairs are equal
///
/// # Errors
///
/// Returns [`SearchError::DimensionMismatch`] when the sizes differ
pub fn ensure_same_dimensions(expected: (u32, u32), found: (u32, u32)) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SearchError::DimensionMismatch { expected, found })
    }
}
