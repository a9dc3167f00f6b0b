//! Error types and context management for chart operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all chart operations
#[derive(Debug)]
pub enum ChartError {
    /// Failed to decode a motif image
    ImageDecode {
        /// Name of the motif or file that failed to decode
        source_name: String,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Motif images still decoding when the wait ran out
    DecodeTimeout {
        /// Source motif ids whose decodes had not finished
        motifs: Vec<String>,
        /// How long the pass waited
        waited_ms: u128,
    },

    /// Physical or cell dimension outside the accepted range
    InvalidDimension {
        /// Axis being validated (`"width"` or `"height"`)
        axis: &'static str,
        /// Rejected value
        value: f64,
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
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

    /// No motif with the given id exists on the side
    UnknownMotif {
        /// Placement id that was looked up
        id: u64,
    },

    /// Project file could not be parsed
    ProjectFormat {
        /// Path to the project file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Failed to save a rendered chart to disk
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
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageDecode {
                source_name,
                source,
            } => {
                write!(f, "Failed to decode motif image '{source_name}': {source}")
            }
            Self::DecodeTimeout { motifs, waited_ms } => {
                write!(
                    f,
                    "Motif images still decoding after {waited_ms} ms: {}",
                    motifs.join(", ")
                )
            }
            Self::InvalidDimension {
                axis,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Invalid {axis} {value}: must be between {min} and {max}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownMotif { id } => {
                write!(f, "No placed motif with id {id}")
            }
            Self::ProjectFormat { path, source } => {
                write!(
                    f,
                    "Failed to parse project '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::ProjectFormat { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for chart results
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<image::ImageError> for ChartError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode {
            source_name: "<unknown>".to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::ProjectFormat {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ChartError {
    ChartError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error
pub const fn invalid_dimension(axis: &'static str, value: f64, min: f64, max: f64) -> ChartError {
    ChartError::InvalidDimension {
        axis,
        value,
        min,
        max,
    }
}

/// Attach a path to file system and parse errors that were converted without one
pub trait WithPath<T> {
    /// Replace the placeholder path of a converted error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<ChartError>,
{
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        let path: PathBuf = path.into();
        self.map_err(|e| match e.into() {
            ChartError::FileSystem {
                operation, source, ..
            } => ChartError::FileSystem {
                path,
                operation,
                source,
            },
            ChartError::ProjectFormat { source, .. } => ChartError::ProjectFormat { path, source },
            ChartError::ImageDecode { source, .. } => ChartError::ImageDecode {
                source_name: path.display().to_string(),
                source,
            },
            other => other,
        })
    }
}
