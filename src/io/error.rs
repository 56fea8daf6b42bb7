//! Error types for configuration and output operations
//!
//! The generation core has no recoverable failure modes: off-grid writes,
//! undersized pluses, and out-of-bound walks are all silent policy no-ops.
//! Errors exist only at the boundary, for invalid configuration and for
//! image/filesystem output.

use std::fmt;
use std::path::PathBuf;

/// Main error type for world generation and export
#[derive(Debug)]
pub enum GenerationError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the rendered world to disk
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

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{GenerationError, invalid_parameter};
    use std::error::Error;

    #[test]
    fn invalid_parameter_formats_all_fields() {
        let err = invalid_parameter("width", &0, &"must be positive");
        let message = err.to_string();
        assert!(message.contains("width"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
    }

    #[test]
    fn filesystem_errors_expose_their_source() {
        let err = GenerationError::FileSystem {
            path: "out/world.png".into(),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("create directory"));
    }
}
