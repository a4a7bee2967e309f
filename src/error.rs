//! Error types for the contour generator
//!
//! Contour slicing itself never fails. These errors come from the layers
//! around it: mesh ingestion, configuration loading and option validation.

use thiserror::Error;

/// Error types for contour generation operations
#[derive(Error, Debug)]
pub enum TinContourError {
    /// Failed to parse an ASCII STL file
    ///
    /// Carries the 1-based line number of the offending record.
    #[error("Failed to parse STL at line {line}: {message}")]
    StlParseError { line: usize, message: String },

    /// Mesh file is in an unsupported or malformed format
    #[error("Invalid mesh format: {0}")]
    MeshFormatError(String),

    /// File I/O error
    ///
    /// Wraps standard I/O errors from file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    ///
    /// Invalid configuration file format or missing required fields.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A parameter value is outside its valid range
    ///
    /// Raised for example by a non-positive vertex quantization tolerance.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Convenience type alias for Results with [`TinContourError`]
///
/// # Example
/// ```
/// use tin_contour::Result;
///
/// fn my_function() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TinContourError>;
