//! Error types and context management for tiling operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all tiling, assembly and export operations
#[derive(Debug)]
pub enum NominoError {
    /// Grid dimensions cannot describe a rectangle
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        columns: usize,
    },

    /// Shape definition violates the catalog invariants
    InvalidShape {
        /// Name of the offending shape
        shape: &'static str,
        /// Description of the violated invariant
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Bounded search expanded more boards than allowed
    ///
    /// This is resource exhaustion, not a failed search: the grid may
    /// still have tilings beyond the budget.
    SearchBudgetExceeded {
        /// Maximum number of boards the caller allowed
        limit: usize,
    },

    /// A grid size used for level assembly has no tiling under the catalog
    NoTilings {
        /// Grid rows
        rows: usize,
        /// Grid columns
        columns: usize,
    },

    /// Placement sequence does not cover the grid exactly once
    Coverage {
        /// Row of the first offending cell
        row: usize,
        /// Column of the first offending cell
        column: usize,
        /// What went wrong at that cell
        reason: &'static str,
    },

    /// Failed to save a rendered tiling to disk
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

impl fmt::Display for NominoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => {
                write!(
                    f,
                    "Invalid grid dimensions {rows}x{columns}: rows and columns must be positive"
                )
            }
            Self::InvalidShape { shape, reason } => {
                write!(f, "Invalid shape '{shape}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SearchBudgetExceeded { limit } => {
                write!(f, "Search budget of {limit} boards exceeded")
            }
            Self::NoTilings { rows, columns } => {
                write!(f, "No tilings exist for a {rows}x{columns} grid")
            }
            Self::Coverage {
                row,
                column,
                reason,
            } => {
                write!(f, "Coverage error at ({row}, {column}): {reason}")
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

impl std::error::Error for NominoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, NominoError>;

/// Attaches the path and operation to bare I/O failures
pub trait WithPath<T> {
    /// Convert an I/O result into a [`NominoError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error wrapped with the path and operation
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| NominoError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for NominoError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> NominoError {
    NominoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid shape error
pub fn invalid_shape(shape: &'static str, reason: &impl ToString) -> NominoError {
    NominoError::InvalidShape {
        shape,
        reason: reason.to_string(),
    }
}
