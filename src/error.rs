//! Error handling for the tabula library
//!
//! Indexing and dimension problems are reported through [`TabulaError`].
//! Capacity limits of the tableau are not errors and never appear here.

use thiserror::Error;

/// Main error type for the tabula library
#[derive(Error, Debug)]
pub enum TabulaError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A declared index range has non-positive size
    #[error("Invalid bounds: [{lo}, {hi}] has size {}", range_size(.lo, .hi))]
    InvalidBounds {
        /// Lower bound of the rejected range
        lo: isize,
        /// Upper bound of the rejected range
        hi: isize,
    },

    /// A declared row or column extent is non-positive
    #[error("Invalid dimensions: row size {rows}, column size {cols}")]
    InvalidDimensions {
        /// Requested number of rows
        rows: isize,
        /// Requested number of columns
        cols: isize,
    },

    /// Index outside the container's declared range
    #[error("Index {index} out of range [{lo}, {hi}]")]
    IndexOutOfRange {
        /// The offending index
        index: isize,
        /// Lowest valid index
        lo: isize,
        /// Highest valid index
        hi: isize,
    },

    /// Operand extents are incompatible for a matrix operation
    #[error("Dimension mismatch: {message}")]
    DimensionMismatch {
        /// Description of the mismatch
        message: String,
    },

    /// Textual input could not be parsed into container elements
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl TabulaError {
    /// Create an invalid bounds error
    pub fn invalid_bounds(lo: isize, hi: isize) -> Self {
        Self::InvalidBounds { lo, hi }
    }

    /// Create an invalid dimensions error
    pub fn invalid_dimensions(rows: isize, cols: isize) -> Self {
        Self::InvalidDimensions { rows, cols }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: isize, lo: isize, hi: isize) -> Self {
        Self::IndexOutOfRange { index, lo, hi }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<S: Into<String>>(message: S) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Bounds, dimension and index errors point at caller logic bugs and are
    /// not recoverable by retrying.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Parse { .. } => true,
            Self::InvalidBounds { .. } => false,
            Self::InvalidDimensions { .. } => false,
            Self::IndexOutOfRange { .. } => false,
            Self::DimensionMismatch { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidBounds { .. } => "bounds",
            Self::InvalidDimensions { .. } => "dimensions",
            Self::IndexOutOfRange { .. } => "index",
            Self::DimensionMismatch { .. } => "mismatch",
            Self::Parse { .. } => "parse",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Size of `[lo, hi]`, widened so extreme bounds cannot overflow
fn range_size(lo: &isize, hi: &isize) -> i128 {
    *hi as i128 - *lo as i128 + 1
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TabulaError>;

/// Assert that an index lies within the inclusive range `[lo, hi]`
#[inline]
pub fn check_index(index: isize, lo: isize, hi: isize) -> Result<()> {
    if index < lo || index > hi {
        Err(TabulaError::index_out_of_range(index, lo, hi))
    } else {
        Ok(())
    }
}
