//! # Tabula: Bounds-Checked Grids and Young Tableaux
//!
//! This crate provides fixed-capacity containers that validate every index
//! against a declared range, and a Young tableau priority structure built on
//! top of them.
//!
//! ## Key Features
//!
//! - **BoundedArray**: one-dimensional storage over any inclusive index range, including negative origins
//! - **BoundedMatrix**: independently owned rows with checked `matrix[i][j]` access and add/subtract/multiply
//! - **YoungTableau**: O(m + n) insert, extract-min and search over a sorted `m x n` integer grid
//! - **Partial Sort**: restartable in-place sort of an array prefix
//! - **Configuration**: serde-backed tableau dimensions loadable from the environment or JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula::{BoundedArray, BoundedMatrix, YoungTableau, partial_sort};
//!
//! // Arrays indexed from an arbitrary origin
//! let mut arr = BoundedArray::from_vec_with_origin(-2, vec![3, 1, 2])?;
//! partial_sort(&mut arr, 3);
//! assert_eq!(arr[-2], 1);
//! assert!(arr.at(1).is_err());
//!
//! // Matrix arithmetic with dimension checks
//! let a: BoundedMatrix<i32> = BoundedMatrix::new(2, 3)?;
//! let b: BoundedMatrix<i32> = BoundedMatrix::new(3, 2)?;
//! assert!(a.add(&b).is_err());
//! assert_eq!(a.multiply(&b)?.cols(), 2);
//!
//! // Young tableau as a bounded priority structure
//! let mut tableau = YoungTableau::new(2, 2)?;
//! let mut values = [5, 3, 4, 1];
//! assert!(tableau.sort(&mut values));
//! assert_eq!(values, [1, 3, 4, 5]);
//! # Ok::<(), tabula::TabulaError>(())
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;
pub mod io;
pub mod tableau;

// Re-export core types
pub use algorithms::{partial_sort, partial_sort_slice};
pub use config::{Config, TableauConfig};
pub use containers::{BoundedArray, BoundedMatrix};
pub use error::{Result, TabulaError};
pub use io::TokenInput;
pub use tableau::{SENTINEL, YoungTableau};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing tabula v{}", VERSION);
}
