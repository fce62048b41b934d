//! Bounds-checked container types
//!
//! ## Core Containers
//!
//! - **`BoundedArray<T>`** - Fixed-capacity array over an arbitrary inclusive index range
//! - **`BoundedMatrix<T>`** - Matrix of independently owned `BoundedArray<T>` rows
//!
//! Neither container grows after construction. Out-of-range access returns
//! `TabulaError::IndexOutOfRange` from the checked accessors and panics with
//! the same message through the `[]` operators.

mod bounded_array;
mod bounded_matrix;

pub use bounded_array::BoundedArray;
pub use bounded_matrix::BoundedMatrix;
