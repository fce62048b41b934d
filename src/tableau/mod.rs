//! Young tableau priority structure
//!
//! A [`YoungTableau`] keeps integers in a fixed `m x n` grid whose rows and
//! columns are both sorted, giving O(m + n) insert, extract-min and search
//! without any dynamic allocation after construction.

mod young_tableau;

pub use young_tableau::{SENTINEL, YoungTableau};
