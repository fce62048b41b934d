//! Sorting utilities over bounded containers

pub mod partial_sort;

pub use partial_sort::{partial_sort, partial_sort_slice};
