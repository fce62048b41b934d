//! Restartable in-place prefix sort
//!
//! A backward-bubbling scan: move right while the prefix is ordered, and on
//! the first inversion swap the pair and step back one position. Worst case
//! O(k^2), O(k) on an already-sorted prefix. Elements past the prefix are
//! never touched.

use crate::containers::BoundedArray;

/// Sort the first `min(k, values.len())` elements of a slice in place
///
/// Only strict inversions (`values[i] < values[i - 1]`) are swapped, so
/// equal elements keep their relative order and incomparable values cannot
/// make the scan cycle.
///
/// # Examples
///
/// ```rust
/// use tabula::algorithms::partial_sort_slice;
///
/// let mut values = [4, 2, 3, 1, 0];
/// partial_sort_slice(&mut values, 3);
/// assert_eq!(values, [2, 3, 4, 1, 0]);
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn partial_sort_slice<T: PartialOrd>(values: &mut [T], k: usize) {
    let cap = k.min(values.len());
    let mut i = 0;

    while i < cap {
        if i == 0 || !(values[i] < values[i - 1]) {
            i += 1;
        } else {
            values.swap(i - 1, i);
            i -= 1;
        }
    }
}

/// Sort the first `min(k, array.len())` elements of a bounded array in place
///
/// The prefix is counted from `array.lo()` regardless of the array's origin.
pub fn partial_sort<T: PartialOrd>(array: &mut BoundedArray<T>, k: usize) {
    partial_sort_slice(array.as_mut_slice(), k);
}
