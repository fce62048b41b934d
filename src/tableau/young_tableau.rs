//! YoungTableau: matrix-backed priority structure over `i32`
//!
//! Rows are non-decreasing left to right and columns are non-decreasing top
//! to bottom. Empty cells hold [`SENTINEL`], which therefore collects in the
//! bottom-right region of the grid. The smallest value always sits at
//! `(0, 0)` and the largest at `(m - 1, n - 1)`, so fullness and emptiness
//! are read off the two corners instead of being counted.

use crate::config::{Config, TableauConfig};
use crate::containers::{BoundedArray, BoundedMatrix};
use crate::error::{Result, TabulaError};
use std::fmt;
use std::ops::Index;

/// Marker stored in empty cells
///
/// Treated as larger than every stored value. Inserting it is not rejected,
/// but the cell it lands in reads as empty afterwards.
pub const SENTINEL: i32 = i32::MAX;


/// Fixed-capacity Young tableau
///
/// `add`, `min` and `find` run in O(m + n). Running out of room is an
/// ordinary outcome and is reported through `bool` results, not errors.
///
/// # Examples
///
/// ```rust
/// use tabula::YoungTableau;
///
/// let mut tableau = YoungTableau::new(2, 2)?;
/// for value in [5, 3, 4, 1] {
///     assert!(tableau.add(value));
/// }
/// assert!(tableau.full());
/// assert!(!tableau.add(0));
///
/// assert!(tableau.find(3));
/// assert_eq!(tableau.min(), 1);
/// assert_eq!(tableau.min(), 3);
/// # Ok::<(), tabula::TabulaError>(())
/// ```
#[derive(Debug)]
pub struct YoungTableau {
    m: usize,
    n: usize,
    grid: BoundedMatrix<i32>,
}

impl YoungTableau {
    /// Create an empty `m x n` tableau
    ///
    /// # Errors
    ///
    /// Returns `TabulaError::InvalidDimensions` if either extent is zero or
    /// exceeds `isize::MAX`, or if the cell count does not fit in `usize`.
    pub fn new(m: usize, n: usize) -> Result<Self> {
        let extents = isize::try_from(m).ok().zip(isize::try_from(n).ok());
        let (rows, cols) = match extents {
            Some(extents) if m.checked_mul(n).is_some() => extents,
            // Extents past isize::MAX are reported as isize::MAX
            _ => {
                return Err(TabulaError::invalid_dimensions(
                    isize::try_from(m).unwrap_or(isize::MAX),
                    isize::try_from(n).unwrap_or(isize::MAX),
                ));
            }
        };

        let mut grid = BoundedMatrix::new(rows, cols)?;
        grid.fill(SENTINEL);
        log::debug!("Created {}x{} Young tableau", m, n);

        Ok(Self { m, n, grid })
    }

    /// Create an empty tableau with the configured dimensions
    pub fn from_config(config: &TableauConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.rows, config.cols)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.m
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.n
    }

    /// Maximum number of values the tableau can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.m * self.n
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> i32 {
        self.grid[i as isize][j as isize]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: i32) {
        self.grid[i as isize][j as isize] = value;
    }

    #[inline]
    fn swap_cells(&mut self, (i1, j1): (usize, usize), (i2, j2): (usize, usize)) {
        let a = self.cell(i1, j1);
        let b = self.cell(i2, j2);
        self.set(i1, j1, b);
        self.set(i2, j2, a);
    }

    /// Check whether every cell is occupied
    ///
    /// A moved-from tableau has no cells and is both full and empty.
    #[inline]
    pub fn full(&self) -> bool {
        self.grid.is_empty() || self.cell(self.m - 1, self.n - 1) != SENTINEL
    }

    /// Check whether no cell is occupied
    #[inline]
    pub fn empty(&self) -> bool {
        self.grid.is_empty() || self.cell(0, 0) == SENTINEL
    }

    /// Number of occupied cells, found by scanning the grid
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.grid
            .iter_rows()
            .map(|row| row.iter().take_while(|&&v| v != SENTINEL).count())
            .sum()
    }

    /// Insert `value`, returning `false` if the tableau is full
    ///
    /// The value enters at the bottom-right corner and moves toward the
    /// top-left, each step swapping with the larger of its upper and left
    /// neighbours while it is smaller than that neighbour.
    pub fn add(&mut self, value: i32) -> bool {
        if self.full() {
            log::debug!("Refusing insert of {} into full {}x{} tableau", value, self.m, self.n);
            return false;
        }
        if value == SENTINEL {
            log::warn!("Inserting sentinel value {}; its cell will read as empty", SENTINEL);
        }

        let (mut i, mut j) = (self.m - 1, self.n - 1);
        self.set(i, j, value);

        loop {
            let target = if i == 0 {
                if j == 0 {
                    break;
                }
                (i, j - 1)
            } else if j == 0 {
                (i - 1, j)
            } else if self.cell(i - 1, j) >= self.cell(i, j - 1) {
                (i - 1, j)
            } else {
                (i, j - 1)
            };

            if self.cell(i, j) < self.cell(target.0, target.1) {
                self.swap_cells((i, j), target);
                (i, j) = target;
            } else {
                break;
            }
        }
        true
    }

    /// Remove and return the smallest value
    ///
    /// Callers are expected to check [`empty`](Self::empty) first. On an
    /// empty tableau this returns [`SENTINEL`] and changes nothing.
    ///
    /// The vacated top-left cell is refilled by moving the hole toward the
    /// bottom-right, each step swapping with the smaller of its right and
    /// lower neighbours while that neighbour is smaller.
    pub fn min(&mut self) -> i32 {
        if self.empty() {
            return SENTINEL;
        }

        let value = self.cell(0, 0);
        self.set(0, 0, SENTINEL);

        let (last_row, last_col) = (self.m - 1, self.n - 1);
        let (mut i, mut j) = (0, 0);

        loop {
            let target = if i == last_row {
                if j == last_col {
                    break;
                }
                (i, j + 1)
            } else if j == last_col {
                (i + 1, j)
            } else if self.cell(i, j + 1) <= self.cell(i + 1, j) {
                (i, j + 1)
            } else {
                (i + 1, j)
            };

            if self.cell(i, j) > self.cell(target.0, target.1) {
                self.swap_cells((i, j), target);
                (i, j) = target;
            } else {
                break;
            }
        }
        value
    }

    /// Remove and return the smallest value, or `None` if empty
    pub fn checked_min(&mut self) -> Option<i32> {
        if self.empty() {
            None
        } else {
            Some(self.min())
        }
    }

    /// Check whether `value` is stored
    ///
    /// Staircase search from the bottom-left corner: move up when `value` is
    /// smaller than the current cell, right when it is larger.
    pub fn find(&self, value: i32) -> bool {
        if self.grid.is_empty() {
            return false;
        }

        let (mut i, mut j) = (self.m - 1, 0);
        loop {
            let current = self.cell(i, j);
            if current == value {
                return true;
            }
            if value < current {
                if i == 0 {
                    return false;
                }
                i -= 1;
            } else {
                j += 1;
                if j == self.n {
                    return false;
                }
            }
        }
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.grid.fill(SENTINEL);
    }

    /// Sort `values` ascending by passing them through the tableau
    ///
    /// Returns `false` without touching `values` when there are more values
    /// than cells. Otherwise the tableau is cleared, filled with `values`,
    /// and drained back into `values` in ascending order, leaving it empty.
    ///
    /// To sort only a prefix, pass `&mut values[..count]`.
    pub fn sort(&mut self, values: &mut [i32]) -> bool {
        if values.len() > self.capacity() {
            log::debug!(
                "Refusing to sort {} values in {}x{} tableau",
                values.len(),
                self.m,
                self.n
            );
            return false;
        }

        self.clear();
        for &value in values.iter() {
            self.add(value);
        }
        for slot in values.iter_mut() {
            *slot = self.min();
        }
        true
    }

    /// Row `i` of the backing grid
    pub fn row(&self, i: usize) -> Result<&BoundedArray<i32>> {
        let (lo, hi) = self.grid.row_bounds();
        let index =
            isize::try_from(i).map_err(|_| TabulaError::index_out_of_range(isize::MAX, lo, hi))?;
        self.grid.row(index)
    }

    /// The backing grid
    #[inline]
    pub fn matrix(&self) -> &BoundedMatrix<i32> {
        &self.grid
    }

    /// Check the row and column ordering of every cell
    pub fn is_valid(&self) -> bool {
        for i in 0..self.m {
            for j in 0..self.n {
                let current = self.cell(i, j);
                if i + 1 < self.m && current > self.cell(i + 1, j) {
                    return false;
                }
                if j + 1 < self.n && current > self.cell(i, j + 1) {
                    return false;
                }
            }
        }
        true
    }

    /// Move the contents out, leaving a tableau with no cells
    ///
    /// The moved-from tableau refuses every insert and reports itself both
    /// full and empty.
    pub fn take(&mut self) -> Self {
        let taken = Self {
            m: self.m,
            n: self.n,
            grid: self.grid.take(),
        };
        self.m = 0;
        self.n = 0;
        taken
    }
}

impl Index<usize> for YoungTableau {
    type Output = BoundedArray<i32>;

    fn index(&self, i: usize) -> &Self::Output {
        match self.row(i) {
            Ok(row) => row,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Delegates to the backing matrix; empty cells print as `2147483647`
impl fmt::Display for YoungTableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tableau_with(m: usize, n: usize, values: &[i32]) -> YoungTableau {
        let mut t = YoungTableau::new(m, n).unwrap();
        for &v in values {
            assert!(t.add(v));
            assert!(t.is_valid());
        }
        t
    }

    #[test]
    fn test_new_is_empty() {
        let t = YoungTableau::new(3, 4).unwrap();
        assert!(t.empty());
        assert!(!t.full());
        assert_eq!(t.len(), 0);
        assert_eq!(t.capacity(), 12);
        assert!(t.is_valid());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            YoungTableau::new(0, 3),
            Err(TabulaError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            YoungTableau::new(3, 0),
            Err(TabulaError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            YoungTableau::new(usize::MAX, 2),
            Err(TabulaError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_extents_beyond_isize_are_rejected() {
        let too_tall = isize::MAX as usize + 1;
        assert!(too_tall.checked_mul(1).is_some());

        assert!(matches!(
            YoungTableau::new(too_tall, 1),
            Err(TabulaError::InvalidDimensions { rows: isize::MAX, cols: 1 })
        ));
        assert!(matches!(
            YoungTableau::new(1, usize::MAX),
            Err(TabulaError::InvalidDimensions { rows: 1, cols: isize::MAX })
        ));
    }

    #[test]
    fn test_row_beyond_isize_is_out_of_range() {
        let t = YoungTableau::new(2, 2).unwrap();
        assert!(matches!(
            t.row(usize::MAX),
            Err(TabulaError::IndexOutOfRange { index: isize::MAX, lo: 0, hi: 1 })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_operator_panics_past_last_row() {
        let t = YoungTableau::new(2, 2).unwrap();
        let _ = &t[2];
    }

    #[test]
    fn test_add_fills_and_finds() {
        let t = tableau_with(2, 2, &[5, 3, 4, 1]);
        assert!(t.full());
        assert!(t.find(3));
        assert!(!t.find(9));
        assert_eq!(format!("{}", t), "1 3\n4 5\n");
    }

    #[test]
    fn test_min_drains_in_order() {
        let mut t = tableau_with(2, 2, &[5, 3, 4, 1]);
        let mut drained = Vec::new();
        for _ in 0..4 {
            drained.push(t.min());
            assert!(t.is_valid());
        }
        assert_eq!(drained, vec![1, 3, 4, 5]);
        assert!(t.empty());
    }

    #[test]
    fn test_add_on_full_leaves_tableau_unchanged() {
        let mut t = tableau_with(2, 2, &[5, 3, 4, 1]);
        let before = format!("{}", t);
        assert!(!t.add(0));
        assert_eq!(format!("{}", t), before);
    }

    #[test]
    fn test_min_on_empty_returns_sentinel() {
        let mut t = YoungTableau::new(2, 3).unwrap();
        assert_eq!(t.min(), SENTINEL);
        assert!(t.empty());
        assert_eq!(t.checked_min(), None);

        t.add(7);
        assert_eq!(t.checked_min(), Some(7));
        assert_eq!(t.checked_min(), None);
    }

    #[test]
    fn test_sort() {
        let mut t = YoungTableau::new(2, 2).unwrap();
        let mut values = [5, 3, 4, 1];
        assert!(t.sort(&mut values));
        assert_eq!(values, [1, 3, 4, 5]);
        assert!(t.empty());
    }

    #[test]
    fn test_sort_rejects_oversized_input() {
        let mut t = YoungTableau::new(2, 2).unwrap();
        t.add(42);
        let mut values = [1, 2, 3, 4, 5];
        assert!(!t.sort(&mut values));
        assert_eq!(values, [1, 2, 3, 4, 5]);
        assert!(t.find(42));
    }

    #[test]
    fn test_sort_prefix() {
        let mut t = YoungTableau::new(1, 3).unwrap();
        let mut values = [9, 7, 8, 1, 0];
        assert!(t.sort(&mut values[..3]));
        assert_eq!(values, [7, 8, 9, 1, 0]);
    }

    #[test]
    fn test_sort_clears_previous_contents() {
        let mut t = tableau_with(2, 2, &[100, 200]);
        let mut values = [2, 1];
        assert!(t.sort(&mut values));
        assert_eq!(values, [1, 2]);
        assert!(t.empty());
        assert!(!t.find(100));
    }

    #[test]
    fn test_single_row_and_column() {
        let mut row = tableau_with(1, 4, &[3, -1, 2, 0]);
        assert_eq!(format!("{}", row), "-1 0 2 3\n");
        assert_eq!(row.min(), -1);
        assert!(row.find(3));

        let mut col = tableau_with(4, 1, &[3, -1, 2, 0]);
        assert_eq!(format!("{}", col), "-1\n0\n2\n3\n");
        assert_eq!(col.min(), -1);
        assert_eq!(col.min(), 0);
        assert!(!col.find(0));
    }

    #[test]
    fn test_one_by_one() {
        let mut t = YoungTableau::new(1, 1).unwrap();
        assert!(t.add(i32::MIN));
        assert!(t.full() && !t.empty());
        assert!(!t.add(1));
        assert!(t.find(i32::MIN));
        assert_eq!(t.min(), i32::MIN);
        assert!(t.empty());
    }

    #[test]
    fn test_duplicates() {
        let mut t = tableau_with(3, 3, &[4, 4, 1, 4, 1, 9, 4]);
        assert_eq!(t.len(), 7);
        let drained: Vec<i32> = std::iter::from_fn(|| t.checked_min()).collect();
        assert_eq!(drained, vec![1, 1, 4, 4, 4, 4, 9]);
    }

    #[test]
    fn test_find_after_extraction() {
        let mut t = tableau_with(3, 2, &[10, 20, 30, 40]);
        assert_eq!(t.min(), 10);
        assert!(!t.find(10));
        assert!(t.find(20));
        assert!(t.find(40));
        assert!(!t.find(25));
    }

    #[test]
    fn test_clear() {
        let mut t = tableau_with(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert!(t.full());
        t.clear();
        assert!(t.empty());
        assert_eq!((t.rows(), t.cols()), (2, 3));
        assert!(t.add(8));
    }

    #[test]
    fn test_interleaved_operations() {
        let mut t = YoungTableau::new(3, 4).unwrap();
        let mut reference = Vec::new();
        let script = [12, -3, 7, 7, 0, 25, -8, 14, 3, 3, 19, -1];

        for (step, &value) in script.iter().enumerate() {
            assert!(t.add(value));
            reference.push(value);
            if step % 3 == 2 {
                reference.sort_unstable();
                assert_eq!(t.min(), reference.remove(0));
            }
            assert!(t.is_valid());
            assert_eq!(t.len(), reference.len());
        }
    }

    #[test]
    fn test_row_access() {
        let t = tableau_with(2, 3, &[6, 5, 4]);
        assert_eq!(t.row(0).unwrap().as_slice(), &[4, 5, 6]);
        assert_eq!(t[1].as_slice(), &[SENTINEL; 3]);
        assert!(matches!(
            t.row(2),
            Err(TabulaError::IndexOutOfRange { index: 2, .. })
        ));
        assert_eq!(t.matrix().rows(), 2);
    }

    #[test]
    fn test_display_shows_sentinel() {
        let t = tableau_with(1, 2, &[5]);
        assert_eq!(format!("{}", t), "5 2147483647\n");
    }

    #[test]
    fn test_take_leaves_unusable_shell() {
        let mut source = tableau_with(2, 2, &[2, 1]);
        let mut moved = source.take();

        assert_eq!((moved.rows(), moved.cols()), (2, 2));
        assert_eq!(moved.min(), 1);

        assert_eq!((source.rows(), source.cols()), (0, 0));
        assert!(source.empty());
        assert!(source.full());
        assert!(!source.add(3));
        assert!(!source.find(2));
        assert_eq!(source.min(), SENTINEL);
        assert!(source.row(0).is_err());
        assert!(source.is_valid());
        assert_eq!(format!("{}", source), "");
    }
}
