//! BoundedMatrix: two-dimensional bounds-checked container
//!
//! A matrix is a [`BoundedArray`] of rows, each row a [`BoundedArray<T>`]
//! with its own storage over the shared column range. `matrix[i][j]` checks
//! the row index against the row range and the column index against the
//! column range.
//!
//! Arithmetic results are always addressed from `(0, 0)`, whatever the
//! origins of the operands.

use crate::containers::BoundedArray;
use crate::error::{Result, TabulaError};
use crate::io::TokenInput;
use std::fmt;
use std::io::Read;
use std::mem;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice;
use std::str::FromStr;

/// Number of indices in `[lo, hi]`, or 0 when the range is empty or overflows
#[inline]
fn extent(lo: isize, hi: isize) -> isize {
    hi.checked_sub(lo)
        .and_then(|span| span.checked_add(1))
        .unwrap_or(0)
}

/// Fixed-size matrix indexed over `[r_lo, r_hi] x [c_lo, c_hi]`
///
/// # Examples
///
/// ```rust
/// use tabula::BoundedMatrix;
///
/// let mut a: BoundedMatrix<i32> = BoundedMatrix::new(2, 3)?;
/// let mut b: BoundedMatrix<i32> = BoundedMatrix::new(3, 2)?;
/// a[0][0] = 1;
/// b[0][1] = 5;
///
/// assert!(a.add(&b).is_err());
/// let product = a.multiply(&b)?;
/// assert_eq!((product.rows(), product.cols()), (2, 2));
/// assert_eq!(product[0][1], 5);
/// # Ok::<(), tabula::TabulaError>(())
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct BoundedMatrix<T> {
    r_lo: isize,
    r_hi: isize,
    c_lo: isize,
    c_hi: isize,
    rows: BoundedArray<BoundedArray<T>>,
}

impl<T: Default> BoundedMatrix<T> {
    /// Create a `dim x dim` matrix indexed from `(0, 0)`
    pub fn square(dim: isize) -> Result<Self> {
        Self::new(dim, dim)
    }

    /// Create a `rows x cols` matrix indexed from `(0, 0)`
    pub fn new(rows: isize, cols: isize) -> Result<Self> {
        Self::with_bounds(0, rows.saturating_sub(1), 0, cols.saturating_sub(1))
    }

    /// Create a matrix over rows `[r1, r2]` and columns `[c1, c2]`
    pub fn with_bounds(r1: isize, r2: isize, c1: isize, c2: isize) -> Result<Self> {
        let row_size = extent(r1, r2);
        let col_size = extent(c1, c2);
        if row_size <= 0 || col_size <= 0 {
            return Err(TabulaError::invalid_dimensions(row_size, col_size));
        }

        let rows = (r1..=r2)
            .map(|_| BoundedArray::with_bounds(c1, c2))
            .collect::<Result<Vec<_>>>()?;
        let rows = BoundedArray::from_vec_with_origin(r1, rows)?;

        log::debug!(
            "Allocated {}x{} matrix over rows [{}, {}], columns [{}, {}]",
            row_size,
            col_size,
            r1,
            r2,
            c1,
            c2
        );

        Ok(Self {
            r_lo: r1,
            r_hi: r2,
            c_lo: c1,
            c_hi: c2,
            rows,
        })
    }
}

impl<T> BoundedMatrix<T> {
    fn empty() -> Self {
        Self {
            r_lo: 0,
            r_hi: -1,
            c_lo: 0,
            c_hi: -1,
            rows: BoundedArray::new(),
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            extent(self.c_lo, self.c_hi) as usize
        }
    }

    /// Inclusive row range `(r_lo, r_hi)`
    #[inline]
    pub fn row_bounds(&self) -> (isize, isize) {
        (self.r_lo, self.r_hi)
    }

    /// Inclusive column range `(c_lo, c_hi)`
    #[inline]
    pub fn col_bounds(&self) -> (isize, isize) {
        (self.c_lo, self.c_hi)
    }

    /// Row and column extents as signed sizes; `(0, 0)` once moved out of
    #[inline]
    fn extents(&self) -> (isize, isize) {
        if self.rows.is_empty() {
            (0, 0)
        } else {
            (extent(self.r_lo, self.r_hi), extent(self.c_lo, self.c_hi))
        }
    }

    /// Check whether the matrix has been moved out of
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get row `i`
    #[inline]
    pub fn row(&self, i: isize) -> Result<&BoundedArray<T>> {
        self.rows.at(i)
    }

    /// Get row `i` mutably
    #[inline]
    pub fn row_mut(&mut self, i: isize) -> Result<&mut BoundedArray<T>> {
        self.rows.at_mut(i)
    }

    /// Get the element at row `i`, column `j`
    #[inline]
    pub fn get(&self, i: isize, j: isize) -> Result<&T> {
        self.row(i)?.at(j)
    }

    /// Get the element at row `i`, column `j` mutably
    #[inline]
    pub fn get_mut(&mut self, i: isize, j: isize) -> Result<&mut T> {
        self.row_mut(i)?.at_mut(j)
    }

    /// Iterate over rows in index order
    #[inline]
    pub fn iter_rows(&self) -> slice::Iter<'_, BoundedArray<T>> {
        self.rows.iter()
    }

    /// Overwrite every element with `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for row in self.rows.iter_mut() {
            row.as_mut_slice().fill(value.clone());
        }
    }

    /// Move the contents out, leaving this matrix with no rows
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    fn ensure_same_extent(&self, other: &Self, op: &str) -> Result<()> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(TabulaError::dimension_mismatch(format!(
                "cannot {} {}x{} and {}x{} matrices",
                op,
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, op: &str, f: F) -> Result<Self>
    where
        T: Default,
        F: Fn(&T, &T) -> T,
    {
        self.ensure_same_extent(other, op)?;
        let (rows, cols) = self.extents();
        let mut result = Self::new(rows, cols)?;

        for (out_row, (a_row, b_row)) in result
            .rows
            .iter_mut()
            .zip(self.rows.iter().zip(other.rows.iter()))
        {
            for (out, (a, b)) in out_row.iter_mut().zip(a_row.iter().zip(b_row.iter())) {
                *out = f(a, b);
            }
        }
        Ok(result)
    }

    /// Element-wise sum; both operands must have the same extents
    pub fn add(&self, other: &Self) -> Result<Self>
    where
        T: Clone + Default + Add<Output = T>,
    {
        self.zip_with(other, "add", |a, b| a.clone() + b.clone())
    }

    /// Element-wise difference; both operands must have the same extents
    pub fn subtract(&self, other: &Self) -> Result<Self>
    where
        T: Clone + Default + Sub<Output = T>,
    {
        self.zip_with(other, "subtract", |a, b| a.clone() - b.clone())
    }

    /// Matrix product; requires `self.cols() == other.rows()`
    ///
    /// The result is `self.rows() x other.cols()`. `T::default()` is the
    /// additive identity the sums start from.
    pub fn multiply(&self, other: &Self) -> Result<Self>
    where
        T: Clone + Default + Add<Output = T> + Mul<Output = T>,
    {
        if self.cols() != other.rows() {
            return Err(TabulaError::dimension_mismatch(format!(
                "impossible product of {}x{} and {}x{} matrices",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }

        let mut result = Self::new(self.extents().0, other.extents().1)?;
        for (out_row, a_row) in result.rows.iter_mut().zip(self.rows.iter()) {
            for (j, out) in out_row.iter_mut().enumerate() {
                let mut acc = T::default();
                for (a, b_row) in a_row.iter().zip(other.rows.iter()) {
                    acc = acc + a.clone() * b_row.as_slice()[j].clone();
                }
                *out = acc;
            }
        }
        Ok(result)
    }
}

impl<T> BoundedMatrix<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Read every row in order from `input`
    ///
    /// Nothing is written unless the whole matrix parses.
    pub fn read_tokens(&mut self, input: &mut TokenInput<'_>) -> Result<()> {
        let parsed = self
            .rows
            .iter()
            .map(|row| BoundedArray::<T>::parse_values(row.len(), input))
            .collect::<Result<Vec<_>>>()?;

        for (row, values) in self.rows.iter_mut().zip(parsed) {
            row.assign(values);
        }
        Ok(())
    }

    /// Read every row in order from a reader
    pub fn read_from<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut input = TokenInput::from_reader(reader)?;
        self.read_tokens(&mut input)
    }
}

impl<T> Index<isize> for BoundedMatrix<T> {
    type Output = BoundedArray<T>;

    fn index(&self, i: isize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<T> IndexMut<isize> for BoundedMatrix<T> {
    fn index_mut(&mut self, i: isize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

/// One newline-terminated line per row
impl<T: fmt::Display> fmt::Display for BoundedMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
