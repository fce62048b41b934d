//! BoundedArray: fixed-capacity array with an arbitrary index origin
//!
//! Every element access is validated against the inclusive range `[lo, hi]`
//! declared at construction. The array never grows or shrinks; the only
//! zero-length state is the empty array (`lo = 0`, `hi = -1`), which is what
//! [`BoundedArray::new`] and [`BoundedArray::take`] leave behind.

use crate::error::{check_index, Result, TabulaError};
use crate::io::TokenInput;
use std::fmt;
use std::io::Read;
use std::mem;
use std::ops::{Index, IndexMut, RangeInclusive};
use std::slice;
use std::str::FromStr;

/// Fixed-capacity array indexed over `[lo, hi]`
///
/// # Examples
///
/// ```rust
/// use tabula::BoundedArray;
///
/// let mut arr: BoundedArray<i32> = BoundedArray::with_bounds(-2, 1)?;
/// *arr.at_mut(-2)? = 7;
/// assert_eq!(arr.len(), 4);
/// assert_eq!(arr[-2], 7);
/// assert!(arr.at(2).is_err());
/// # Ok::<(), tabula::TabulaError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedArray<T> {
    lo: isize,
    hi: isize,
    data: Box<[T]>,
}

impl<T> BoundedArray<T> {
    /// Create an empty array with no storage
    #[inline]
    pub fn new() -> Self {
        Self {
            lo: 0,
            hi: -1,
            data: Vec::new().into_boxed_slice(),
        }
    }

    /// Create an array from a literal sequence, indexed from 0
    pub fn from_vec(values: Vec<T>) -> Result<Self> {
        Self::from_vec_with_origin(0, values)
    }

    /// Create an array from a literal sequence, indexed from `lo`
    pub fn from_vec_with_origin(lo: isize, values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(TabulaError::invalid_bounds(lo, lo.saturating_sub(1)));
        }

        let hi = isize::try_from(values.len() - 1)
            .ok()
            .and_then(|span| lo.checked_add(span))
            .ok_or_else(|| TabulaError::invalid_bounds(lo, isize::MAX))?;

        Ok(Self {
            lo,
            hi,
            data: values.into_boxed_slice(),
        })
    }

    /// Lowest valid index
    #[inline]
    pub fn lo(&self) -> isize {
        self.lo
    }

    /// Highest valid index
    #[inline]
    pub fn hi(&self) -> isize {
        self.hi
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the array is in the empty state
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The valid index range
    #[inline]
    pub fn indices(&self) -> RangeInclusive<isize> {
        self.lo..=self.hi
    }

    #[inline]
    fn slot(&self, index: isize) -> Result<usize> {
        check_index(index, self.lo, self.hi)?;
        Ok((index - self.lo) as usize)
    }

    /// Get a reference to the element at `index`
    #[inline]
    pub fn at(&self, index: isize) -> Result<&T> {
        let slot = self.slot(index)?;
        Ok(&self.data[slot])
    }

    /// Get a mutable reference to the element at `index`
    #[inline]
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let slot = self.slot(index)?;
        Ok(&mut self.data[slot])
    }

    /// Storage starting at `index` and running to `hi`
    ///
    /// This is the bounds-checked counterpart of pointer arithmetic on the
    /// underlying block.
    pub fn offset(&self, index: isize) -> Result<&[T]> {
        let slot = self.slot(index)?;
        Ok(&self.data[slot..])
    }

    /// Mutable storage starting at `index` and running to `hi`
    pub fn offset_mut(&mut self, index: isize) -> Result<&mut [T]> {
        let slot = self.slot(index)?;
        Ok(&mut self.data[slot..])
    }

    /// Get the array as a slice in index order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the array as a mutable slice in index order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over elements in index order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over elements in index order
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Move the contents out, leaving this array empty
    ///
    /// Any later access through `self` fails with `IndexOutOfRange`.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub(crate) fn assign(&mut self, values: Vec<T>) {
        debug_assert_eq!(values.len(), self.data.len());
        for (slot, value) in self.data.iter_mut().zip(values) {
            *slot = value;
        }
    }
}

impl<T: Default> BoundedArray<T> {
    /// Create an array of `size` default elements indexed from 0
    pub fn with_size(size: isize) -> Result<Self> {
        Self::with_bounds(0, size.saturating_sub(1))
    }

    /// Create an array of default elements indexed over `[lo, hi]`
    pub fn with_bounds(lo: isize, hi: isize) -> Result<Self> {
        let size = hi
            .checked_sub(lo)
            .and_then(|span| span.checked_add(1))
            .ok_or_else(|| TabulaError::invalid_bounds(lo, hi))?;
        if size <= 0 {
            return Err(TabulaError::invalid_bounds(lo, hi));
        }

        let data: Vec<T> = std::iter::repeat_with(T::default)
            .take(size as usize)
            .collect();

        Ok(Self {
            lo,
            hi,
            data: data.into_boxed_slice(),
        })
    }
}

impl<T> BoundedArray<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Read exactly `len()` values from `input` in index order
    ///
    /// Nothing is written unless every value parses.
    pub fn read_tokens(&mut self, input: &mut TokenInput<'_>) -> Result<()> {
        let values = Self::parse_values(self.len(), input)?;
        self.assign(values);
        Ok(())
    }

    /// Read exactly `len()` whitespace-separated values from a reader
    pub fn read_from<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut input = TokenInput::from_reader(reader)?;
        self.read_tokens(&mut input)
    }

    pub(crate) fn parse_values(count: usize, input: &mut TokenInput<'_>) -> Result<Vec<T>> {
        (0..count).map(|_| input.read_value()).collect()
    }
}

impl<T> Default for BoundedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<isize> for BoundedArray<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<isize> for BoundedArray<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedArray")
            .field("lo", &self.lo)
            .field("hi", &self.hi)
            .field("data", &self.data)
            .finish()
    }
}

/// Elements in index order separated by single spaces
impl<T: fmt::Display> fmt::Display for BoundedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.data.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for item in iter {
                write!(f, " {}", item)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let arr: BoundedArray<i32> = BoundedArray::new();
        assert!(arr.is_empty());
        assert_eq!(arr.len(), 0);
        assert_eq!((arr.lo(), arr.hi()), (0, -1));
        assert!(arr.at(0).is_err());
    }

    #[test]
    fn test_with_size() {
        let arr: BoundedArray<u8> = BoundedArray::with_size(5).unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!((arr.lo(), arr.hi()), (0, 4));
        assert!(arr.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_with_bounds_custom_origin() {
        let mut arr: BoundedArray<i64> = BoundedArray::with_bounds(10, 12).unwrap();
        *arr.at_mut(10).unwrap() = 1;
        arr[12] = 3;
        assert_eq!(arr.as_slice(), &[1, 0, 3]);
        assert!(arr.at(9).is_err());
        assert!(arr.at(13).is_err());
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            BoundedArray::<i32>::with_size(0),
            Err(TabulaError::InvalidBounds { .. })
        ));
        assert!(matches!(
            BoundedArray::<i32>::with_size(-3),
            Err(TabulaError::InvalidBounds { .. })
        ));
        assert!(matches!(
            BoundedArray::<i32>::with_bounds(3, 1),
            Err(TabulaError::InvalidBounds { lo: 3, hi: 1 })
        ));
        assert!(matches!(
            BoundedArray::<i32>::with_bounds(2, 1),
            Err(TabulaError::InvalidBounds { .. })
        ));
        assert!(BoundedArray::<i32>::with_bounds(isize::MIN, isize::MAX).is_err());
        assert!(BoundedArray::<i32>::from_vec(Vec::new()).is_err());
    }

    #[test]
    fn test_from_vec() {
        let arr = BoundedArray::from_vec(vec!['a', 'b', 'c']).unwrap();
        assert_eq!((arr.lo(), arr.hi()), (0, 2));
        assert_eq!(arr[1], 'b');

        let shifted = BoundedArray::from_vec_with_origin(-1, vec![5, 6]).unwrap();
        assert_eq!((shifted.lo(), shifted.hi()), (-1, 0));
        assert_eq!(shifted[-1], 5);
        assert_eq!(shifted[0], 6);
    }

    #[test]
    fn test_index_out_of_range_reports_index() {
        let arr: BoundedArray<i32> = BoundedArray::with_bounds(0, 3).unwrap();
        match arr.at(4) {
            Err(TabulaError::IndexOutOfRange { index, lo, hi }) => {
                assert_eq!((index, lo, hi), (4, 0, 3));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            arr.at(-1),
            Err(TabulaError::IndexOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "Index 5 out of range")]
    fn test_index_operator_panics() {
        let arr: BoundedArray<i32> = BoundedArray::with_size(5).unwrap();
        let _ = arr[5];
    }

    #[test]
    fn test_offset() {
        let mut arr = BoundedArray::from_vec_with_origin(1, vec![10, 20, 30, 40]).unwrap();
        assert_eq!(arr.offset(1).unwrap(), &[10, 20, 30, 40]);
        assert_eq!(arr.offset(3).unwrap(), &[30, 40]);
        assert_eq!(arr.offset(4).unwrap(), &[40]);
        assert!(arr.offset(0).is_err());
        assert!(arr.offset(5).is_err());

        arr.offset_mut(2).unwrap()[0] = 21;
        assert_eq!(arr[2], 21);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = BoundedArray::from_vec_with_origin(3, vec![1, 2, 3]).unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy[3] = 100;
        assert_eq!(original[3], 1);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut source = BoundedArray::from_vec_with_origin(5, vec![1, 2]).unwrap();
        let moved = source.take();

        assert_eq!(moved.as_slice(), &[1, 2]);
        assert_eq!((moved.lo(), moved.hi()), (5, 6));
        assert!(source.is_empty());
        assert_eq!((source.lo(), source.hi()), (0, -1));
        assert!(matches!(
            source.at(5),
            Err(TabulaError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_display() {
        let arr = BoundedArray::from_vec(vec![3, -1, 4]).unwrap();
        assert_eq!(format!("{}", arr), "3 -1 4");

        let empty: BoundedArray<i32> = BoundedArray::new();
        assert_eq!(format!("{}", empty), "");
    }

    #[test]
    fn test_read_tokens() {
        let mut arr: BoundedArray<i32> = BoundedArray::with_bounds(-1, 1).unwrap();
        let mut input = TokenInput::new("7 8\n9 10");
        arr.read_tokens(&mut input).unwrap();
        assert_eq!(arr.as_slice(), &[7, 8, 9]);
        assert_eq!(input.next_token(), Some("10"));
    }

    #[test]
    fn test_read_tokens_failure_leaves_array_untouched() {
        let mut arr = BoundedArray::from_vec(vec![1, 2, 3]).unwrap();

        let mut short = TokenInput::new("4 5");
        assert!(arr.read_tokens(&mut short).is_err());
        assert_eq!(arr.as_slice(), &[1, 2, 3]);

        let mut garbage = TokenInput::new("4 five 6");
        assert!(arr.read_tokens(&mut garbage).is_err());
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_read_from_reader() {
        let mut arr: BoundedArray<u32> = BoundedArray::with_size(3).unwrap();
        arr.read_from(&b"1 2 3"[..]).unwrap();
        assert_eq!(format!("{}", arr), "1 2 3");
    }

    #[test]
    fn test_iteration() {
        let arr = BoundedArray::from_vec(vec![1, 2, 3]).unwrap();
        let sum: i32 = (&arr).into_iter().sum();
        assert_eq!(sum, 6);
        assert_eq!(arr.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_drop_elements() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let arr = BoundedArray::from_vec(vec![tracker.clone(), tracker.clone()]).unwrap();
            let copy = arr.clone();
            assert_eq!(Rc::strong_count(&tracker), 5);
            drop(copy);
            assert_eq!(Rc::strong_count(&tracker), 3);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
