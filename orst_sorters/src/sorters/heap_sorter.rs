use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::primitives::heap::{make_heap, sift_down, sort_heap};
use crate::primitives::swap;
use crate::Sorter;

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use orst_sorters::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Heapsort views the slice as an implicit binary tree and first rearranges it into a max-heap,
/// where every parent is at least as large as its children. The root is then the maximum; it is
/// exchanged with the last element of the heap, the heap shrinks by one and the new root is sifted
/// down to restore the heap. Repeating this fills the slice from the back with the largest
/// remaining element.
///
/// O(n log n) in every case with no auxiliary memory. Not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

impl HeapSorter {
    /// Sorts the half-open range `[first, last)` of `slice` with the two bulk heap operations,
    /// [`make_heap`] followed by [`sort_heap`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `first > last`, [`Error::OutOfBounds`] if `last` is past the
    /// end of the slice.
    ///
    /// ```
    /// use orst_sorters::HeapSorter;
    ///
    /// let mut slice = [9, 4, 3, 2, 1, 0];
    /// HeapSorter.sort_bounds(&mut slice, 1, 5).unwrap();
    /// assert_eq!(slice, [9, 1, 2, 3, 4, 0]);
    /// ```
    pub fn sort_bounds<T: Ord>(&self, slice: &mut [T], first: usize, last: usize) -> Result<()> {
        self.sort_bounds_by(slice, first, last, T::cmp)
    }

    /// Like [`sort_bounds`](Self::sort_bounds) with an explicit comparator.
    pub fn sort_bounds_by<T, F>(
        &self,
        slice: &mut [T],
        first: usize,
        last: usize,
        compare: F,
    ) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if first > last {
            return Err(Error::InvalidRange {
                low: first,
                high: last,
            });
        }
        if last > slice.len() {
            return Err(Error::OutOfBounds {
                index: last,
                len: slice.len(),
            });
        }

        self.sort_bulk_by(&mut slice[first..last], compare);
        Ok(())
    }

    /// Sorts the whole slice with [`make_heap`] followed by [`sort_heap`].
    pub fn sort_bulk_by<T, F>(&self, slice: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        make_heap(slice, &mut is_less);
        sort_heap(slice, &mut is_less);
    }
}

impl<T> Sorter<T> for HeapSorter {
    fn sort_by<F>(&self, slice: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = slice.len();
        let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;

        // Build the heap bottom-up, starting at the last node that has children.
        for i in (0..len / 2).rev() {
            sift_down(slice, i, len, &mut is_less);
        }

        for end in (1..len).rev() {
            swap(slice, 0, end);
            sift_down(slice, 0, end, &mut is_less);
        }
    }
}
