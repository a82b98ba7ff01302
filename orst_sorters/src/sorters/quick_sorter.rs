use std::cmp::Ordering;

use crate::error::{check_range, Result};
use crate::primitives::partition::lomuto;
use crate::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort) with the Lomuto
/// partition scheme.
///
/// # Usage
///```
/// use orst_sorters::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// // Only sort the inclusive range [1, 3].
/// let mut slice = [9, 5, 4, 2, 0];
/// QuickSorter.sort_range(&mut slice, 1, 3).unwrap();
/// assert_eq!(slice, [9, 2, 4, 5, 0]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting. When implemented well, it can be somewhat
/// faster than merge sort and about two or three times
/// faster than heapsort.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. For this reason,
/// it is sometimes called partition-exchange sort.
/// The sub-arrays are then sorted recursively.
///
/// This sorter always picks the last element of the range as the pivot, so already sorted or
/// reversed input degrades it to O(n²) comparisons. Recursion always descends into the smaller
/// side and loops over the larger one, so the stack depth stays O(log n) even then. Not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

impl QuickSorter {
    /// Sorts the inclusive range `[low, high]` of `slice`. An empty range (`low == high + 1`) is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`](crate::Error::InvalidRange) when `low > high + 1` and
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) when the range reaches past the slice.
    pub fn sort_range<T: Ord>(&self, slice: &mut [T], low: usize, high: usize) -> Result<()> {
        self.sort_range_by(slice, low, high, T::cmp)
    }

    /// Like [`sort_range`](Self::sort_range) with an explicit comparator.
    pub fn sort_range_by<T, F>(
        &self,
        slice: &mut [T],
        low: usize,
        high: usize,
        mut compare: F,
    ) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if check_range(low, high, slice.len())? {
            quicksort(slice, low, high, &mut |a: &T, b: &T| {
                compare(a, b) == Ordering::Less
            });
        }
        Ok(())
    }
}

fn quicksort<T, F>(slice: &mut [T], mut low: usize, mut high: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while low < high {
        let pivot = lomuto(slice, low, high, is_less);

        if pivot - low < high - pivot {
            if pivot > low {
                quicksort(slice, low, pivot - 1, is_less);
            }
            low = pivot + 1;
        } else {
            // The left side is the larger one here, so `pivot > low`.
            if pivot < high {
                quicksort(slice, pivot + 1, high, is_less);
            }
            high = pivot - 1;
        }
    }
}

impl<T> Sorter<T> for QuickSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if slice.len() < 2 {
            return;
        }
        let high = slice.len() - 1;
        quicksort(slice, 0, high, &mut |a: &T, b: &T| {
            compare(a, b) == Ordering::Less
        });
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Error;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        QuickSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        QuickSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        QuickSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn long_sorted_input_does_not_overflow_stack() {
        let mut slice = (0..10_000).collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (0..10_000).collect::<Vec<_>>());
    }

    #[test]
    fn full_range() {
        let mut slice = [5, 2, 9, 1, 7, 0, 1, 2, 3, 1, -2];
        QuickSorter.sort_range(&mut slice, 0, 10).unwrap();
        assert_eq!(slice, [-2, 0, 1, 1, 1, 2, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn empty_and_single_ranges() {
        let mut slice = [3, 2, 1];
        QuickSorter.sort_range(&mut slice, 2, 1).unwrap();
        QuickSorter.sort_range(&mut slice, 1, 1).unwrap();
        assert_eq!(slice, [3, 2, 1]);

        let mut empty: [i32; 0] = [];
        QuickSorter.sort_range(&mut empty, 1, 0).unwrap();
    }

    #[test]
    fn invalid_ranges() {
        let mut slice = [3, 2, 1];
        assert_eq!(
            QuickSorter.sort_range(&mut slice, 3, 0),
            Err(Error::InvalidRange { low: 3, high: 0 })
        );
        assert_eq!(
            QuickSorter.sort_range(&mut slice, 0, 3),
            Err(Error::OutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(slice, [3, 2, 1]);
    }
}
