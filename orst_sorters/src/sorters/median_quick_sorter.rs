use std::cmp::Ordering;

use crate::error::{check_range, Result};
use crate::primitives::partition::hoare_median_of_three;
use crate::Sorter;

/// Quick Sort with median-of-three pivot selection and the [Hoare partition
/// scheme](https://en.wikipedia.org/wiki/Quicksort#Hoare_partition_scheme).
///
/// # Usage
///```
/// use orst_sorters::{MedianQuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MedianQuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut slice = [9, 5, 4, 2, 0];
/// MedianQuickSorter.sort_range(&mut slice, 1, 3).unwrap();
/// assert_eq!(slice, [9, 2, 4, 5, 0]);
///```
///
/// # Explanation
///
/// The pivot is the median of the first, middle and last element of the range, which keeps
/// sorted, reversed and partially sorted input away from the quadratic worst case of a fixed
/// pivot. Hoare's scheme then walks two cursors towards each other and only exchanges pairs that
/// are on the wrong side, which does far fewer swaps than Lomuto.
///
/// The split point returned by the partition is not necessarily the pivot's final slot, so it
/// stays in the left half: `[low, split]` and `[split + 1, high]` are sorted next. Recursion
/// descends into the smaller half and loops over the larger one. Not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianQuickSorter;

impl MedianQuickSorter {
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
        let split = hoare_median_of_three(slice, low, high, is_less);

        // Both halves are non-empty because `low <= split < high`.
        if split - low < high - split - 1 {
            quicksort(slice, low, split, is_less);
            low = split + 1;
        } else {
            quicksort(slice, split + 1, high, is_less);
            high = split;
        }
    }
}

impl<T> Sorter<T> for MedianQuickSorter {
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
