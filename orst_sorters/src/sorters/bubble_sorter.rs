use std::cmp::Ordering;

use crate::primitives::swap;
use crate::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_sorters::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// # Algorithm
///
/// After pass `p` the largest `p` elements sit at the end of the slice, so each pass scans one
/// pair less than the one before it. A pass that swaps nothing proves the slice is sorted and
/// ends the sort early, which makes already sorted input cost a single pass.
///
/// Equal neighbours are never swapped, so the sort is stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = slice.len();

        for pass in 0..len.saturating_sub(1) {
            let mut swapped = false;
            for i in 1..(len - pass) {
                if compare(&slice[i - 1], &slice[i]) == Ordering::Greater {
                    swap(slice, i - 1, i);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}
