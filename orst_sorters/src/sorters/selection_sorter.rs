use std::cmp::Ordering;

use crate::primitives::swap;
use crate::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_sorters::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large  lists, and generally
/// performs worse than the similar insertion sort. Selection sort is noted for its
/// simplicity and has performance advantages over more complicated algorithms
/// in certain situations, particularly where auxiliary memory is
/// limited.
///
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. Initially, the sorted sublist is
/// empty and the unsorted sublist is the entire input
/// list. The algorithm proceeds by finding the smallest
/// element in the unsorted sublist, exchanging (swapping
/// ) it with the leftmost unsorted element (putting
/// it in sorted order), and moving the sublist
/// boundaries one element to the right.
///
/// The long-distance exchange can jump an element over its equals, so the sort is not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter {
    fn sort_by<F>(&self, slice: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = slice.len();

        for unsorted in 0..len.saturating_sub(1) {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..len {
                if compare(&slice[i], &slice[smallest_in_rest]) == Ordering::Less {
                    smallest_in_rest = i;
                }
            }
            if unsorted != smallest_in_rest {
                swap(slice, unsorted, smallest_in_rest);
            }
        }
    }
}
