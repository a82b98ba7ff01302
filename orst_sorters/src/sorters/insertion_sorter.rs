use std::cmp::Ordering;

use crate::primitives::swap;
use crate::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// Sorting is typically done in-place, by iterating up the array, growing the sorted list behind
/// it. At each array-position, it checks the value there against the largest value in the sorted
/// list (which happens to be next to it, in the previous array- position checked). If larger, it
/// leaves the element in place and moves to the next. If smaller, it finds the correct position
/// within the sorted list, shifts all the larger values up to make a space, and inserts into that
/// correct position.
///
/// With `smart: true` the insertion point is found with a binary search instead of a linear scan
/// and the key is rotated into place. Both variants only move the key past strictly greater
/// elements, so both are stable.
///
/// # Usage
///```
/// use orst_sorters::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter { smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

impl<T> Sorter<T> for InsertionSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for unsorted in 1..slice.len() {
            if !self.smart {
                let mut i = unsorted;
                while i > 0 && compare(&slice[i - 1], &slice[i]) == Ordering::Greater {
                    swap(slice, i - 1, i);
                    i -= 1;
                }
            } else {
                let (sorted, rest) = slice.split_at(unsorted);
                let key = &rest[0];
                // Upper bound: the key goes after every element that is not greater than it.
                let i = sorted.partition_point(|x| compare(x, key) != Ordering::Greater);
                slice[i..=unsorted].rotate_right(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::cell::Cell;

    #[test]
    fn arbitrary_array_smart() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn arbitrary_array_lame() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array_smart() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_array_lame() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_smart() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_lame() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases_smart() {
        let mut empty: Vec<i32> = vec![];
        InsertionSorter { smart: true }.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        InsertionSorter { smart: true }.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        InsertionSorter { smart: true }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter { smart: true }.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn simple_edge_cases_lame() {
        let mut empty: Vec<i32> = vec![];
        InsertionSorter { smart: false }.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        InsertionSorter { smart: false }.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        InsertionSorter { smart: false }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter { smart: false }.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn stable_both_ways() {
        let input = [(3, 'a'), (1, 'b'), (3, 'c'), (1, 'd'), (2, 'e'), (1, 'f')];
        let expected = [(1, 'b'), (1, 'd'), (1, 'f'), (2, 'e'), (3, 'a'), (3, 'c')];

        for smart in [true, false] {
            let mut slice = input;
            InsertionSorter { smart }.sort_by_key(&mut slice, |pair| pair.0);
            assert_eq!(slice, expected);
        }
    }

    #[test]
    fn sorted_input_is_linear() {
        let comparisons = Cell::new(0);
        let mut slice = (0..100).collect::<Vec<_>>();
        InsertionSorter::default().sort_by(&mut slice, |a, b| {
            comparisons.set(comparisons.get() + 1);
            a.cmp(b)
        });
        assert_eq!(comparisons.get(), 99);
    }
}
