use std::cmp::Ordering;

use crate::primitives::merge::merge_with_buffer;
use crate::Sorter;

/// An iterative, bottom-up implementation of [Merge
/// Sort](https://en.wikipedia.org/wiki/Merge_sort#Bottom-up_implementation)
///
/// # Usage
///```
/// use orst_sorters::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm invented by John von Neumann in 1945. The
/// bottom-up variant skips the recursive splitting: it treats the input as `n` sorted runs of
/// length one and merges neighbouring runs pairwise, doubling the run width on every pass until
/// one run spans the whole slice.
///
/// Always O(n log n). Needs one scratch buffer the size of the slice, which is allocated once per
/// call and reused by every merge. Ties are resolved in favour of the left run, so the sort is
/// stable. Elements are copied into the buffer, hence the `T: Clone` bound.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

impl<T> Sorter<T> for MergeSorter
where
    T: Clone,
{
    fn sort_by<F>(&self, slice: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = slice.len();
        if len < 2 {
            return;
        }

        let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        let mut buffer = Vec::with_capacity(len);

        let mut width = 1;
        while width < len {
            let mut start = 0;
            // A block whose right run would be empty is already sorted.
            while start + width < len {
                let mid = start + width - 1;
                let end = (start + 2 * width - 1).min(len - 1);
                merge_with_buffer(slice, start, mid, end, &mut buffer, &mut is_less);
                start += 2 * width;
            }
            width *= 2;
        }
    }
}
