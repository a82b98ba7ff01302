//! The two partition schemes behind [`QuickSorter`](crate::QuickSorter) and
//! [`MedianQuickSorter`](crate::MedianQuickSorter).
//!
//! Both operate on an inclusive window `[low, high]` of the slice and leave everything outside
//! that window untouched.

use super::swap;

/// Lomuto partition around the last element of the window.
///
/// Returns the final index `p` of the pivot. On return every element in `[low, p)` is less than
/// or equal to the pivot, every element in `(p, high]` is greater than it, and the pivot sits at
/// its sorted position.
///
/// ```
/// use orst_sorters::primitives::partition::lomuto;
///
/// let mut slice = [7, 2, 9, 1, 5];
/// let p = lomuto(&mut slice, 0, 4, &mut |a: &i32, b: &i32| a < b);
/// assert_eq!(p, 2);
/// assert_eq!(slice[p], 5);
/// ```
pub fn lomuto<T, F>(slice: &mut [T], low: usize, high: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low <= high && high < slice.len());

    // `store` is the first slot not yet known to hold an element <= pivot.
    let mut store = low;
    for current in low..high {
        if !is_less(&slice[high], &slice[current]) {
            swap(slice, store, current);
            store += 1;
        }
    }

    swap(slice, store, high);
    store
}

/// Orders the elements at `low`, `mid` and `high` so that `slice[low] <= slice[mid] <=
/// slice[high]`, using at most three exchanges.
pub fn median_of_three<T, F>(
    slice: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&slice[high], &slice[low]) {
        swap(slice, low, high);
    }
    if is_less(&slice[mid], &slice[low]) {
        swap(slice, low, mid);
    }
    if is_less(&slice[high], &slice[mid]) {
        swap(slice, mid, high);
    }
}

/// Hoare partition with median-of-three pivot selection. Requires `low < high`.
///
/// The median of the first, middle and last element becomes the pivot; it is not moved to a
/// fixed slot. Two cursors walk towards each other, exchanging out of place pairs until they
/// cross. Returns the split point `j` with `low <= j < high`: every element in `[low, j]` is less
/// than or equal to every element in `[j + 1, high]`. The pivot is not necessarily at `j`, so
/// callers must keep `j` in the left half.
///
/// ```
/// use orst_sorters::primitives::partition::hoare_median_of_three;
///
/// let mut slice = [4, 8, 1, 9, 3, 7];
/// let j = hoare_median_of_three(&mut slice, 0, 5, &mut |a: &i32, b: &i32| a < b);
/// let (left, right) = slice.split_at(j + 1);
/// assert!(left.iter().max() <= right.iter().min());
/// ```
pub fn hoare_median_of_three<T, F>(
    slice: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low < high && high < slice.len());

    let mid = low + (high - low) / 2;
    median_of_three(slice, low, mid, high, is_less);

    // The pivot is tracked by index and follows its value through every exchange.
    let mut pivot = mid;
    let mut i = low;
    let mut j = high;

    loop {
        // The bounds guards only matter for comparators that are not a total order.
        while i < high && is_less(&slice[i], &slice[pivot]) {
            i += 1;
        }
        while j > low && is_less(&slice[pivot], &slice[j]) {
            j -= 1;
        }

        if i >= j {
            // A valid order always yields j < high. Clamping keeps both halves non-empty for
            // any other comparator, so the recursion still terminates.
            return j.min(high - 1);
        }

        swap(slice, i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i += 1;
        j -= 1;
    }
}
