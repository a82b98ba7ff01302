//! Merging of two adjacent sorted runs.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]` of `slice` into one sorted run
/// `[left, right]`, using `compare` for ordering. Ties are taken from the left run first, so the
/// merge is stable.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] unless `left <= mid <= right`, and [`Error::OutOfBounds`] if
/// `right` is past the end of the slice.
///
/// # Usage
///
/// ```
/// use orst_sorters::primitives::merge::merge;
///
/// let mut slice = [1, 4, 7, 2, 3, 9];
/// merge(&mut slice, 0, 2, 5, i32::cmp).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 7, 9]);
/// ```
pub fn merge<T, F>(
    slice: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    mut compare: F,
) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if left > mid || mid > right {
        return Err(Error::InvalidRange {
            low: left,
            high: right,
        });
    }
    if right >= slice.len() {
        return Err(Error::OutOfBounds {
            index: right,
            len: slice.len(),
        });
    }

    let mut buffer = Vec::with_capacity(right - left + 1);
    merge_with_buffer(slice, left, mid, right, &mut buffer, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
    Ok(())
}

/// Unchecked merge that reuses `buffer` as scratch space. The buffer is cleared first and holds
/// the merged run afterwards.
pub(crate) fn merge_with_buffer<T, F>(
    slice: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    buffer: &mut Vec<T>,
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left <= mid && mid <= right && right < slice.len());

    buffer.clear();

    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        // Only take from the right run when it is strictly smaller.
        if is_less(&slice[j], &slice[i]) {
            buffer.push(slice[j].clone());
            j += 1;
        } else {
            buffer.push(slice[i].clone());
            i += 1;
        }
    }

    buffer.extend_from_slice(&slice[i..=mid]);
    buffer.extend_from_slice(&slice[j..=right]);

    slice[left..=right].clone_from_slice(&buffer[..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_interleaved_runs() {
        let mut slice = [1, 3, 5, 2, 4, 6];
        merge(&mut slice, 0, 2, 5, i32::cmp).unwrap();
        assert_eq!(slice, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merges_inner_window_only() {
        let mut slice = [9, 5, 8, 1, 2, 0];
        merge(&mut slice, 1, 2, 4, i32::cmp).unwrap();
        assert_eq!(slice, [9, 1, 2, 5, 8, 0]);
    }

    #[test]
    fn uneven_runs() {
        let mut slice = [4, 1, 2, 3];
        merge(&mut slice, 0, 0, 3, i32::cmp).unwrap();
        assert_eq!(slice, [1, 2, 3, 4]);

        let mut slice = [2, 3, 4, 1];
        merge(&mut slice, 0, 2, 3, i32::cmp).unwrap();
        assert_eq!(slice, [1, 2, 3, 4]);
    }

    #[test]
    fn empty_right_run() {
        let mut slice = [1, 2, 3];
        merge(&mut slice, 0, 2, 2, i32::cmp).unwrap();
        assert_eq!(slice, [1, 2, 3]);
    }

    #[test]
    fn ties_favor_left_run() {
        let mut slice = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        merge(&mut slice, 0, 1, 3, |a, b| a.0.cmp(&b.0)).unwrap();
        assert_eq!(slice, [(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd')]);
    }

    #[test]
    fn rejects_bad_indices() {
        let mut slice = [1, 2, 3];
        assert_eq!(
            merge(&mut slice, 2, 1, 2, i32::cmp),
            Err(Error::InvalidRange { low: 2, high: 2 })
        );
        assert_eq!(
            merge(&mut slice, 0, 1, 3, i32::cmp),
            Err(Error::OutOfBounds { index: 3, len: 3 })
        );
    }
}
