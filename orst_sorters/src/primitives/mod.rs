//! Building blocks shared by the sorters: the element swap, the two partition schemes, heap
//! maintenance and the run merge. All of them are stateless free functions that only touch the
//! slice they are handed.

pub mod heap;
pub mod merge;
pub mod partition;

/// Exchanges the elements at `a` and `b`. No other slot is touched.
///
/// # Panics
///
/// Panics if `a` or `b` are out of bounds.
///
/// ```
/// use orst_sorters::primitives::swap;
///
/// let mut slice = ["a", "b", "c"];
/// swap(&mut slice, 0, 2);
/// assert_eq!(slice, ["c", "b", "a"]);
/// ```
#[inline]
pub fn swap<T>(slice: &mut [T], a: usize, b: usize) {
    slice.swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_two_slots() {
        let mut slice = [1, 2, 3, 4];
        swap(&mut slice, 1, 3);
        assert_eq!(slice, [1, 4, 3, 2]);
    }

    #[test]
    fn same_slot_is_noop() {
        let mut slice = [1, 2, 3];
        swap(&mut slice, 1, 1);
        assert_eq!(slice, [1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let mut slice = [1, 2, 3];
        swap(&mut slice, 0, 3);
    }
}
