//! Max-heap maintenance over an implicit binary tree laid out in a slice: the children of node `i`
//! live at `2i + 1` and `2i + 2`.

use super::swap;

/// Restores the max-heap property at `root` within the heap prefix `[0, heap_size)` by pushing a
/// too small element down towards the leaves.
///
/// Only children below `heap_size` are considered, and an element is exchanged with its larger
/// child only when that child is strictly greater.
pub fn sift_down<T, F>(slice: &mut [T], mut root: usize, heap_size: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(heap_size <= slice.len());

    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_size && is_less(&slice[largest], &slice[left]) {
            largest = left;
        }
        if right < heap_size && is_less(&slice[largest], &slice[right]) {
            largest = right;
        }

        if largest == root {
            return;
        }

        swap(slice, root, largest);
        root = largest;
    }
}

/// Arranges the whole slice into a max-heap, sifting down every non-leaf node starting from the
/// last one.
pub fn make_heap<T, F>(slice: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    for i in (0..len / 2).rev() {
        sift_down(slice, i, len, is_less);
    }
}

/// Moves the maximum of the heap prefix `[0, heap_size)` to `heap_size - 1` and re-heapifies the
/// remaining `heap_size - 1` elements.
pub fn pop_heap<T, F>(slice: &mut [T], heap_size: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if heap_size < 2 {
        return;
    }
    let last = heap_size - 1;
    swap(slice, 0, last);
    sift_down(slice, 0, last, is_less);
}

/// Turns a max-heap into an ascending sequence by repeatedly popping the maximum to the end of
/// the shrinking heap.
pub fn sort_heap<T, F>(slice: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for heap_size in (2..=slice.len()).rev() {
        pop_heap(slice, heap_size, is_less);
    }
}

/// Returns `true` if every parent in the slice is greater than or equal to its children.
pub fn is_heap<T, F>(slice: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..slice.len()).all(|child| !is_less(&slice[(child - 1) / 2], &slice[child]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn sift_down_single_violation() {
        let mut slice = [1, 9, 8, 4, 5, 6, 7];
        sift_down(&mut slice, 0, 7, &mut lt);
        assert_eq!(slice, [9, 5, 8, 4, 1, 6, 7]);
        assert!(is_heap(&slice, &mut lt));
    }

    #[test]
    fn sift_down_respects_heap_size() {
        let mut slice = [1, 2, 9];
        sift_down(&mut slice, 0, 2, &mut lt);
        assert_eq!(slice, [2, 1, 9]);
    }

    #[test]
    fn sift_down_leaves_equal_children() {
        let mut slice = [(5, 'a'), (5, 'b'), (5, 'c')];
        sift_down(&mut slice, 0, 3, &mut |a: &(i32, char), b: &(i32, char)| {
            a.0 < b.0
        });
        assert_eq!(slice, [(5, 'a'), (5, 'b'), (5, 'c')]);
    }

    #[test]
    fn make_heap_builds_max_heap() {
        let mut slice = [5, 2, 9, 1, 7, 0, 1, 2, 3, 1, -2];
        make_heap(&mut slice, &mut lt);
        assert!(is_heap(&slice, &mut lt));
        assert_eq!(slice[0], 9);
    }

    #[test]
    fn pop_heap_moves_max_to_back() {
        let mut slice = [3, 1, 2];
        make_heap(&mut slice, &mut lt);
        pop_heap(&mut slice, 3, &mut lt);
        assert_eq!(slice[2], 3);
        assert!(is_heap(&slice[..2], &mut lt));
    }

    #[test]
    fn make_then_sort_heap() {
        let mut slice = (0..50).rev().collect::<Vec<_>>();
        make_heap(&mut slice, &mut lt);
        sort_heap(&mut slice, &mut lt);
        assert_eq!(slice, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn tiny_heaps() {
        let mut empty: [i32; 0] = [];
        make_heap(&mut empty, &mut lt);
        sort_heap(&mut empty, &mut lt);

        let mut one = [1];
        make_heap(&mut one, &mut lt);
        sort_heap(&mut one, &mut lt);
        assert_eq!(one, [1]);
    }
}
