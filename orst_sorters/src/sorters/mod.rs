pub mod bubble_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod median_quick_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;
