//! # Introduction
//!
//! Classic in-memory sorting algorithms over generic slices, one [`Sorter`] per algorithm.
//!
//! | Sorter                | Time (worst) | Extra space | Stable |
//! |-----------------------|--------------|-------------|--------|
//! | [`BubbleSorter`]      | O(n²)        | O(1)        | yes    |
//! | [`InsertionSorter`]   | O(n²)        | O(1)        | yes    |
//! | [`SelectionSorter`]   | O(n²)        | O(1)        | no     |
//! | [`MergeSorter`]       | O(n log n)   | O(n)        | yes    |
//! | [`HeapSorter`]        | O(n log n)   | O(1)        | no     |
//! | [`QuickSorter`]       | O(n²)        | O(log n)    | no     |
//! | [`MedianQuickSorter`] | O(n²)        | O(log n)    | no     |
//!
//! # Example
//!
//! ```
//! use orst_sorters::{render, MergeSorter, OrstExt, Sorter};
//!
//! let mut slice = vec![5, 2, 9, 1, 7, 0, 1, 2, 3, 1, -2];
//! MergeSorter.sort(&mut slice);
//! assert_eq!(render(&slice), "-2 0 1 1 1 2 2 3 5 7 9");
//!
//! let mut names = ["Mona", "Aman", "Hamed"];
//! names.orst(&MergeSorter);
//! assert_eq!(names, ["Aman", "Hamed", "Mona"]);
//! ```

pub mod benchmark;
mod error;
pub mod primitives;
mod sorters;

use std::cmp::Ordering;
use std::fmt::Display;

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

pub use error::{Error, Result};
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::median_quick_sorter::MedianQuickSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Only [`sort_by`](Sorter::sort_by) has to be provided. Every sort arranges the slice in
/// non-decreasing order according to the comparator, which must describe a total order for the
/// result to be sorted. Any other comparator never causes a panic, but leaves the order
/// unspecified.
pub trait Sorter<T> {
    /// Sorts the slice with a comparator function.
    fn sort_by<F>(&self, slice: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts the slice by the natural order of `T`.
    fn sort(&self, slice: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(slice, T::cmp)
    }

    /// Sorts the slice by the key that `f` extracts from every element.
    fn sort_by_key<K, F>(&self, slice: &mut [T], mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(slice, |a, b| f(a).cmp(&f(b)))
    }
}

/// Lets a slice be sorted in place by any [`Sorter`].
///
/// ```
/// use orst_sorters::{HeapSorter, OrstExt};
///
/// let mut values = vec![3, 1, 2];
/// values.orst(&HeapSorter);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub trait OrstExt<T> {
    fn orst<S>(&mut self, sorter: &S)
    where
        S: Sorter<T>,
        T: Ord;
}

impl<T> OrstExt<T> for [T] {
    #[inline]
    fn orst<S>(&mut self, sorter: &S)
    where
        S: Sorter<T>,
        T: Ord,
    {
        sorter.sort(self)
    }
}

/// Consumes `values` and returns them sorted by `sorter`.
///
/// ```
/// use orst_sorters::{sorted, QuickSorter};
///
/// assert_eq!(sorted(vec![2, 3, 1], &QuickSorter), [1, 2, 3]);
/// ```
pub fn sorted<T, S>(mut values: Vec<T>, sorter: &S) -> Vec<T>
where
    T: Ord,
    S: Sorter<T>,
{
    sorter.sort(&mut values);
    values
}

/// Renders the elements separated by single spaces.
///
/// ```
/// use orst_sorters::render;
///
/// assert_eq!(render(&["Adam", "Aman"]), "Adam Aman");
/// assert_eq!(render::<i32>(&[]), "");
/// ```
pub fn render<T: Display>(slice: &[T]) -> String {
    slice
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every sorter this crate provides, selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Bubble sort with early termination
    Bubble,

    /// Insertion sort with a linear scan
    Insertion,

    /// Insertion sort with a binary search for the insertion point
    BinaryInsertion,

    /// Selection sort
    Selection,

    /// Iterative bottom-up merge sort
    Merge,

    /// Heap sort with explicit sift-down
    Heap,

    /// Heap sort through the make-heap and sort-heap bulk operations
    HeapBulk,

    /// Quick sort with the Lomuto partition
    Quick,

    /// Quick sort with median-of-three pivot and the Hoare partition
    QuickMedian,
}

impl Algorithm {
    /// Sorts `slice` with the sorter this variant stands for.
    pub fn sort<T: Ord + Clone>(self, slice: &mut [T]) {
        match self {
            Algorithm::Bubble => BubbleSorter.sort(slice),
            Algorithm::Insertion => InsertionSorter { smart: false }.sort(slice),
            Algorithm::BinaryInsertion => InsertionSorter { smart: true }.sort(slice),
            Algorithm::Selection => SelectionSorter.sort(slice),
            Algorithm::Merge => MergeSorter.sort(slice),
            Algorithm::Heap => HeapSorter.sort(slice),
            Algorithm::HeapBulk => HeapSorter.sort_bulk_by(slice, T::cmp),
            Algorithm::Quick => QuickSorter.sort(slice),
            Algorithm::QuickMedian => MedianQuickSorter.sort(slice),
        }
    }

    /// Human readable name, used in headers and tables.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::BinaryInsertion => "Insertion Sort (binary search)",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::HeapBulk => "Heap Sort (make_heap + sort_heap)",
            Algorithm::Quick => "Quick Sort",
            Algorithm::QuickMedian => "Quick Sort (median of three)",
        }
    }

    /// Whether the sorter does O(n²) work on random input.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::Insertion
                | Algorithm::BinaryInsertion
                | Algorithm::Selection
        )
    }
}

/// Run the sorters from the command line. Install the `orst` binary and run `orst sorters
/// --help` to see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct OrstArgs {
    #[command(subcommand)]
    command: OrstCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum OrstCommands {
    /// Sort the given values and print them.
    Sort {
        /// The sorting algorithm to use.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,

        /// Compare the values as integers instead of as strings.
        #[arg(short, long)]
        numeric: bool,

        /// The values to sort.
        values: Vec<String>,
    },

    /// Count the comparisons every sorter makes on random input of growing size.
    Bench {
        /// Largest input size to benchmark.
        #[arg(long, default_value_t = benchmark::HUNDRED_THOUSAND)]
        max_size: usize,

        /// Inputs larger than this are skipped for the O(n²) sorters.
        #[arg(long, default_value_t = benchmark::TEN_THOUSAND)]
        quadratic_limit: usize,
    },
}

impl OrstArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            OrstCommands::Sort {
                algorithm,
                numeric,
                mut values,
            } => {
                println!("{}", algorithm.name().bold().underline().blue());
                if numeric {
                    let mut numbers = values
                        .iter()
                        .map(|value| {
                            value
                                .parse::<i64>()
                                .with_context(|| format!("`{value}` is not an integer"))
                        })
                        .collect::<anyhow::Result<Vec<_>>>()?;
                    algorithm.sort(&mut numbers);
                    println!("{}", render(&numbers));
                } else {
                    algorithm.sort(&mut values);
                    println!("{}", render(&values));
                }
            }
            OrstCommands::Bench {
                max_size,
                quadratic_limit,
            } => {
                let config = benchmark::BenchConfig::up_to(max_size, quadratic_limit);
                benchmark::run_orst(&config)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_sorts() {
        for &algorithm in Algorithm::value_variants() {
            let mut slice = vec![5, 2, 9, 1, 7, 0, 1, 2, 3, 1, -2];
            algorithm.sort(&mut slice);
            assert_eq!(
                slice,
                [-2, 0, 1, 1, 1, 2, 2, 3, 5, 7, 9],
                "{}",
                algorithm.name()
            );
        }
    }

    #[test]
    fn sort_by_key_uses_key_order() {
        let mut slice = ["ccc", "a", "bb"];
        MergeSorter.sort_by_key(&mut slice, |s| s.len());
        assert_eq!(slice, ["a", "bb", "ccc"]);
    }

    #[test]
    fn sorted_returns_new_order() {
        let values = vec!["b".to_string(), "a".to_string()];
        assert_eq!(sorted(values, &BubbleSorter), ["a", "b"]);
    }

    #[test]
    fn render_numbers() {
        assert_eq!(render(&[-2, 0, 1]), "-2 0 1");
        assert_eq!(render(&[1]), "1");
    }

    #[test]
    fn run_sort_command() {
        let args = OrstArgs {
            command: OrstCommands::Sort {
                algorithm: Algorithm::QuickMedian,
                numeric: true,
                values: vec!["3".into(), "-1".into(), "2".into()],
            },
        };
        assert!(args.run().is_ok());
    }

    #[test]
    fn run_sort_command_rejects_non_numbers() {
        let args = OrstArgs {
            command: OrstCommands::Sort {
                algorithm: Algorithm::Bubble,
                numeric: true,
                values: vec!["3".into(), "three".into()],
            },
        };
        let err = args.run().unwrap_err();
        assert_eq!(err.to_string(), "`three` is not an integer");
    }
}
