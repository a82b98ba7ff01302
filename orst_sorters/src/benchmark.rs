use clap::ValueEnum;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{self, Rng};
use std::{cell::Cell, rc::Rc, time::Instant};

use prettytable::{row, Table};

use super::Algorithm;

pub const ZERO: usize = 0;
pub const ONE: usize = 1;
pub const HUNDRED: usize = 100;
pub const TEN_THOUSAND: usize = 10_000;
pub const HUNDRED_THOUSAND: usize = 100_000;
pub const MILLION: usize = 1_000_000;
pub const HUNDRED_MILLION: usize = 100_000_000;

const SIZES: [usize; 7] = [
    ZERO,
    ONE,
    HUNDRED,
    TEN_THOUSAND,
    HUNDRED_THOUSAND,
    MILLION,
    HUNDRED_MILLION,
];

/// Which input sizes to run and where the O(n²) sorters give up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub quadratic_limit: usize,
}

impl BenchConfig {
    /// Every standard size up to and including `max_size`.
    pub fn up_to(max_size: usize, quadratic_limit: usize) -> Self {
        Self {
            sizes: SIZES.into_iter().filter(|&n| n <= max_size).collect(),
            quadratic_limit,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::up_to(HUNDRED_THOUSAND, TEN_THOUSAND)
    }
}

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Clone)]
struct SortEvaluator<T> {
    // For making the comparisons
    elem: T,
    // Shared by every element of one input, bumped on each comparison. The sorters only hand out
    // shared references, hence the cell.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn bump(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bump();
        self.elem == other.elem
    }
}

// `partial_cmp` must agree with `cmp`, and both count as one comparison.
impl<T: Ord> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bump();
        self.elem.cmp(&other.elem)
    }
}

/// Sorts a copy of `values` with `algorithm` and returns how many comparisons it took.
///
/// ```
/// use orst_sorters::{benchmark::count_comparisons, Algorithm};
///
/// assert_eq!(count_comparisons(Algorithm::Bubble, &[1, 2, 3, 4, 5]), 4);
/// ```
pub fn count_comparisons<T>(algorithm: Algorithm, values: &[T]) -> usize
where
    T: Ord + Clone,
{
    let counter = Rc::new(Cell::new(0));
    let mut evaluators = values
        .iter()
        .cloned()
        .map(|elem| SortEvaluator::new(elem, counter.clone()))
        .collect::<Vec<_>>();

    algorithm.sort(&mut evaluators);

    counter.get()
}

/// Runs every sorter on fresh random input for each size in `config` and prints a table of the
/// comparisons made and the time taken.
pub fn run_orst(config: &BenchConfig) -> anyhow::Result<()> {
    let mut random = rand::thread_rng();
    let algorithms = Algorithm::value_variants();

    for &n in &config.sizes {
        let values = (0..n).map(|_| random.gen::<i32>()).collect::<Vec<_>>();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let pb = ProgressBar::new(algorithms.len() as u64);
        pb.set_style(ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Sorters: ({pos}/{len}) {msg}",
        )?);

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        for &algorithm in algorithms {
            pb.set_message(algorithm.name());

            if algorithm.is_quadratic() && n > config.quadratic_limit {
                table.add_row(row![algorithm.name(), "Not Doing It".red(), "It is Stupid"]);
            } else {
                let now = Instant::now();
                let took = count_comparisons(algorithm, &values);
                table.add_row(row![
                    algorithm.name(),
                    took.to_string(),
                    format!("{:?}", now.elapsed())
                ]);
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        table.printstd();
        println!();
    }

    Ok(())
}
