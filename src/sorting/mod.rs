//! # Sorting Lab
//!
//! Four comparison sorts over uniformly random `u64` arrays:
//!
//! - **QuickSort**: middle pivot, three-way partition
//! - **MergeSort**: top-down, stable
//! - **HeapSort**: in-place binary max-heap
//! - **ShellSort**: halving gap sequence
//!
//! For a given size every algorithm is timed on the same array, generated
//! once from a seeded RNG before any measurement starts.

pub mod code;
pub mod test;

pub use code::*;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{input_sizes, SORTING_LARGE_INPUTS, SORTING_OUT_DIR, SORTING_SMALL_INPUTS};
use crate::error::{Error, Result};
use crate::registry::{AlgorithmClosure, AlgorithmInfo, Lab};
use crate::utils::plot::{ChartStyle, YScale};
use crate::utils::timer::{measure, TimingConfig};

/// Array length used by `verify`
const VERIFY_SIZE: usize = 2048;

/// `n` integers drawn uniformly from `0..=10n`
pub fn generate_random_array(n: usize, rng: &mut StdRng) -> Vec<u64> {
    let upper = 10 * n as u64;
    (0..n).map(|_| rng.random_range(0..=upper)).collect()
}

/// Generate one array per size from a single seeded stream, in size order.
///
/// Repeated sizes share the first array generated for them.
pub fn generate_inputs(sizes: &[usize], seed: u64) -> HashMap<usize, Vec<u64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut inputs = HashMap::with_capacity(sizes.len());
    for &n in sizes {
        inputs
            .entry(n)
            .or_insert_with(|| generate_random_array(n, &mut rng));
    }
    inputs
}

/// True if `sorted` is non-decreasing and holds exactly the elements of `original`
pub fn is_sorted_permutation(original: &[u64], sorted: &[u64]) -> bool {
    if original.len() != sorted.len() || !sorted.windows(2).all(|w| w[0] <= w[1]) {
        return false;
    }
    let mut expected = original.to_vec();
    expected.sort_unstable();
    expected == sorted
}

/// Runner for the sorting lab
pub struct SortingLab;

impl Lab for SortingLab {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn description(&self) -> &'static str {
        "In-memory sorting of random integer arrays: quick, merge, heap and shell sort"
    }

    fn default_sizes(&self) -> Vec<usize> {
        input_sizes(SORTING_SMALL_INPUTS, SORTING_LARGE_INPUTS)
    }

    fn default_out_dir(&self) -> &'static str {
        SORTING_OUT_DIR
    }

    fn algorithms(&self) -> Vec<AlgorithmInfo> {
        code::available_algorithms().iter().map(|a| a.info()).collect()
    }

    fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            x_label: "n (array size)",
            comparison_title: "Sorting Algorithm Comparison",
            comparison_y_scale: YScale::Linear,
        }
    }

    fn get_algorithm_closures<'a>(
        &'a self,
        sizes: &[usize],
        seed: u64,
        timing: &TimingConfig,
    ) -> Vec<AlgorithmClosure<'a>> {
        // Pre-generate arrays so every algorithm gets the same data
        let inputs = Arc::new(generate_inputs(sizes, seed));

        code::available_algorithms()
            .into_iter()
            .map(|a| {
                let inputs = Arc::clone(&inputs);
                let func = a.function;
                let timing = timing.clone();

                AlgorithmClosure {
                    key: a.key,
                    title: a.title,
                    run: Box::new(move |size| -> Result<Duration> {
                        let data = inputs.get(&size).ok_or(Error::MissingInput(size))?;
                        Ok(measure(func, data, &timing))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(crate::config::DEFAULT_SEED);
        let cases: Vec<Vec<u64>> = vec![
            Vec::new(),
            vec![7],
            vec![2, 1],
            vec![4; 64],
            (0..500).collect(),
            (0..500).rev().collect(),
            generate_random_array(VERIFY_SIZE, &mut rng),
        ];

        for algo in code::available_algorithms() {
            for case in &cases {
                let sorted = (algo.function)(case.clone());
                if !is_sorted_permutation(case, &sorted) {
                    return Err(Error::Verification(format!(
                        "'{}' produced an unsorted or altered array for an input of length {}",
                        algo.key,
                        case.len()
                    )));
                }
            }
        }

        Ok(())
    }
}
