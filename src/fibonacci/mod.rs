//! # Fibonacci Lab
//!
//! Five ways to compute the exact value of F(n):
//!
//! - **Iterative**: O(n) additions
//! - **Memoized**: O(n) additions through a memo table
//! - **Fast doubling**: O(log n) multiplications
//! - **Binomial sum**: O(n) big-by-small multiplications and divisions
//! - **Matrix exponentiation**: O(log n) 2x2 matrix products
//!
//! All values are arbitrary precision, so the large half of the size domain
//! measures big-integer arithmetic as much as the recurrence itself.

pub mod code;
pub mod test;

pub use code::*;

use std::time::Duration;

use crate::config::{
    input_sizes, FIBONACCI_LARGE_INPUTS, FIBONACCI_OUT_DIR, FIBONACCI_SMALL_INPUTS,
};
use crate::error::{Error, Result};
use crate::registry::{AlgorithmClosure, AlgorithmInfo, Lab};
use crate::utils::plot::{ChartStyle, YScale};
use crate::utils::timer::{measure, TimingConfig};

/// Indices checked by `verify`, small edge cases plus a few large ones
const VERIFY_INPUTS: &[u64] = &[0, 1, 2, 3, 5, 10, 45, 93, 94, 187, 1000, 2512];

/// Runner for the Fibonacci lab
pub struct FibonacciLab;

impl Lab for FibonacciLab {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn description(&self) -> &'static str {
        "Exact Fibonacci numbers: linear, memoized, doubling, binomial and matrix methods"
    }

    fn default_sizes(&self) -> Vec<usize> {
        input_sizes(FIBONACCI_SMALL_INPUTS, FIBONACCI_LARGE_INPUTS)
    }

    fn default_out_dir(&self) -> &'static str {
        FIBONACCI_OUT_DIR
    }

    fn algorithms(&self) -> Vec<AlgorithmInfo> {
        code::available_algorithms().iter().map(|a| a.info()).collect()
    }

    fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            x_label: "n",
            comparison_title: "Fibonacci Algorithm Comparison",
            comparison_y_scale: YScale::Log,
        }
    }

    fn get_algorithm_closures<'a>(
        &'a self,
        _sizes: &[usize],
        _seed: u64,
        timing: &TimingConfig,
    ) -> Vec<AlgorithmClosure<'a>> {
        code::available_algorithms()
            .into_iter()
            .map(|a| {
                let func = a.function;
                let timing = timing.clone();

                AlgorithmClosure {
                    key: a.key,
                    title: a.title,
                    run: Box::new(move |size| -> Result<Duration> {
                        Ok(measure(func, &(size as u64), &timing))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        let algorithms = code::available_algorithms();
        let reference = algorithms
            .first()
            .ok_or_else(|| Error::Verification("no Fibonacci algorithms registered".into()))?;

        for &n in VERIFY_INPUTS {
            let expected = (reference.function)(n);
            for algo in algorithms.iter().skip(1) {
                let got = (algo.function)(n);
                if got != expected {
                    return Err(Error::Verification(format!(
                        "'{}' disagrees with '{}' at n = {}: {} != {}",
                        algo.key, reference.key, n, got, expected
                    )));
                }
            }
        }

        Ok(())
    }
}
