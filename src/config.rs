//! Build-time constants and the run configuration derived from them.
//!
//! Every run uses these values unless a command-line flag overrides them.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::utils::timer::TimingConfig;

/// Fibonacci indices below the point where the linear algorithms stop being instant
pub const FIBONACCI_SMALL_INPUTS: &[usize] = &[
    5, 7, 10, 12, 15, 17, 20, 22, 25, 27, 30, 32, 35, 37, 40, 42, 45,
];

/// Roughly log-spaced Fibonacci indices (ten steps per decade)
pub const FIBONACCI_LARGE_INPUTS: &[usize] = &[
    501, 631, 794, 1000, 1259, 1585, 1995, 2512, 3162, 3981, 5012, 6310, 7943, 10000, 12589,
    15849,
];

pub const SORTING_SMALL_INPUTS: &[usize] = &[100, 500, 1000, 2000, 5000, 10000];
pub const SORTING_LARGE_INPUTS: &[usize] = &[20000, 30000, 50000, 75000, 100000];

/// Trials per (algorithm, size); the minimum is kept
pub const DEFAULT_REPEATS: usize = 3;

/// Seed for the sorting lab's input arrays
pub const DEFAULT_SEED: u64 = 42;

/// Per-lab output roots, so running both labs in one directory keeps both comparison charts
pub const FIBONACCI_OUT_DIR: &str = "lab1";
pub const SORTING_OUT_DIR: &str = "lab2";

pub const RESULTS_DIR: &str = "results";
pub const FIGURES_DIR: &str = "figures";

/// Concatenate the small and large size lists of a lab
pub fn input_sizes(small: &[usize], large: &[usize]) -> Vec<usize> {
    small.iter().chain(large).copied().collect()
}

/// Everything a single lab run needs to know
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Input sizes, in the order they are measured and plotted
    pub sizes: Vec<usize>,
    pub timing: TimingConfig,
    pub seed: u64,
    /// Directory that receives `results/` and `figures/`
    pub output_root: PathBuf,
    /// Check algorithm correctness before timing anything
    pub verify: bool,
}

impl BenchConfig {
    /// Defaults for a lab with the given size domain
    pub fn with_sizes(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            timing: TimingConfig::default(),
            seed: DEFAULT_SEED,
            output_root: PathBuf::from("."),
            verify: true,
        }
    }

    pub fn results_dir(&self) -> PathBuf {
        self.output_root.join(RESULTS_DIR)
    }

    pub fn figures_dir(&self) -> PathBuf {
        self.output_root.join(FIGURES_DIR)
    }

    /// Reject configurations the harness cannot measure
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("input size list is empty".into()));
        }
        if let Some(pos) = self.sizes.iter().position(|&n| n == 0) {
            return Err(Error::InvalidConfig(format!(
                "input sizes must be positive (entry {} is 0)",
                pos
            )));
        }
        if self.timing.repeats == 0 {
            return Err(Error::InvalidConfig("repeat count must be at least 1".into()));
        }
        Ok(())
    }
}
