//! Lab registry.
//!
//! A lab is a family of algorithms measured over one input-size domain and
//! plotted on one comparison chart. The harness only talks to labs through
//! the [`Lab`] trait, so both binaries share the same run loop.

use std::time::Duration;

use crate::error::Result;
use crate::utils::plot::ChartStyle;
use crate::utils::timer::TimingConfig;

/// Key and display title of one algorithm in a lab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub key: &'static str,
    pub title: &'static str,
}

/// A ready-to-measure algorithm.
///
/// `run` performs one best-of-R measurement at the given input size. Inputs
/// are prepared before the closure is built, so every algorithm sees the same
/// data for a given size.
pub struct AlgorithmClosure<'a> {
    pub key: &'static str,
    pub title: &'static str,
    pub run: Box<dyn FnMut(usize) -> Result<Duration> + 'a>,
}

/// Trait that every lab must implement
pub trait Lab: Send + Sync {
    /// Name of the lab (e.g., "fibonacci")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Input sizes measured when none are given on the command line
    fn default_sizes(&self) -> Vec<usize>;

    /// Directory that receives `results/` and `figures/` when `--out-dir` is not given
    fn default_out_dir(&self) -> &'static str;

    /// Registered algorithms, in report order
    fn algorithms(&self) -> Vec<AlgorithmInfo>;

    /// Axis labels, titles and y-scale for this lab's charts
    fn chart_style(&self) -> ChartStyle;

    /// Prepare inputs for `sizes` and return one closure per algorithm.
    fn get_algorithm_closures<'a>(
        &'a self,
        sizes: &[usize],
        seed: u64,
        timing: &TimingConfig,
    ) -> Vec<AlgorithmClosure<'a>>;

    /// Check every algorithm's output against the lab's correctness rule
    fn verify(&self) -> Result<()>;
}

/// Registry of all labs
pub struct LabRegistry {
    labs: Vec<Box<dyn Lab>>,
}

impl LabRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { labs: Vec::new() }
    }

    /// Register a lab
    pub fn register<L: Lab + 'static>(&mut self, lab: L) {
        self.labs.push(Box::new(lab));
    }

    /// Get all registered labs
    pub fn all(&self) -> &[Box<dyn Lab>] {
        &self.labs
    }

    /// Find lab by name
    pub fn find(&self, name: &str) -> Option<&dyn Lab> {
        self.labs
            .iter()
            .find(|l| l.name() == name)
            .map(|l| l.as_ref())
    }

    /// List lab names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.labs.iter().map(|l| l.name()).collect()
    }
}

impl Default for LabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with both labs
pub fn build_registry() -> LabRegistry {
    let mut registry = LabRegistry::new();

    registry.register(crate::fibonacci::FibonacciLab);
    registry.register(crate::sorting::SortingLab);

    registry
}
