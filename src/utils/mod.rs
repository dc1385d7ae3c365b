//! Utility modules for timing, running and exporting.

pub mod cpu_affinity;
pub mod export;
pub mod plot;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use runner::{run_all, run_all_with, ResultCollection, ResultSet, TimingSample};
pub use timer::{measure, PinStrategy, TimingConfig};

/// One algorithm of a lab.
/// Generic over F which is the function signature.
pub struct AlgorithmEntry<F> {
    /// Stable identifier, used for output file names (e.g., "fast_doubling")
    pub key: &'static str,
    /// Human-readable title, used in charts and tables
    pub title: &'static str,
    /// The implementation
    pub function: F,
}

impl<F> AlgorithmEntry<F> {
    pub fn info(&self) -> crate::registry::AlgorithmInfo {
        crate::registry::AlgorithmInfo {
            key: self.key,
            title: self.title,
        }
    }
}
