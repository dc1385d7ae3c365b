//! Lab 2: sorting algorithms.
//!
//! Usage:
//!   lab2                      # Run with the built-in sizes, writing to ./results and ./figures
//!   lab2 --seed 7             # Different input arrays
//!   lab2 --out-dir report     # Write under report/results and report/figures

fn main() -> anyhow::Result<()> {
    algo_lab_bench::cli::main_for("sorting")
}
