//! Lab 1: Fibonacci algorithms.
//!
//! Usage:
//!   lab1                      # Run with the built-in sizes, writing to ./results and ./figures
//!   lab1 --sizes 5,10,1000    # Custom sizes
//!   lab1 --list               # List labs and algorithms

fn main() -> anyhow::Result<()> {
    algo_lab_bench::cli::main_for("fibonacci")
}
