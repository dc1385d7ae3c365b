//! Fibonacci implementations.
//!
//! Every implementation returns the exact value of F(n) with F(0) = 0 and
//! F(1) = 1.

mod binomial;
mod fast_doubling;
mod iterative;
mod matrix;
mod memoized;

pub use binomial::fib_binomial;
pub use fast_doubling::fib_fast_doubling;
pub use iterative::fib_iterative;
pub use matrix::fib_matrix_fast;
pub use memoized::fib_memoized;

use num_bigint::BigUint;

use crate::utils::AlgorithmEntry;

/// Type alias for the Fibonacci function signature
pub type FibFn = fn(u64) -> BigUint;

/// All Fibonacci algorithms, in report order. The first one is the reference.
pub fn available_algorithms() -> Vec<AlgorithmEntry<FibFn>> {
    vec![
        AlgorithmEntry {
            key: "iterative",
            title: "Iterative Linear",
            function: fib_iterative,
        },
        AlgorithmEntry {
            key: "memoized",
            title: "Memoized Recursion",
            function: fib_memoized,
        },
        AlgorithmEntry {
            key: "fast_doubling",
            title: "Fast Doubling",
            function: fib_fast_doubling,
        },
        AlgorithmEntry {
            key: "binomial",
            title: "Binomial Sum",
            function: fib_binomial,
        },
        AlgorithmEntry {
            key: "matrix_fast",
            title: "Fast Matrix Exponentiation",
            function: fib_matrix_fast,
        },
    ]
}
