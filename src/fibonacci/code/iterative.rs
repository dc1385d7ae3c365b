//! Linear iterative Fibonacci.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Compute F(n) by walking the sequence with two accumulators.
///
/// # Example
/// ```
/// use algo_lab_bench::fibonacci::fib_iterative;
///
/// assert_eq!(fib_iterative(10), num_bigint::BigUint::from(55u32));
/// ```
pub fn fib_iterative(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}
