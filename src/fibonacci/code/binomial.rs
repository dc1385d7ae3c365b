//! Binomial sum along the shallow diagonals of Pascal's triangle.
//!
//! F(n) = Σ C(n-k-1, k) for k in 0..=(n-1)/2

use num_bigint::BigUint;
use num_traits::{One, Zero};

pub fn fib_binomial(n: u64) -> BigUint {
    if n == 0 {
        return BigUint::zero();
    }

    let max_k = (n - 1) / 2;
    let mut term = BigUint::one();
    let mut total = BigUint::zero();

    for k in 0..=max_k {
        total += &term;
        if k < max_k {
            // C(m-1, k+1) / C(m, k) with m = n-k-1, expanded to integer factors.
            // The product is always divisible by the denominator.
            let numerator = (n - 2 * k - 1) * (n - 2 * k - 2);
            let denominator = (k + 1) * (n - k - 1);
            term = term * numerator / denominator;
        }
    }

    total
}
