//! Fast doubling.
//!
//! F(2k)   = F(k) * (2 F(k+1) - F(k))
//! F(2k+1) = F(k)^2 + F(k+1)^2

use num_bigint::BigUint;
use num_traits::{One, Zero};

pub fn fib_fast_doubling(n: u64) -> BigUint {
    doubling(n).0
}

/// Returns (F(k), F(k+1)). Recursion depth is log2(k).
fn doubling(k: u64) -> (BigUint, BigUint) {
    if k == 0 {
        return (BigUint::zero(), BigUint::one());
    }

    let (a, b) = doubling(k / 2);
    // 2b >= a for every k, so the subtraction cannot underflow.
    let c = &a * ((&b << 1usize) - &a);
    let d = &a * &a + &b * &b;

    if k % 2 == 0 {
        (c, d)
    } else {
        let next = &c + &d;
        (d, next)
    }
}
