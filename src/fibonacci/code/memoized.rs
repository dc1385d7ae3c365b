//! Memoised recursion, evaluated with an explicit work stack.
//!
//! The recursion F(k) = F(k-1) + F(k-2) is unrolled onto a heap-allocated
//! stack so n in the tens of thousands never touches the call stack limit.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

pub fn fib_memoized(n: u64) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }

    let mut memo: HashMap<u64, BigUint> = HashMap::with_capacity(n as usize + 1);
    memo.insert(0, BigUint::zero());
    memo.insert(1, BigUint::one());

    let mut stack = vec![n];
    while let Some(k) = stack.pop() {
        if memo.contains_key(&k) {
            continue;
        }

        let (k1, k2) = (k - 1, k - 2);
        let ready = match (memo.get(&k1), memo.get(&k2)) {
            (Some(f1), Some(f2)) => Some(f1 + f2),
            _ => None,
        };

        if let Some(value) = ready {
            memo.insert(k, value);
            continue;
        }

        stack.push(k);
        if !memo.contains_key(&k1) {
            stack.push(k1);
        }
        if !memo.contains_key(&k2) {
            stack.push(k2);
        }
    }

    memo.remove(&n).unwrap_or_default()
}
