//! Fast exponentiation of the Fibonacci Q-matrix [[1, 1], [1, 0]].

use num_bigint::BigUint;
use num_traits::{One, Zero};

type Matrix = [[BigUint; 2]; 2];

fn identity() -> Matrix {
    [
        [BigUint::one(), BigUint::zero()],
        [BigUint::zero(), BigUint::one()],
    ]
}

fn mat_mul(a: &Matrix, b: &Matrix) -> Matrix {
    [
        [
            &a[0][0] * &b[0][0] + &a[0][1] * &b[1][0],
            &a[0][0] * &b[0][1] + &a[0][1] * &b[1][1],
        ],
        [
            &a[1][0] * &b[0][0] + &a[1][1] * &b[1][0],
            &a[1][0] * &b[0][1] + &a[1][1] * &b[1][1],
        ],
    ]
}

fn mat_pow(mut p: u64) -> Matrix {
    let mut result = identity();
    let mut base: Matrix = [
        [BigUint::one(), BigUint::one()],
        [BigUint::one(), BigUint::zero()],
    ];

    while p > 0 {
        if p & 1 == 1 {
            result = mat_mul(&result, &base);
        }
        p >>= 1;
        if p > 0 {
            base = mat_mul(&base, &base);
        }
    }
    result
}

/// Q^n = [[F(n+1), F(n)], [F(n), F(n-1)]]
pub fn fib_matrix_fast(n: u64) -> BigUint {
    if n == 0 {
        return BigUint::zero();
    }
    let [[_, f_n], _] = mat_pow(n);
    f_n
}
