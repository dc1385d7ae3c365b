//! Tests for the Fibonacci implementations.

#[cfg(test)]
mod tests {
    use crate::fibonacci::code::*;
    use crate::fibonacci::FibonacciLab;
    use crate::registry::Lab;
    use crate::utils::timer::TimingConfig;
    use num_bigint::BigUint;
    use std::time::Duration;

    #[test]
    fn test_fib_10_is_55_for_every_algorithm() {
        for algo in available_algorithms() {
            assert_eq!(
                (algo.function)(10),
                BigUint::from(55u32),
                "{}: fib(10) should be 55",
                algo.key
            );
        }
    }

    #[test]
    fn test_sizes_5_and_10() {
        for algo in available_algorithms() {
            let values: Vec<BigUint> = [5u64, 10].iter().map(|&n| (algo.function)(n)).collect();
            assert_eq!(
                values,
                vec![BigUint::from(5u32), BigUint::from(55u32)],
                "{}",
                algo.key
            );
        }
    }

    #[test]
    fn test_base_cases() {
        for algo in available_algorithms() {
            assert_eq!((algo.function)(0), BigUint::from(0u32), "{}: fib(0)", algo.key);
            assert_eq!((algo.function)(1), BigUint::from(1u32), "{}: fib(1)", algo.key);
            assert_eq!((algo.function)(2), BigUint::from(1u32), "{}: fib(2)", algo.key);
        }
    }

    #[test]
    fn test_first_thirty_terms_agree() {
        let reference: Vec<BigUint> = (0..30u64).map(fib_iterative).collect();
        for algo in available_algorithms() {
            for (n, expected) in reference.iter().enumerate() {
                assert_eq!(&(algo.function)(n as u64), expected, "{} at n = {}", algo.key, n);
            }
        }
    }

    #[test]
    fn test_past_u64_range() {
        // F(93) is the largest Fibonacci number that fits in a u64.
        let f93: BigUint = "12200160415121876738".parse().unwrap();
        let f100: BigUint = "354224848179261915075".parse().unwrap();
        for algo in available_algorithms() {
            assert_eq!((algo.function)(93), f93, "{}: fib(93)", algo.key);
            assert_eq!((algo.function)(100), f100, "{}: fib(100)", algo.key);
        }
    }

    #[test]
    fn test_large_index_consistency() {
        let n = 15849;
        let expected = fib_iterative(n);
        // F(n) has about n * log10(phi) ≈ 0.209 n decimal digits
        assert_eq!(expected.to_string().len(), 3312);
        for algo in available_algorithms().iter().skip(1) {
            assert_eq!((algo.function)(n), expected, "{} at n = {}", algo.key, n);
        }
    }

    #[test]
    fn test_lab_verify() {
        FibonacciLab.verify().expect("all Fibonacci algorithms should agree");
    }

    #[test]
    fn test_closures_measure_every_algorithm() {
        let timing = TimingConfig {
            repeats: 2,
            ..TimingConfig::default()
        };
        let mut closures = FibonacciLab.get_algorithm_closures(&[5, 10], 0, &timing);
        assert_eq!(closures.len(), 5);
        for closure in &mut closures {
            for size in [5, 10] {
                let elapsed = (closure.run)(size).unwrap();
                assert!(elapsed >= Duration::ZERO, "{}", closure.key);
            }
        }
    }
}
