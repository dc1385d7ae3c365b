//! Tests for the sorting implementations.

#[cfg(test)]
mod tests {
    use crate::sorting::code::*;
    use crate::sorting::{generate_inputs, is_sorted_permutation, SortingLab};
    use crate::registry::Lab;
    use crate::utils::timer::TimingConfig;

    #[test]
    fn test_basic() {
        let input = vec![5, 2, 9, 1, 5, 6];
        for algo in available_algorithms() {
            assert_eq!(
                (algo.function)(input.clone()),
                vec![1, 2, 5, 5, 6, 9],
                "{}",
                algo.key
            );
        }
    }

    #[test]
    fn test_empty_and_single() {
        for algo in available_algorithms() {
            assert!((algo.function)(Vec::new()).is_empty(), "{}", algo.key);
            assert_eq!((algo.function)(vec![42]), vec![42], "{}", algo.key);
        }
    }

    #[test]
    fn test_all_equal_and_presorted() {
        let equal = vec![3u64; 257];
        let ascending: Vec<u64> = (0..1000).collect();
        let descending: Vec<u64> = (0..1000).rev().collect();

        for algo in available_algorithms() {
            assert_eq!((algo.function)(equal.clone()), equal, "{}", algo.key);
            assert_eq!((algo.function)(ascending.clone()), ascending, "{}", algo.key);
            assert_eq!((algo.function)(descending.clone()), ascending, "{}", algo.key);
        }
    }

    #[test]
    fn test_shared_inputs_sorted_by_every_algorithm() {
        let sizes = SortingLab.default_sizes();
        let inputs = generate_inputs(&sizes, 42);

        for algo in available_algorithms() {
            for &n in &sizes {
                let original = &inputs[&n];
                let sorted = (algo.function)(original.clone());
                assert!(
                    is_sorted_permutation(original, &sorted),
                    "{} failed at n = {}",
                    algo.key,
                    n
                );
            }
        }
    }

    #[test]
    fn test_generated_inputs_are_reproducible() {
        let sizes = [10, 100, 1000];
        let a = generate_inputs(&sizes, 42);
        let b = generate_inputs(&sizes, 42);
        let c = generate_inputs(&sizes, 7);

        assert_eq!(a, b);
        assert_ne!(a[&1000], c[&1000]);
        for n in sizes {
            assert_eq!(a[&n].len(), n);
            assert!(a[&n].iter().all(|&x| x <= 10 * n as u64));
        }
    }

    #[test]
    fn test_is_sorted_permutation() {
        assert!(is_sorted_permutation(&[3, 1, 2], &[1, 2, 3]));
        assert!(!is_sorted_permutation(&[3, 1, 2], &[1, 3, 2]));
        assert!(!is_sorted_permutation(&[3, 1, 2], &[1, 2, 2]));
        assert!(!is_sorted_permutation(&[3, 1, 2], &[1, 2]));
    }

    #[test]
    fn test_lab_verify() {
        SortingLab.verify().expect("all sorting algorithms should pass");
    }

    #[test]
    fn test_closure_reports_missing_input() {
        let mut closures = SortingLab.get_algorithm_closures(&[100], 42, &TimingConfig::default());
        assert_eq!(closures.len(), 4);

        let first = &mut closures[0];
        assert!((first.run)(100).is_ok());
        assert!(matches!(
            (first.run)(200),
            Err(crate::error::Error::MissingInput(200))
        ));
    }
}
