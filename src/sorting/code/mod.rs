//! Sorting implementations.
//!
//! Each algorithm takes ownership of its own copy of the input and returns
//! the sorted vector.

mod heapsort;
mod merge_sort;
mod quicksort;
mod shell_sort;

pub use heapsort::heapsort;
pub use merge_sort::merge_sort;
pub use quicksort::quicksort;
pub use shell_sort::shell_sort;

use crate::utils::AlgorithmEntry;

/// Type alias for the sorting function signature
pub type SortFn = fn(Vec<u64>) -> Vec<u64>;

/// All sorting algorithms, in report order
pub fn available_algorithms() -> Vec<AlgorithmEntry<SortFn>> {
    vec![
        AlgorithmEntry {
            key: "quicksort",
            title: "QuickSort",
            function: quicksort,
        },
        AlgorithmEntry {
            key: "mergesort",
            title: "MergeSort",
            function: merge_sort,
        },
        AlgorithmEntry {
            key: "heapsort",
            title: "HeapSort",
            function: heapsort,
        },
        AlgorithmEntry {
            key: "shellsort",
            title: "ShellSort",
            function: shell_sort,
        },
    ]
}
