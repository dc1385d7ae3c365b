//! Top-down MergeSort.

/// Stable merge sort using one scratch buffer for the whole run.
pub fn merge_sort(mut data: Vec<u64>) -> Vec<u64> {
    let mut scratch = vec![0u64; data.len()];
    sort_slice(&mut data, &mut scratch);
    data
}

fn sort_slice(v: &mut [u64], scratch: &mut [u64]) {
    let n = v.len();
    if n <= 1 {
        return;
    }

    let mid = n / 2;
    sort_slice(&mut v[..mid], &mut scratch[..mid]);
    sort_slice(&mut v[mid..], &mut scratch[mid..]);

    merge(&v[..mid], &v[mid..], &mut scratch[..n]);
    v.copy_from_slice(&scratch[..n]);
}

/// Merge two sorted runs into `out`. Ties take from `left` first.
fn merge(left: &[u64], right: &[u64], out: &mut [u64]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
