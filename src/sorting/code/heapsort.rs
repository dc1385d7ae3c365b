//! In-place HeapSort.

pub fn heapsort(mut data: Vec<u64>) -> Vec<u64> {
    let n = data.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut data, n, i);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(&mut data, end, 0);
    }

    data
}

/// Restore the max-heap property for the subtree rooted at `i` within `v[..n]`.
fn sift_down(v: &mut [u64], n: usize, mut i: usize) {
    loop {
        let left = 2 * i + 1;
        let right = left + 1;
        let mut largest = i;

        if left < n && v[left] > v[largest] {
            largest = left;
        }
        if right < n && v[right] > v[largest] {
            largest = right;
        }
        if largest == i {
            break;
        }

        v.swap(i, largest);
        i = largest;
    }
}
