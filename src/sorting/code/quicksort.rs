//! QuickSort with a middle pivot and a three-way partition.

/// Sort by partitioning into `< pivot`, `== pivot` and `> pivot` bands.
///
/// Runs of equal keys land in the middle band and are never revisited, so
/// inputs with many duplicates stay O(n log n).
pub fn quicksort(mut data: Vec<u64>) -> Vec<u64> {
    sort_slice(&mut data);
    data
}

fn sort_slice(mut slice: &mut [u64]) {
    while slice.len() > 1 {
        let pivot = slice[slice.len() / 2];
        let (lt, gt) = partition3(slice, pivot);

        let (left, rest) = std::mem::take(&mut slice).split_at_mut(lt);
        let right = &mut rest[gt - lt..];

        // Recurse into the smaller band, loop on the larger one: depth stays O(log n).
        if left.len() < right.len() {
            sort_slice(left);
            slice = right;
        } else {
            sort_slice(right);
            slice = left;
        }
    }
}

/// Dutch national flag partition. Returns `(lt, gt)` such that
/// `v[..lt] < pivot`, `v[lt..gt] == pivot` and `v[gt..] > pivot`.
fn partition3(v: &mut [u64], pivot: u64) -> (usize, usize) {
    let (mut lt, mut i, mut gt) = (0, 0, v.len());
    while i < gt {
        if v[i] < pivot {
            v.swap(lt, i);
            lt += 1;
            i += 1;
        } else if v[i] > pivot {
            gt -= 1;
            v.swap(i, gt);
        } else {
            i += 1;
        }
    }
    (lt, gt)
}
