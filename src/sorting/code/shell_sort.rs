//! ShellSort with Shell's original gap sequence (n/2, n/4, ..., 1).

pub fn shell_sort(mut data: Vec<u64>) -> Vec<u64> {
    let n = data.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            while j >= gap && data[j - gap] > temp {
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = temp;
        }
        gap /= 2;
    }

    data
}
