//! Heapsort fallback, invoked when the introsort recursion depth budget is exhausted.
//!
//! Guarantees worst-case `O(n log n)` regardless of pivot choice, at the cost of the constant
//! factors introsort otherwise avoids by preferring quicksort-style partitioning.

use crate::ordering::Comparator;

/// Sorts `keys` in place via a standard max-heap sort.
pub(crate) fn heapsort<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C) {
    let n = keys.len();
    for i in (1..=n / 2).rev() {
        sift_down(keys, cmp, i - 1, n);
    }
    for end in (2..=n).rev() {
        keys.swap(0, end - 1);
        sift_down(keys, cmp, 0, end - 1);
    }
}

fn sift_down<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C, mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let greater_child = if right < len && cmp.less(&keys[left], &keys[right]) {
            right
        } else {
            left
        };
        if cmp.less(&keys[root], &keys[greater_child]) {
            keys.swap(root, greater_child);
            root = greater_child;
        } else {
            break;
        }
    }
}

/// Keys+values variant of [`heapsort`]: every key swap during heapify/extract/sift-down
/// carries its paired value.
pub(crate) fn heapsort_pairs<K, V, C: Comparator<K>>(keys: &mut [K], values: &mut [V], cmp: &mut C) {
    let n = keys.len();
    for i in (1..=n / 2).rev() {
        sift_down_pairs(keys, values, cmp, i - 1, n);
    }
    for end in (2..=n).rev() {
        keys.swap(0, end - 1);
        values.swap(0, end - 1);
        sift_down_pairs(keys, values, cmp, 0, end - 1);
    }
}

fn sift_down_pairs<K, V, C: Comparator<K>>(
    keys: &mut [K],
    values: &mut [V],
    cmp: &mut C,
    mut root: usize,
    len: usize,
) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let greater_child = if right < len && cmp.less(&keys[left], &keys[right]) {
            right
        } else {
            left
        };
        if cmp.less(&keys[root], &keys[greater_child]) {
            keys.swap(root, greater_child);
            values.swap(root, greater_child);
            root = greater_child;
        } else {
            break;
        }
    }
}
